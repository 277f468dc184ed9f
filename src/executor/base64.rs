// Base64 command executor

use std::sync::Arc;

use async_trait::async_trait;

use super::codec;
use super::error::{ExecutorError, ExecutorResult};
use super::os_default_command;
use super::shell;
use super::system_info::Platform;
use super::types::ShellType;
use super::CommandExecutor;
use crate::logging::{Logger, ModuleLogger};

/// Executes base64 encoded commands.
///
/// PowerShell and sh consume the encoded payload themselves; for any shell
/// resolving to cmd the payload is decoded locally and run as plaintext.
pub struct Base64Executor {
    logger: ModuleLogger,
    shell: ShellType,
    default_command: String,
}

impl Base64Executor {
    pub fn new(shell: ShellType, logger: &Arc<Logger>) -> Self {
        // Pre-encode the OS default with the encoding rule of the shell this
        // executor is bound to.
        let default_command = codec::encode(os_default_command(Platform::current()), shell);
        Self {
            logger: ModuleLogger::new(logger, "executor.base64"),
            shell,
            default_command,
        }
    }
}

#[async_trait]
impl CommandExecutor for Base64Executor {
    async fn execute(&self, encoded: &str) -> ExecutorResult<()> {
        let encoded = if encoded.is_empty() {
            self.logger.info("Using default base64 command");
            self.default_command.as_str()
        } else {
            encoded
        };

        let platform = Platform::current();
        let resolved = self.shell.resolve(platform);
        self.logger
            .debug(&format!("Executing base64 command (shell: {resolved})"));

        match resolved {
            // These shells decode the payload themselves.
            ShellType::PowerShell | ShellType::Sh => {
                shell::base64_invocation(encoded, resolved, platform).run().await
            }
            // cmd cannot consume an encoded payload: decode locally, then
            // execute the plaintext.
            _ => {
                let decoded = codec::decode(encoded).map_err(|err| {
                    ExecutorError::execution(format!("failed to decode base64 command: {err}"))
                })?;
                self.logger.debug(&format!("Executing decoded: {decoded}"));
                shell::shell_invocation(&decoded, resolved, platform).run().await
            }
        }
    }

    fn encode(&self, command: &str) -> String {
        codec::encode(command, self.shell)
    }

    fn decode(&self, encoded: &str) -> ExecutorResult<String> {
        codec::decode(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    fn quiet_logger() -> Arc<Logger> {
        Arc::new(Logger::with_color(LogLevel::Fatal, false))
    }

    #[test]
    fn test_encode_uses_shell_charset() {
        let sh = Base64Executor::new(ShellType::Sh, &quiet_logger());
        assert_eq!(sh.encode("dir"), "ZGly");

        let powershell = Base64Executor::new(ShellType::PowerShell, &quiet_logger());
        assert_eq!(powershell.encode("dir"), "ZABpAHIA");
    }

    #[test]
    fn test_decode_delegates_to_codec() {
        let executor = Base64Executor::new(ShellType::Sh, &quiet_logger());
        assert_eq!(executor.decode("ZGly").unwrap(), "dir");
        assert!(executor.decode("%%%").is_err());
    }

    #[test]
    fn test_default_command_is_pre_encoded() {
        let executor = Base64Executor::new(ShellType::Sh, &quiet_logger());
        let expected = codec::encode(os_default_command(Platform::current()), ShellType::Sh);
        assert_eq!(executor.default_command, expected);
        // The stored default decodes back to the OS default command.
        assert_eq!(
            codec::decode(&executor.default_command).unwrap(),
            os_default_command(Platform::current())
        );
    }

    #[tokio::test]
    async fn test_execute_rejects_malformed_payload_without_spawning() {
        // A shell resolving to cmd decodes locally first; malformed input must
        // fail before any process is spawned.
        let executor = Base64Executor::new(ShellType::Cmd, &quiet_logger());
        let result = executor.execute("!!!not-base64!!!").await;
        assert!(matches!(result, Err(ExecutorError::Execution(_))));
    }
}
