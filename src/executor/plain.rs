// Plaintext command executor

use std::sync::Arc;

use async_trait::async_trait;

use super::error::ExecutorResult;
use super::os_default_command;
use super::shell;
use super::system_info::Platform;
use super::types::ShellType;
use super::CommandExecutor;
use crate::logging::{Logger, ModuleLogger};

/// Executes commands as-is through the configured shell.
pub struct PlainExecutor {
    logger: ModuleLogger,
    shell: ShellType,
    default_command: String,
}

impl PlainExecutor {
    pub fn new(shell: ShellType, logger: &Arc<Logger>) -> Self {
        Self {
            logger: ModuleLogger::new(logger, "executor.plain"),
            shell,
            default_command: os_default_command(Platform::current()).to_string(),
        }
    }
}

#[async_trait]
impl CommandExecutor for PlainExecutor {
    async fn execute(&self, command: &str) -> ExecutorResult<()> {
        let command = if command.is_empty() {
            self.logger
                .info(&format!("Using default plaintext command: {}", self.default_command));
            self.default_command.as_str()
        } else {
            command
        };

        self.logger
            .debug(&format!("Executing: {command} (shell: {})", self.shell));
        shell::shell_invocation(command, self.shell, Platform::current())
            .run()
            .await
    }

    /// No transformation for the plain executor.
    fn encode(&self, command: &str) -> String {
        command.to_string()
    }

    /// No transformation for the plain executor; never fails.
    fn decode(&self, encoded: &str) -> ExecutorResult<String> {
        Ok(encoded.to_string())
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
    fn test_encode_and_decode_are_identity() {
        let executor = PlainExecutor::new(ShellType::Sh, &quiet_logger());
        assert_eq!(executor.encode("echo hi"), "echo hi");
        assert_eq!(executor.decode("ZGly").unwrap(), "ZGly");
    }

    #[test]
    fn test_default_command_matches_platform() {
        let executor = PlainExecutor::new(ShellType::Auto, &quiet_logger());
        if Platform::current().is_windows() {
            assert_eq!(executor.default_command, "ipconfig");
        } else {
            assert_eq!(executor.default_command, "ifconfig");
        }
    }
}
