// Command Execution Module
//
// Command-execution strategy layer: shell invocation selection per
// (executor type, shell type, platform) triple, shell-aware base64
// encoding/decoding, and compatibility validation between executor and shell
// before anything is spawned.

pub mod base64;
pub mod codec;
pub mod compat;
pub mod error;
pub mod factory;
pub mod plain;
pub mod shell;
pub mod system_info;
pub mod types;

use async_trait::async_trait;

pub use self::base64::Base64Executor;
pub use error::{ExecutorError, ExecutorResult};
pub use factory::ExecutorFactory;
pub use plain::PlainExecutor;
pub use shell::ShellInvocation;
pub use system_info::{Platform, SystemInfo};
pub use types::{ExecutorType, ShellType};

/// Uniform contract implemented by every execution strategy.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command; the meaning of the string depends on the executor
    /// type (plaintext or base64 encoded). An empty command runs an
    /// OS-specific default.
    async fn execute(&self, command: &str) -> ExecutorResult<()>;

    /// Encode a command for this executor.
    fn encode(&self, command: &str) -> String;

    /// Decode an encoded command for this executor.
    fn decode(&self, encoded: &str) -> ExecutorResult<String>;
}

/// OS-specific default command used when none is given.
pub(crate) fn os_default_command(platform: Platform) -> &'static str {
    if platform.is_windows() {
        "ipconfig"
    } else {
        "ifconfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_default_command() {
        assert_eq!(os_default_command(Platform::Windows), "ipconfig");
        assert_eq!(os_default_command(Platform::Linux), "ifconfig");
        assert_eq!(os_default_command(Platform::MacOS), "ifconfig");
    }
}
