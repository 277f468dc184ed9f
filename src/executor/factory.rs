// Executor construction

use std::sync::Arc;

use super::base64::Base64Executor;
use super::plain::PlainExecutor;
use super::types::{ExecutorType, ShellType};
use super::CommandExecutor;
use crate::logging::{Logger, ModuleLogger};

/// Builds executors bound to a (executor type, shell type) pair.
///
/// The factory performs no shell overriding of its own; callers apply
/// `compat::preferred_shell` before delegating here.
pub struct ExecutorFactory {
    logger: ModuleLogger,
    root: Arc<Logger>,
}

impl ExecutorFactory {
    pub fn new(logger: &Arc<Logger>) -> Self {
        Self {
            logger: ModuleLogger::new(logger, "executor.factory"),
            root: Arc::clone(logger),
        }
    }

    /// Create an executor of the given type bound to the given shell.
    pub fn create(&self, executor: ExecutorType, shell: ShellType) -> Box<dyn CommandExecutor> {
        self.logger
            .debug(&format!("Creating {executor} executor (shell: {shell})"));
        match executor {
            ExecutorType::Plain => Box::new(PlainExecutor::new(shell, &self.root)),
            ExecutorType::Base64 => Box::new(Base64Executor::new(shell, &self.root)),
        }
    }
}
