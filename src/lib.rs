pub mod cli;
pub mod executor;
pub mod logging;

pub use executor::{CommandExecutor, ExecutorError, ExecutorResult};
pub use logging::{LogLevel, Logger, ModuleLogger};
