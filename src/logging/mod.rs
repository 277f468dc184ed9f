// Leveled, colored logging for terminal output
//
// The logger is constructed once from the CLI configuration and handed to each
// component explicitly; module-scoped loggers are thin wrappers that carry a
// name tag alongside a shared reference. There is no process-wide instance.

use std::io::{self, IsTerminal};
use std::process;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Local;

/// Logging severity levels, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// ANSI color code used for the level name in terminal output.
    fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "36", // Cyan
            LogLevel::Info => "32",  // Green
            LogLevel::Warn => "33",  // Yellow
            LogLevel::Error => "31", // Red
            LogLevel::Fatal => "35", // Magenta
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// Logger with a minimum level and terminal color detection.
///
/// Log lines go to stderr so that payload output on stdout (encoded and
/// decoded commands) stays clean for piping.
pub struct Logger {
    level: LogLevel,
    use_color: bool,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            use_color: detect_color_support(),
        }
    }

    /// Create a logger with an explicit color setting, bypassing detection.
    pub fn with_color(level: LogLevel, use_color: bool) -> Self {
        Self { level, use_color }
    }

    /// Check whether a message at the given level would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Write a log line with an optional module tag.
    ///
    /// Fatal messages terminate the process with exit code 1 after being
    /// written.
    pub fn log(&self, level: LogLevel, module: Option<&str>, message: &str) {
        if self.enabled(level) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            eprintln!(
                "{}",
                format_line(&timestamp, level, module, message, self.use_color)
            );
        }
        if level == LogLevel::Fatal {
            process::exit(1);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, None, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, None, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, None, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, None, message);
    }

    pub fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, None, message);
    }
}

/// Module-scoped logger: a shared logger reference plus a name tag.
#[derive(Clone)]
pub struct ModuleLogger {
    logger: Arc<Logger>,
    module: String,
}

impl ModuleLogger {
    pub fn new(logger: &Arc<Logger>, module: impl Into<String>) -> Self {
        Self {
            logger: Arc::clone(logger),
            module: module.into(),
        }
    }

    pub fn debug(&self, message: &str) {
        self.logger.log(LogLevel::Debug, Some(&self.module), message);
    }

    pub fn info(&self, message: &str) {
        self.logger.log(LogLevel::Info, Some(&self.module), message);
    }

    pub fn warn(&self, message: &str) {
        self.logger.log(LogLevel::Warn, Some(&self.module), message);
    }

    pub fn error(&self, message: &str) {
        self.logger.log(LogLevel::Error, Some(&self.module), message);
    }

    pub fn fatal(&self, message: &str) {
        self.logger.log(LogLevel::Fatal, Some(&self.module), message);
    }
}

/// Format a single log line.
fn format_line(
    timestamp: &str,
    level: LogLevel,
    module: Option<&str>,
    message: &str,
    use_color: bool,
) -> String {
    let level_name = if use_color {
        format!("\x1b[{}m{}\x1b[0m", level.color_code(), level.as_str())
    } else {
        level.as_str().to_string()
    };

    match module {
        Some(module) => format!("[{timestamp}] {level_name} [{module}] {message}"),
        None => format!("[{timestamp}] {level_name} {message}"),
    }
}

/// Detect if stderr supports color output.
fn detect_color_support() -> bool {
    if !io::stderr().is_terminal() {
        return false;
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("ERROR".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_enabled_respects_minimum_level() {
        let logger = Logger::with_color(LogLevel::Warn, false);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
        assert!(logger.enabled(LogLevel::Fatal));
    }

    #[test]
    fn test_format_line_without_color() {
        let line = format_line("2026-01-01 00:00:00", LogLevel::Info, None, "started", false);
        assert_eq!(line, "[2026-01-01 00:00:00] INFO started");
    }

    #[test]
    fn test_format_line_with_module_tag() {
        let line = format_line(
            "2026-01-01 00:00:00",
            LogLevel::Error,
            Some("executor.plain"),
            "spawn failed",
            false,
        );
        assert_eq!(
            line,
            "[2026-01-01 00:00:00] ERROR [executor.plain] spawn failed"
        );
    }

    #[test]
    fn test_format_line_with_color() {
        let line = format_line("2026-01-01 00:00:00", LogLevel::Warn, None, "careful", true);
        assert!(line.contains("\x1b[33mWARN\x1b[0m"));
        assert!(line.contains("careful"));
    }

    #[test]
    fn test_module_logger_is_cloneable() {
        let logger = Arc::new(Logger::with_color(LogLevel::Error, false));
        let module = ModuleLogger::new(&logger, "test");
        let clone = module.clone();
        assert!(!clone.logger.enabled(LogLevel::Info));
    }
}
