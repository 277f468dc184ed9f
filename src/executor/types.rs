// Executor and shell type selectors

use std::fmt;
use std::str::FromStr;

use super::system_info::Platform;

/// Which execution strategy handles a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorType {
    /// Execute the command string as-is.
    Plain,
    /// Execute a base64 encoded command.
    Base64,
}

impl fmt::Display for ExecutorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutorType::Plain => "plain",
            ExecutorType::Base64 => "base64",
        };
        f.write_str(name)
    }
}

impl FromStr for ExecutorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(ExecutorType::Plain),
            "base64" => Ok(ExecutorType::Base64),
            _ => Err(format!("unknown executor type: {s}")),
        }
    }
}

/// Which command interpreter is invoked for a payload.
///
/// `Auto` is a deferred selector: it is resolved to a concrete shell from the
/// host platform at the point where a shell invocation is constructed, and is
/// never itself passed to the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Auto,
    Cmd,
    PowerShell,
    Sh,
}

impl ShellType {
    /// Resolve `Auto` to the concrete shell for the given platform.
    ///
    /// Concrete variants pass through unchanged; the result is never `Auto`.
    pub fn resolve(self, platform: Platform) -> ShellType {
        match self {
            ShellType::Auto => {
                if platform.is_windows() {
                    ShellType::Cmd
                } else {
                    ShellType::Sh
                }
            }
            concrete => concrete,
        }
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShellType::Auto => "auto",
            ShellType::Cmd => "cmd",
            ShellType::PowerShell => "powershell",
            ShellType::Sh => "sh",
        };
        f.write_str(name)
    }
}

impl FromStr for ShellType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ShellType::Auto),
            "cmd" => Ok(ShellType::Cmd),
            "powershell" | "ps" | "ps1" => Ok(ShellType::PowerShell),
            "sh" => Ok(ShellType::Sh),
            _ => Err(format!("unknown shell type: {s}")),
        }
    }
}
