// Host platform classification and system information snapshot

use serde::Serialize;
use sysinfo::System;

/// Platform types for shell selection and default-command choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unix, // Generic Unix (BSDs and friends)
}

impl Platform {
    /// Detect the platform this binary was compiled for.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        return Platform::Windows;

        #[cfg(target_os = "macos")]
        return Platform::MacOS;

        #[cfg(target_os = "linux")]
        return Platform::Linux;

        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        return Platform::Unix;
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    pub fn is_linux(&self) -> bool {
        matches!(self, Platform::Linux)
    }

    /// Check if this is a Unix-like platform.
    pub fn is_unix(&self) -> bool {
        matches!(self, Platform::MacOS | Platform::Linux | Platform::Unix)
    }
}

/// Read-only snapshot of host facts, gathered at query time.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub hostname: Option<String>,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
    pub cpu_cores: usize,
}

impl SystemInfo {
    /// Query the host once. No caching; callers hold the snapshot.
    pub fn query() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            hostname: System::host_name(),
            os_version: System::long_os_version(),
            kernel_version: System::kernel_version(),
            cpu_cores: sys.cpus().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform_is_consistent() {
        let platform = Platform::current();

        #[cfg(target_os = "linux")]
        assert!(platform.is_linux() && platform.is_unix() && !platform.is_windows());

        #[cfg(target_os = "macos")]
        assert!(!platform.is_linux() && platform.is_unix() && !platform.is_windows());

        #[cfg(target_os = "windows")]
        assert!(platform.is_windows() && !platform.is_unix() && !platform.is_linux());
    }

    #[test]
    fn test_unix_classification() {
        assert!(Platform::Linux.is_unix());
        assert!(Platform::MacOS.is_unix());
        assert!(Platform::Unix.is_unix());
        assert!(!Platform::Windows.is_unix());
    }

    #[test]
    fn test_query_matches_compile_time_constants() {
        let info = SystemInfo::query();
        assert_eq!(info.os, std::env::consts::OS);
        assert_eq!(info.arch, std::env::consts::ARCH);
        assert!(info.cpu_cores > 0);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let info = SystemInfo::query();
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"os\""));
        assert!(json.contains("\"arch\""));
    }
}
