// Executor/shell compatibility rules

use super::error::{ExecutorError, ExecutorResult};
use super::system_info::Platform;
use super::types::{ExecutorType, ShellType};

/// Reject executor/shell combinations known not to work, before anything is
/// spawned.
///
/// The only forbidden pair is the base64 executor with the cmd shell: cmd has
/// no channel for consuming an encoded payload. `Auto` is accepted here and
/// resolved later; `preferred_shell` keeps it from ever reaching cmd on
/// Windows.
pub fn validate(executor: ExecutorType, shell: ShellType) -> ExecutorResult<()> {
    if executor == ExecutorType::Base64 && shell == ShellType::Cmd {
        return Err(ExecutorError::compatibility(
            "base64 executor is not compatible with the cmd shell; use powershell or sh instead",
        ));
    }
    Ok(())
}

/// Platform-aware shell override, applied once at startup before the factory
/// builds an executor: base64 execution under automatic shell selection on
/// Windows prefers PowerShell, which consumes encoded payloads natively.
pub fn preferred_shell(executor: ExecutorType, shell: ShellType, platform: Platform) -> ShellType {
    if executor == ExecutorType::Base64 && shell == ShellType::Auto && platform.is_windows() {
        return ShellType::PowerShell;
    }
    shell
}
