// Shell invocation construction
//
// Maps a (shell, platform) pair plus a payload to the concrete external
// process to spawn, with a distinct mapping for base64 encoded payloads.

use std::process::Stdio;

use tokio::process::Command;

use super::error::{ExecutorError, ExecutorResult};
use super::system_info::Platform;
use super::types::ShellType;

/// A concrete external-process invocation: program name plus argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellInvocation {
    fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the process command with the host's standard streams attached
    /// directly. Output ordering is whatever the child produces.
    pub fn into_command(self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Spawn the process and block until it exits.
    ///
    /// Fails when the process cannot be started or exits non-zero. There is no
    /// timeout and no cancellation; the child owns the terminal until it is
    /// done.
    pub async fn run(self) -> ExecutorResult<()> {
        let program = self.program.clone();
        let status = self
            .into_command()
            .status()
            .await
            .map_err(|err| ExecutorError::execution(format!("failed to start {program}: {err}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecutorError::execution(format!(
                "{program} exited with {status}"
            )))
        }
    }
}

/// Build the invocation for a plaintext payload.
pub fn shell_invocation(payload: &str, shell: ShellType, platform: Platform) -> ShellInvocation {
    match shell.resolve(platform) {
        ShellType::Cmd => ShellInvocation::new("cmd", vec!["/C".into(), payload.into()]),
        ShellType::PowerShell => {
            ShellInvocation::new("powershell", vec!["-Command".into(), payload.into()])
        }
        // resolve() never yields Auto
        ShellType::Sh | ShellType::Auto => {
            ShellInvocation::new("sh", vec!["-c".into(), payload.into()])
        }
    }
}

/// Build the invocation for a base64 encoded payload.
///
/// PowerShell consumes the encoded text natively; sh decodes it through a
/// pipe. cmd cannot execute encoded payloads at all, so that arm passes the
/// payload through unchanged and callers are expected to have decoded first.
pub fn base64_invocation(payload: &str, shell: ShellType, platform: Platform) -> ShellInvocation {
    match shell.resolve(platform) {
        ShellType::Cmd => ShellInvocation::new("cmd", vec!["/C".into(), payload.into()]),
        ShellType::PowerShell => {
            ShellInvocation::new("powershell", vec!["-EncodedCommand".into(), payload.into()])
        }
        ShellType::Sh | ShellType::Auto => {
            // Standard base64 output never contains a single quote, so the
            // payload can sit inside a single-quoted literal verbatim.
            let pipeline = format!("echo '{payload}' | base64 -d | sh");
            ShellInvocation::new("sh", vec!["-c".into(), pipeline])
        }
    }
}
