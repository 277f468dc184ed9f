// Base64 command codec
//
// Encoding is shell-aware: PowerShell's -EncodedCommand channel expects the
// UTF-16LE bytes of the command, every other shell gets the UTF-8 bytes.
// Decoding is always UTF-8; the asymmetry is intentional, so a command encoded
// for PowerShell only decodes back to the original text for ASCII input.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::error::{ExecutorError, ExecutorResult};
use super::types::ShellType;

/// Encode a command to standard base64 using the byte encoding the destination
/// shell expects.
pub fn encode(command: &str, shell: ShellType) -> String {
    if shell == ShellType::PowerShell {
        STANDARD.encode(utf16le_bytes(command))
    } else {
        STANDARD.encode(command.as_bytes())
    }
}

/// Decode standard base64 to text, reading the payload bytes as UTF-8.
///
/// Fails only on malformed base64. Bytes that are not valid UTF-8 are replaced
/// rather than rejected.
pub fn decode(encoded: &str) -> ExecutorResult<String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|err| ExecutorError::decode(format!("invalid base64 input: {err}")))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// UTF-16 little-endian byte sequence of a command: two bytes per code unit,
/// low byte first.
fn utf16le_bytes(command: &str) -> Vec<u8> {
    command.encode_utf16().flat_map(u16::to_le_bytes).collect()
}
