// file: src/utils/code.rs
// version: 1.1.0
// guid: f7d82c05-1e94-4ba6-8d31-0a5c4e7b92d6

//! Connection code encoding
//!
//! A connection code is `GSP-` followed by the URL-safe base64 of the host's
//! IP address text, padding stripped. This is obfuscation so users are not
//! asked to paste raw IPs around; it is trivially reversible and provides no
//! confidentiality whatsoever.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;

/// Prefix tag on every connection code
pub const CODE_PREFIX: &str = "GSP-";

/// Encode an IP address string into a shareable connection code.
pub fn encode_connection_code(ip: &str) -> String {
    format!("{}{}", CODE_PREFIX, URL_SAFE_NO_PAD.encode(ip.as_bytes()))
}

/// Decode a connection code back to the IP address it carries.
///
/// Returns `None` for anything that does not decode cleanly (bad base64,
/// non-UTF-8 payload, empty input). Callers should fall back to treating the
/// raw input as an IP or hostname literal.
pub fn decode_connection_code(code: &str) -> Option<String> {
    let code = code.trim();
    let code = code.strip_prefix(CODE_PREFIX).unwrap_or(code);
    if code.is_empty() {
        return None;
    }

    // Restore the padding stripped at encode time
    let mut padded = code.to_string();
    let rem = padded.len() % 4;
    if rem > 0 {
        padded.extend(std::iter::repeat('=').take(4 - rem));
    }

    let bytes = URL_SAFE.decode(padded.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}
