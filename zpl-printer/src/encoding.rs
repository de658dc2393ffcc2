//! ZPL hex-escape utilities for QR field data
//!
//! ZPL field data cannot contain raw line breaks or the `^` control
//! character. The `^FH` directive switches the following `^FD` into
//! hex-escape mode, where `_XX` tokens decode to byte values. This module
//! produces field data for that mode:
//! - Calculating whether a payload needs escaping at all
//! - Rewriting payloads character by character into `_XX` tokens

/// Check whether a QR payload needs `^FH` hex-escape mode
///
/// True when the payload contains a line break or one of the two characters
/// that collide with ZPL syntax (`_` escape introducer, `^` command prefix).
pub fn needs_hex_escape(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, '\n' | '\r' | '_' | '^'))
}

/// Escape a QR payload for `^FH_` hex mode
///
/// Line feeds become `_0D_0A` (CR+LF reads most reliably across QR
/// scanners), bare carriage returns are dropped as already covered by an
/// accompanying line feed, and the two ZPL metacharacters become their hex
/// tokens. Everything else passes through unchanged.
pub fn hex_escape(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => encoded.push_str("_0D_0A"),
            '\r' => {}
            '_' => encoded.push_str("_5F"),
            '^' => encoded.push_str("_5E"),
            other => encoded.push(other),
        }
    }
    encoded
}
