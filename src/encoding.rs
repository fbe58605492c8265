//! Encoding detection for lyric files
//!
//! Sidecar `.lrc` files that shipped with 2000s-era Chinese and Japanese
//! releases are frequently GBK or Shift-JIS rather than UTF-8. Decoding
//! must never fail: the worst case is a lossy conversion.

use encoding_rs::{BIG5, GBK, SHIFT_JIS};

/// Decode lyric file bytes, falling back to common legacy encodings
///
/// Priority: UTF-8, then GBK, Big5, Shift-JIS; lossy UTF-8 as last resort.
pub fn decode_lyrics(bytes: &[u8]) -> String {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    for encoding in [GBK, BIG5, SHIFT_JIS] {
        let (decoded, _, had_errors) = encoding.decode(bytes);
        if !had_errors && is_likely_valid_text(&decoded) {
            return decoded.into_owned();
        }
    }

    String::from_utf8_lossy(bytes).to_string()
}

/// Heuristic check that a decoded candidate is not mojibake
fn is_likely_valid_text(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }

    let suspicious_count = s
        .chars()
        .filter(|c| {
            (*c < ' ' && *c != '\t' && *c != '\n' && *c != '\r')
                || (*c >= '\u{E000}' && *c <= '\u{F8FF}')
                || *c == '\u{FFFD}'
        })
        .count();

    // Allow up to 5% suspicious characters
    let threshold = (s.len() / 20).max(1);
    suspicious_count <= threshold
}
