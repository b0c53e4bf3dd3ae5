//! Cache-key derivation.
//!
//! Comments arrive with arbitrary surrounding whitespace (the extension scrapes
//! rendered DOM text), so keys are computed over a normalized form: visually
//! identical comments share one cache entry.

/// Collapses runs of whitespace to single spaces and trims the ends.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Computes the 32-byte BLAKE3 cache key for an already-normalized text.
#[inline]
pub fn hash_text(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}

/// Normalizes and hashes in one step.
#[inline]
pub fn key_for(text: &str) -> [u8; 32] {
    hash_text(&normalize_text(text))
}
