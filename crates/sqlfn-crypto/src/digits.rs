//! # Digit Bytes
//!
//! `DigitBytes` is the UTF-8 encoding of a digit subsequence. The inner
//! buffer is private and the only constructor is [`DigitBytes::from_text()`],
//! which applies [`sqlfn_core::extract_digits()`]. Every fingerprint in the
//! workspace is therefore computed over digits and nothing else.

use sqlfn_core::extract_digits;

/// UTF-8 bytes of the decimal digits of a text value.
///
/// # Invariants
///
/// - Every byte is in `b'0'..=b'9'`.
/// - Byte order matches the order of the digits in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitBytes(Vec<u8>);

impl DigitBytes {
    /// Extract the digits of `input` and encode them as UTF-8.
    pub fn from_text(input: &str) -> Self {
        Self(extract_digits(input).into_bytes())
    }

    /// Access the digit bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mixed_text() {
        let d = DigitBytes::from_text("abc123def456xyz");
        assert_eq!(d.as_bytes(), b"123456");
    }

    #[test]
    fn from_text_without_digits() {
        let d = DigitBytes::from_text("none");
        assert!(d.as_bytes().is_empty());
    }

    #[test]
    fn non_ascii_digits_excluded() {
        assert_eq!(DigitBytes::from_text("\u{0661}\u{0662}9").as_bytes(), b"9");
    }
}
