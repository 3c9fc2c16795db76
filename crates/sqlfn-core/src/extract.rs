//! # Character-Class Extraction
//!
//! The two total extraction operations: keep the decimal digits of a value,
//! or keep everything except the decimal digits. Both are a single pass over
//! the input and preserve the relative order of the characters they keep.
//!
//! ## Classification
//!
//! Only ASCII `0`-`9` are decimal digits. Other Unicode digit characters
//! (Arabic-Indic, fullwidth, superscripts) are treated as non-digits, which
//! matches the `[0-9]` character class used by the warehouse queries these
//! functions replace.

use std::borrow::Cow;

/// Returns true if `c` is a decimal digit (`'0'..='9'`).
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// The input of non-digit extraction: either text or an integer.
///
/// Integers are rendered in canonical base 10 before extraction: no leading
/// zeros, and a leading `-` for negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericText<'a> {
    /// A string value, used as-is.
    Text(&'a str),
    /// An integer value, rendered with `i64::to_string`.
    Integer(i64),
}

impl<'a> NumericText<'a> {
    /// Render the value as the string that extraction operates on.
    pub fn render(&self) -> Cow<'a, str> {
        match *self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Integer(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl<'a> From<&'a str> for NumericText<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for NumericText<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

impl From<i64> for NumericText<'_> {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for NumericText<'_> {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

/// Keep only the decimal digits of `input`, in their original order.
///
/// Empty input, or input without digits, yields an empty string.
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(|&c| is_decimal_digit(c)).collect()
}

/// Keep only the non-digit characters of `input`, in their original order.
///
/// Integers are rendered first, so `extract_non_digits(-42)` is `"-"` and
/// `extract_non_digits(12345)` is empty. Never fails.
pub fn extract_non_digits<'a>(input: impl Into<NumericText<'a>>) -> String {
    input
        .into()
        .render()
        .chars()
        .filter(|&c| !is_decimal_digit(c))
        .collect()
}

/// Count the decimal digits of `input`.
pub(crate) fn count_digits(input: &str) -> usize {
    input.chars().filter(|&c| is_decimal_digit(c)).count()
}
