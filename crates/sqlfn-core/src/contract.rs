//! # Non-Digit Extraction Contracts
//!
//! The warehouse function that extracts "strings from a number" exists in two
//! incompatible definitions. This module names both so that callers choose
//! one explicitly:
//!
//! | Contract | Result | Failure |
//! |----------|--------|---------|
//! | `StripDigits` | every non-digit character, in order | never |
//! | `TruncatePrefix { width }` | first `width` characters of the rendered value, unchanged | fewer than `width` digit characters |
//!
//! `StripDigits` is the default everywhere in the workspace.

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::extract::{count_digits, extract_non_digits, NumericText};

/// Prefix width used by the truncate contract unless configured otherwise.
pub const DEFAULT_TRUNCATE_WIDTH: usize = 3;

/// Selected behavior of non-digit extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractContract {
    /// Remove every decimal digit. Total.
    #[default]
    StripDigits,
    /// Validate that the rendered value holds at least `width` digits, then
    /// return its first `width` characters without stripping anything.
    TruncatePrefix {
        /// Number of leading characters to keep.
        width: usize,
    },
}

impl ExtractContract {
    /// The truncate contract with the historical width of three.
    pub fn truncate_default() -> Self {
        Self::TruncatePrefix {
            width: DEFAULT_TRUNCATE_WIDTH,
        }
    }

    /// Returns true if this contract can reject an input.
    pub fn is_fallible(&self) -> bool {
        matches!(self, Self::TruncatePrefix { .. })
    }
}

/// Apply `contract` to `input`.
///
/// # Errors
///
/// Returns [`ExtractError::InsufficientDigits`] only under
/// [`ExtractContract::TruncatePrefix`], when the rendered input contains
/// fewer digit characters than the prefix width.
pub fn extract_with_contract<'a>(
    input: impl Into<NumericText<'a>>,
    contract: ExtractContract,
) -> Result<String, ExtractError> {
    let input = input.into();
    match contract {
        ExtractContract::StripDigits => Ok(extract_non_digits(input)),
        ExtractContract::TruncatePrefix { width } => {
            let rendered = input.render();
            let found = count_digits(&rendered);
            if found < width {
                return Err(ExtractError::InsufficientDigits {
                    required: width,
                    found,
                });
            }
            Ok(rendered.chars().take(width).collect())
        }
    }
}
