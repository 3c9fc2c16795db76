//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout `sqlfn`. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Extraction under the strip contract has no error type at all.
//! - The truncate contract reports how many digits were required and found.
//! - Configuration errors carry the underlying parse or I/O error.

use thiserror::Error;

/// Error from non-digit extraction under the truncate contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The rendered value has fewer digit characters than the prefix width.
    #[error("insufficient numeric digits: need at least {required}, found {found}")]
    InsufficientDigits {
        /// Prefix width the contract was configured with.
        required: usize,
        /// Digit characters present in the rendered input.
        found: usize,
    },
}

/// Error loading or validating a [`crate::FunctionConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// YAML parsing failed.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Reading the configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A truncate width of zero would accept every input.
    #[error("truncate width must be at least 1, got {0}")]
    InvalidWidth(usize),

    /// A contract name other than `strip_digits` or `truncate_prefix`.
    #[error("unknown contract kind {0:?}; expected strip_digits or truncate_prefix")]
    UnknownContract(String),
}
