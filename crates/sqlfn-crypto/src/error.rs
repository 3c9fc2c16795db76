//! # Cryptographic Error Types

use thiserror::Error;

/// Errors from fingerprint parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// A fingerprint hex string was malformed.
    #[error("hex decode error: {0}")]
    HexDecode(String),
}
