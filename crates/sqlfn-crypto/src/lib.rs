//! # sqlfn-crypto — Numeric Fingerprints
//!
//! Fingerprints the numeric content of a text value: the decimal digits are
//! extracted, encoded as UTF-8 and hashed with SHA-256.
//!
//! - **`DigitBytes`** is the only input type `sha256_digest()` accepts. Its
//!   sole constructor runs digit extraction, so a fingerprint can never be
//!   computed over unfiltered bytes.
//! - **`Fingerprint`** carries the 32-byte digest and renders as 64
//!   lowercase hex characters.
//!
//! ## Crate Policy
//!
//! - Depends only on `sqlfn-core` internally.
//! - No mocking of SHA-256 in tests; golden vectors are pinned in
//!   `tests/golden_fingerprints.rs`.

pub mod digits;
pub mod error;
pub mod fingerprint;

pub use digits::DigitBytes;
pub use error::CryptoError;
pub use fingerprint::{
    fingerprint_of_digits, sha256_digest, verify_fingerprint, Fingerprint, EMPTY_SHA256_HEX,
};
