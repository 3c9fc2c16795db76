//! # SHA-256 Fingerprints
//!
//! Computes [`Fingerprint`] values from [`DigitBytes`]. This is the only
//! path for producing a numeric fingerprint.
//!
//! ## Invariant
//!
//! `sha256_digest()` takes `&DigitBytes`, not `&[u8]`. Hashing the raw
//! input text instead of its digits is a compile error.
//!
//! Two texts with the same digits in the same order share a fingerprint:
//! `"tel: 555-0100"` and `"5550100"` are indistinguishable here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::digits::DigitBytes;
use crate::error::CryptoError;

/// SHA-256 of the empty byte sequence, the fingerprint of digit-free text.
pub const EMPTY_SHA256_HEX: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// A SHA-256 digest of a digit subsequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a fingerprint from a 64-character hex string.
    ///
    /// Surrounding whitespace is ignored and either case is accepted.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 64 {
            return Err(CryptoError::HexDecode(format!(
                "fingerprint hex must be 64 chars, got {}",
                hex.len()
            )));
        }
        let bytes = hex_to_bytes(&hex).map_err(CryptoError::HexDecode)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Compute the SHA-256 fingerprint of a digit subsequence.
pub fn sha256_digest(data: &DigitBytes) -> Fingerprint {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Fingerprint(bytes)
}

/// Fingerprint the digits of `input` as 64 lowercase hex characters.
///
/// Deterministic and total. Text without digits yields [`EMPTY_SHA256_HEX`].
pub fn fingerprint_of_digits(input: &str) -> String {
    sha256_digest(&DigitBytes::from_text(input)).to_hex()
}

/// Recompute the fingerprint of `input` and compare it with `expected_hex`.
///
/// Malformed hex never matches.
pub fn verify_fingerprint(input: &str, expected_hex: &str) -> bool {
    match Fingerprint::from_hex(expected_hex) {
        Ok(expected) => sha256_digest(&DigitBytes::from_text(input)) == expected,
        Err(_) => false,
    }
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    if !hex.is_ascii() {
        return Err("hex string must be ASCII".to_string());
    }
    if hex.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}
