//! # Function Configuration
//!
//! `FunctionConfig` selects the non-digit extraction contract for a
//! function registry. It is loaded from YAML, every field has a default,
//! and an empty document yields the strip contract.
//!
//! ```yaml
//! non_digit_contract: truncate_prefix
//! truncate_width: 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::contract::{ExtractContract, DEFAULT_TRUNCATE_WIDTH};
use crate::error::ConfigError;

/// Which non-digit extraction contract to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    /// Strip every digit. Never fails.
    #[default]
    StripDigits,
    /// Keep a validated fixed-width prefix.
    TruncatePrefix,
}

impl ContractKind {
    /// Returns the configuration identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StripDigits => "strip_digits",
            Self::TruncatePrefix => "truncate_prefix",
        }
    }
}

impl std::fmt::Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strip_digits" => Ok(Self::StripDigits),
            "truncate_prefix" => Ok(Self::TruncatePrefix),
            other => Err(ConfigError::UnknownContract(other.to_string())),
        }
    }
}

/// Configuration for the warehouse text functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionConfig {
    /// Contract used by non-digit extraction.
    #[serde(default)]
    pub non_digit_contract: ContractKind,
    /// Prefix width for [`ContractKind::TruncatePrefix`]. Ignored otherwise.
    #[serde(default = "default_truncate_width")]
    pub truncate_width: usize,
}

fn default_truncate_width() -> usize {
    DEFAULT_TRUNCATE_WIDTH
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            non_digit_contract: ContractKind::default(),
            truncate_width: default_truncate_width(),
        }
    }
}

impl FunctionConfig {
    /// Parse and validate a configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed YAML, unknown fields or
    /// unknown contract names, and [`ConfigError::InvalidWidth`] for a zero
    /// truncate width. An empty document is not an error; it yields the
    /// defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, and otherwise
    /// the same errors as [`FunctionConfig::from_yaml_str()`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.truncate_width == 0 {
            return Err(ConfigError::InvalidWidth(self.truncate_width));
        }
        Ok(())
    }

    /// Resolve the configured contract.
    pub fn contract(&self) -> ExtractContract {
        match self.non_digit_contract {
            ContractKind::StripDigits => ExtractContract::StripDigits,
            ContractKind::TruncatePrefix => ExtractContract::TruncatePrefix {
                width: self.truncate_width,
            },
        }
    }
}
