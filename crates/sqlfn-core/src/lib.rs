//! # sqlfn-core — Foundational Types for Warehouse Text Functions
//!
//! This crate is the leaf of the `sqlfn` workspace. It defines the value
//! model and the pure text operations that the warehouse user-defined
//! functions are built from. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Total extraction.** `extract_digits()` and `extract_non_digits()`
//!    accept every string (and every `i64` for the latter) and never fail.
//!
//! 2. **One classification rule.** A "decimal digit" is ASCII `0`-`9`.
//!    Every operation in the workspace classifies characters through
//!    [`extract::is_decimal_digit()`].
//!
//! 3. **Explicit contract selection.** Non-digit extraction has two
//!    historical definitions. The strip contract is the default; the
//!    truncate-and-validate contract must be selected through
//!    [`ExtractContract`] and is the only failure path in this crate.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sqlfn-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod contract;
pub mod error;
pub mod extract;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use config::{ContractKind, FunctionConfig};
pub use contract::{extract_with_contract, ExtractContract, DEFAULT_TRUNCATE_WIDTH};
pub use error::{ConfigError, ExtractError};
pub use extract::{extract_digits, extract_non_digits, is_decimal_digit, NumericText};
pub use value::SqlValue;
