//! # sqlfn-udf — Scalar Function Dispatch
//!
//! The call surface a host database binds to when it registers the
//! warehouse text functions as user-defined scalar functions. A
//! [`FunctionRegistry`] is built once from a [`sqlfn_core::FunctionConfig`]
//! and then resolves calls by SQL name:
//!
//! | SQL name | Alias | Operation |
//! |----------|-------|-----------|
//! | `EXTRACT_DIGITS` | `GET_NUMERIC` | keep decimal digits |
//! | `EXTRACT_STRINGS` | `GET_STRINGS` | non-digit extraction under the configured contract |
//! | `DIGITS_SHA256` | `FINGERPRINT_DIGITS` | SHA-256 hex of the decimal digits |
//!
//! Every function takes one argument and returns `NULL` for a `NULL`
//! argument. Integers are rendered in base 10 before any text operation.
//!
//! The registry holds no mutable state and is `Send + Sync`.

pub mod error;
pub mod registry;

pub use error::UdfError;
pub use registry::{FunctionRegistry, ScalarFunction};
