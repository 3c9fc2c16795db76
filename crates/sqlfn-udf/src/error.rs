//! # Dispatch Errors

use sqlfn_core::ExtractError;
use thiserror::Error;

/// Errors raised while resolving or evaluating a scalar function call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UdfError {
    /// No function is registered under this name.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// The call supplied the wrong number of arguments.
    #[error("{function} expects {expected} argument(s), got {got}")]
    ArgumentCount {
        /// Canonical name of the called function.
        function: &'static str,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        got: usize,
    },

    /// Non-digit extraction rejected its argument.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
