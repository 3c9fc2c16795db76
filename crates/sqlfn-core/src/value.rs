//! # SQL Values
//!
//! The argument and result type of the scalar function surface. Host
//! engines marshal their column values into `SqlValue` before a call and
//! back out afterwards. Serializes untagged, so JSON `null`, integers and
//! strings map directly.

use serde::{Deserialize, Serialize};

use crate::extract::NumericText;

/// A SQL scalar value as seen by the warehouse text functions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// SQL `NULL`.
    Null,
    /// A signed 64-bit integer (`BIGINT`).
    Integer(i64),
    /// A character string (`VARCHAR`, `TEXT`).
    Text(String),
}

impl SqlValue {
    /// Returns true for SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the value as extraction input. `None` for `NULL`.
    pub fn as_numeric_text(&self) -> Option<NumericText<'_>> {
        match self {
            Self::Null => None,
            Self::Integer(n) => Some(NumericText::Integer(*n)),
            Self::Text(s) => Some(NumericText::Text(s)),
        }
    }

    /// SQL type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "BIGINT",
            Self::Text(_) => "VARCHAR",
        }
    }
}

impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
