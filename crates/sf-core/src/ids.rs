//! Record identifiers.
//!
//! Tables in the hosted database key rows either by integer sequences or by
//! UUID text. [`RecordId`] accepts both and serializes back in the same form.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Interpret a URL path segment, preferring the integer form.
    #[must_use]
    pub fn from_path(raw: &str) -> Self {
        raw.parse::<i64>()
            .map_or_else(|_| Self::Text(raw.to_string()), Self::Int)
    }

    /// Compare against an id taken from a URL path segment.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Int(value) => raw.parse::<i64>().is_ok_and(|parsed| parsed == *value),
            Self::Text(value) => value == raw,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
