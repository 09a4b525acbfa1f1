//! Validation of the `limit` query parameter.
//!
//! # Design
//! `parse_limit` is a pure function from the raw query-string value to a
//! [`Limit`], run before the store is touched. A value of `0` means "no
//! limit", the same meaning MongoDB gives `find().limit(0)`, so callers have
//! no way to ask for zero records.

use std::num::NonZeroU32;

use thiserror::Error;

/// Name of the query parameter this module validates.
pub const LIMIT_PARAM: &str = "limit";

/// Upper bound on the number of records a query may return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// Return every record. Produced by an absent parameter or `limit=0`.
    Unbounded,
    AtMost(NonZeroU32),
}

impl Limit {
    /// The integer a driver-level `limit()` call expects; `0` is unbounded.
    pub fn as_store_limit(self) -> i64 {
        match self {
            Limit::Unbounded => 0,
            Limit::AtMost(n) => i64::from(n.get()),
        }
    }

    /// Maximum number of items to take from an in-memory sequence.
    pub fn max_items(self) -> usize {
        match self {
            Limit::Unbounded => usize::MAX,
            Limit::AtMost(n) => usize::try_from(n.get()).unwrap_or(usize::MAX),
        }
    }
}

/// Rejected query input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The query string itself could not be decoded.
    #[error("malformed query string: {0}")]
    MalformedQuery(String),

    #[error("limit must be a non-negative integer")]
    NotAnInteger { value: String },

    #[error("limit must be a non-negative integer")]
    Negative { value: i32 },
}

impl ValidationError {
    pub fn parameter(&self) -> &'static str {
        LIMIT_PARAM
    }
}

/// Parse the raw `limit` value. `None` means the parameter was absent.
///
/// The value must fit in an `i32`; anything else is reported as not an
/// integer.
pub fn parse_limit(raw: Option<&str>) -> Result<Limit, ValidationError> {
    let Some(raw) = raw else {
        return Ok(Limit::Unbounded);
    };

    let value: i32 = raw.parse().map_err(|_| ValidationError::NotAnInteger {
        value: raw.to_string(),
    })?;
    let count = u32::try_from(value).map_err(|_| ValidationError::Negative { value })?;

    Ok(NonZeroU32::new(count).map_or(Limit::Unbounded, Limit::AtMost))
}
