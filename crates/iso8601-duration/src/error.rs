// Error types for duration parsing
//
// Every parse failure is classified into one of the variants below, and all
// of them compare by value so callers can branch on the kind.

use std::fmt;

use thiserror::Error;

/// A component of the duration grammar, used to report which designator
/// carried an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Field {
    /// Lowercase name as it appears in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Week => "week",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents an error produced while parsing an ISO 8601 duration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input does not match either grammar alternative, or carries
    /// trailing text after an otherwise valid prefix.
    #[error("invalid ISO 8601 duration")]
    InvalidFormat,

    /// A designator was present with an explicit value of zero.
    /// Presence implies a positive quantity; absence implies zero.
    #[error("{0} cannot be 0")]
    ZeroValue(Field),

    /// The month designator is part of the grammar but months have no
    /// fixed length, so they are not representable as a value.
    #[error("months are not supported")]
    UnsupportedMonth,
}
