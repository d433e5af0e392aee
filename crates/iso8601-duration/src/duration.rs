// Duration implementation
//
// This module provides the structured representation of an ISO 8601
// duration, its canonical text form, and the conversion to a fixed-length
// std::time::Duration.

use std::fmt;
use std::time;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = SECS_PER_MINUTE * 60;
const SECS_PER_DAY: u64 = SECS_PER_HOUR * 24;
const SECS_PER_WEEK: u64 = SECS_PER_DAY * 7;
const SECS_PER_YEAR: u64 = SECS_PER_DAY * 365;

/// A structured ISO 8601 duration.
///
/// A value is either weeks-form (only `weeks` nonzero) or calendar-form
/// (`weeks` zero, any of the other fields set). The grammar never produces
/// a mix of the two; the struct itself does not enforce the invariant, and
/// formatting a value that violates it lets the weeks-form win.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    /// Number of years, counted as 365 days each
    pub years: u64,

    /// Number of weeks, mutually exclusive with the calendar fields
    pub weeks: u64,

    /// Number of days
    pub days: u64,

    /// Number of hours
    pub hours: u64,

    /// Number of minutes
    pub minutes: u64,

    /// Number of seconds
    pub seconds: u64,
}

impl Duration {
    /// Check whether every field is zero
    pub fn is_zero(&self) -> bool {
        *self == Duration::default()
    }

    /// Convert to a fixed-length `std::time::Duration`.
    ///
    /// Unit lengths are approximations: a year is always 365 days and a day
    /// is always 24 hours. Weeks-form and calendar-form are mutually
    /// exclusive, so summing all fields is safe.
    pub fn to_std(&self) -> time::Duration {
        let secs = self.years * SECS_PER_YEAR
            + self.weeks * SECS_PER_WEEK
            + self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds;
        time::Duration::from_secs(secs)
    }
}

impl fmt::Display for Duration {
    /// Canonical text form: fixed designator order, zero fields omitted,
    /// `T` emitted only when a sub-day component is present. The all-zero
    /// value formats as `"P"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P")?;

        if self.weeks != 0 {
            return write!(f, "{}W", self.weeks);
        }

        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }

        if self.hours != 0 || self.minutes != 0 || self.seconds != 0 {
            write!(f, "T")?;
            if self.hours != 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }

        Ok(())
    }
}

impl From<Duration> for time::Duration {
    fn from(duration: Duration) -> Self {
        duration.to_std()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
