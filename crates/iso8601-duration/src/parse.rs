// Duration grammar
//
// This module parses the textual ISO 8601 notation into the structured
// Duration value. The grammar has two top-level alternatives: the calendar
// form P(nY)(nM)(nD)(T(nH)(nM)(nS)) and the week form PnW. Both are
// anchored at both ends, so trailing text is a hard failure.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::duration::Duration;
use crate::error::{Error, Field};

static CALENDAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^P(?:(?P<year>\d+)Y)?(?:(?P<month>\d+)M)?(?:(?P<day>\d+)D)?(?:T(?:(?P<hour>\d+)H)?(?:(?P<minute>\d+)M)?(?:(?P<second>\d+)S)?)?$",
    )
    .expect("calendar duration pattern compiles")
});

static WEEK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^P(?P<week>\d+)W$").expect("week duration pattern compiles"));

// Calendar capture groups in designator order; the first offending group
// decides which error is reported.
const CALENDAR_GROUPS: [(&str, Field); 6] = [
    ("year", Field::Year),
    ("month", Field::Month),
    ("day", Field::Day),
    ("hour", Field::Hour),
    ("minute", Field::Minute),
    ("second", Field::Second),
];

impl Duration {
    /// Parse the textual ISO 8601 form into a structured `Duration`.
    ///
    /// A designator that is present must carry a positive value; absence
    /// means zero. A month designator is recognized but rejected with
    /// [`Error::UnsupportedMonth`], and anything that matches neither
    /// grammar alternative is [`Error::InvalidFormat`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        if let Some(caps) = WEEK_RE.captures(input) {
            let weeks = group_value(&caps["week"], Field::Week)?;
            return Ok(Duration {
                weeks,
                ..Duration::default()
            });
        }

        let caps = CALENDAR_RE.captures(input).ok_or(Error::InvalidFormat)?;

        let mut duration = Duration::default();
        for (name, field) in CALENDAR_GROUPS {
            if let Some(group) = caps.name(name) {
                let value = group_value(group.as_str(), field)?;
                match field {
                    Field::Year => duration.years = value,
                    Field::Month => return Err(Error::UnsupportedMonth),
                    Field::Day => duration.days = value,
                    Field::Hour => duration.hours = value,
                    Field::Minute => duration.minutes = value,
                    Field::Second => duration.seconds = value,
                    // the calendar grammar has no week group
                    Field::Week => {}
                }
            }
        }

        Ok(duration)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Duration::parse(s)
    }
}

/// Convert a participating capture group to a positive integer. A digit run
/// that does not fit in u64 is a format error; an explicit zero reports the
/// offending field.
fn group_value(digits: &str, field: Field) -> Result<u64, Error> {
    let value = digits.parse::<u64>().map_err(|_| Error::InvalidFormat)?;
    if value == 0 {
        return Err(Error::ZeroValue(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bad_format() {
        assert_eq!(Duration::parse("asdf"), Err(Error::InvalidFormat));
        assert_eq!(Duration::parse(""), Err(Error::InvalidFormat));
        assert_eq!(Duration::parse("P1x"), Err(Error::InvalidFormat));
        assert_eq!(Duration::parse("P1"), Err(Error::InvalidFormat));
        assert_eq!(Duration::parse("1Y"), Err(Error::InvalidFormat));
    }

    #[test]
    fn test_parse_rejects_trailing_text() {
        assert_eq!(Duration::parse("P1YT23Hhello"), Err(Error::InvalidFormat));
        assert_eq!(Duration::parse("P1W2D"), Err(Error::InvalidFormat));
    }

    #[test]
    fn test_parse_rejects_zero_fields() {
        assert_eq!(Duration::parse("P0Y"), Err(Error::ZeroValue(Field::Year)));
        assert_eq!(Duration::parse("P0W"), Err(Error::ZeroValue(Field::Week)));
        assert_eq!(Duration::parse("PT0H"), Err(Error::ZeroValue(Field::Hour)));
        assert_eq!(Duration::parse("PT0S"), Err(Error::ZeroValue(Field::Second)));
    }

    #[test]
    fn test_parse_reports_first_zero_field_only() {
        // The year component is fine; the zero hour is the failure.
        assert_eq!(Duration::parse("P1YT0H"), Err(Error::ZeroValue(Field::Hour)));
        // Zero year is hit before the zero day is inspected.
        assert_eq!(Duration::parse("P0Y0D"), Err(Error::ZeroValue(Field::Year)));
    }

    #[test]
    fn test_parse_rejects_months() {
        assert_eq!(Duration::parse("P1M"), Err(Error::UnsupportedMonth));
        assert_eq!(Duration::parse("P1Y2M"), Err(Error::UnsupportedMonth));
        // A zero month is a zero-field failure, not the month rejection.
        assert_eq!(Duration::parse("P0M"), Err(Error::ZeroValue(Field::Month)));
    }

    #[test]
    fn test_parse_month_and_minute_are_distinct() {
        // M before T is the month designator, after T it is minutes.
        assert_eq!(Duration::parse("P1M"), Err(Error::UnsupportedMonth));
        let duration = Duration::parse("PT1M").unwrap();
        assert_eq!(duration.minutes, 1);
        assert_eq!(duration.seconds, 0);
    }

    #[test]
    fn test_parse_full_string() {
        let duration = Duration::parse("P1Y2DT3H4M5S").unwrap();
        assert_eq!(duration.years, 1);
        assert_eq!(duration.days, 2);
        assert_eq!(duration.hours, 3);
        assert_eq!(duration.minutes, 4);
        assert_eq!(duration.seconds, 5);
        assert_eq!(duration.weeks, 0);
    }

    #[test]
    fn test_parse_weeks() {
        let duration = Duration::parse("P1W").unwrap();
        assert_eq!(
            duration,
            Duration {
                weeks: 1,
                ..Duration::default()
            }
        );
    }

    #[test]
    fn test_parse_partial_components() {
        let duration = Duration::parse("P3D").unwrap();
        assert_eq!(
            duration,
            Duration {
                days: 3,
                ..Duration::default()
            }
        );

        let duration = Duration::parse("PT45S").unwrap();
        assert_eq!(
            duration,
            Duration {
                seconds: 45,
                ..Duration::default()
            }
        );
    }

    #[test]
    fn test_parse_multi_digit_values() {
        let duration = Duration::parse("P10Y100DT23H59M59S").unwrap();
        assert_eq!(duration.years, 10);
        assert_eq!(duration.days, 100);
        assert_eq!(duration.hours, 23);
        assert_eq!(duration.minutes, 59);
        assert_eq!(duration.seconds, 59);
    }

    #[test]
    fn test_parse_bare_period() {
        assert_eq!(Duration::parse("P"), Ok(Duration::default()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Duration::parse("p1y"), Err(Error::InvalidFormat));
        assert_eq!(Duration::parse("P1y"), Err(Error::InvalidFormat));
    }

    #[test]
    fn test_parse_overflowing_value() {
        assert_eq!(
            Duration::parse("P99999999999999999999999Y"),
            Err(Error::InvalidFormat)
        );
    }

    #[test]
    fn test_from_str() {
        let duration: Duration = "PT1H30M".parse().unwrap();
        assert_eq!(duration.hours, 1);
        assert_eq!(duration.minutes, 30);

        assert_eq!("nope".parse::<Duration>(), Err(Error::InvalidFormat));
    }
}
