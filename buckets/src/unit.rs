//! Units of time accepted when constructing bucket functions.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// A unit of time, from nanoseconds up to days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Number of nanoseconds in one unit.
    pub const fn nanos(self) -> i64 {
        match self {
            Self::Nanoseconds => 1,
            Self::Microseconds => NANOS_PER_MICRO,
            Self::Milliseconds => NANOS_PER_MILLI,
            Self::Seconds => NANOS_PER_SECOND,
            Self::Minutes => NANOS_PER_MINUTE,
            Self::Hours => NANOS_PER_HOUR,
            Self::Days => NANOS_PER_DAY,
        }
    }

    /// Convert `value` (expressed in this unit) to nanoseconds.
    ///
    /// Saturates at `i64::MIN` and `i64::MAX` instead of overflowing.
    pub const fn to_nanos(self, value: i64) -> i64 {
        value.saturating_mul(self.nanos())
    }

    /// Convert `nanos` to this unit, truncating toward zero.
    pub const fn from_nanos(self, nanos: i64) -> i64 {
        nanos / self.nanos()
    }

    /// Short suffix appended to rendered labels.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Hours => "h",
            Self::Days => "d",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s {
            "ns" | "nanos" | "nanoseconds" => Self::Nanoseconds,
            "us" | "micros" | "microseconds" => Self::Microseconds,
            "ms" | "millis" | "milliseconds" => Self::Milliseconds,
            "s" | "seconds" => Self::Seconds,
            "min" | "minutes" => Self::Minutes,
            "h" | "hours" => Self::Hours,
            "d" | "days" => Self::Days,
            _ => return Err(Error::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeUnit> for String {
    fn from(unit: TimeUnit) -> Self {
        unit.suffix().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_to_nanos() {
        assert_eq!(TimeUnit::Nanoseconds.to_nanos(7), 7);
        assert_eq!(TimeUnit::Microseconds.to_nanos(7), 7_000);
        assert_eq!(TimeUnit::Milliseconds.to_nanos(-1), -1_000_000);
        assert_eq!(TimeUnit::Seconds.to_nanos(60), 60_000_000_000);
        assert_eq!(TimeUnit::Minutes.to_nanos(8), 480_000_000_000);
        assert_eq!(TimeUnit::Hours.to_nanos(1), 3_600_000_000_000);
        assert_eq!(TimeUnit::Days.to_nanos(1), 86_400_000_000_000);
    }

    #[test]
    fn test_to_nanos_saturates() {
        assert_eq!(TimeUnit::Days.to_nanos(i64::MAX), i64::MAX);
        assert_eq!(TimeUnit::Seconds.to_nanos(i64::MIN), i64::MIN);
        assert_eq!(TimeUnit::Nanoseconds.to_nanos(i64::MAX), i64::MAX);
    }

    #[test]
    fn test_from_nanos_truncates() {
        assert_eq!(TimeUnit::Seconds.from_nanos(7_999_999_999), 7);
        assert_eq!(TimeUnit::Milliseconds.from_nanos(999_999), 0);
        assert_eq!(TimeUnit::Days.from_nanos(i64::MAX), 106_751);
    }

    #[test_case("ns", TimeUnit::Nanoseconds; "nanoseconds suffix")]
    #[test_case("micros", TimeUnit::Microseconds; "microseconds short name")]
    #[test_case("ms", TimeUnit::Milliseconds; "milliseconds suffix")]
    #[test_case("seconds", TimeUnit::Seconds; "seconds long name")]
    #[test_case("min", TimeUnit::Minutes; "minutes suffix")]
    #[test_case("hours", TimeUnit::Hours; "hours long name")]
    #[test_case("d", TimeUnit::Days; "days suffix")]
    fn test_parse(input: &str, expected: TimeUnit) {
        assert_eq!(input.parse::<TimeUnit>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "fortnights".parse::<TimeUnit>(),
            Err(Error::UnknownUnit("fortnights".into()))
        );
        assert!("MS".parse::<TimeUnit>().is_err());
        assert!("".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for unit in [
            TimeUnit::Nanoseconds,
            TimeUnit::Microseconds,
            TimeUnit::Milliseconds,
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::Days,
        ] {
            assert_eq!(unit.to_string().parse::<TimeUnit>().unwrap(), unit);
        }
    }
}
