//! Native implementation of the `datespan` options.
//!
//! The options in this module select the unit a difference is counted in, how
//! out of range calendar fields are handled, and how a wall-clock time is
//! resolved against a time zone.

use crate::{DateTimeError, DateTimeResult, NS_PER_DAY};
use core::{fmt, str::FromStr};

// ==== Options enums and methods ====

/// The unit a difference or conversion is expressed in.
///
/// Units are ordered from smallest to largest, so `Unit::Day < Unit::Week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// The `Nanosecond` unit
    Nanosecond = 0,
    /// The `Microsecond` unit
    Microsecond,
    /// The `Millisecond` unit
    Millisecond,
    /// The `Second` unit
    Second,
    /// The `Minute` unit
    Minute,
    /// The `Hour` unit
    Hour,
    /// The `Day` unit
    Day,
    /// The `Week` unit
    Week,
    /// The `Month` unit
    Month,
    /// The `Year` unit
    Year,
}

impl Unit {
    /// Returns the fixed length of this unit in nanoseconds.
    ///
    /// A day is treated as exactly 24 hours and a week as 7 such days. Months
    /// and years have no fixed length and return `None`.
    #[must_use]
    pub const fn as_nanoseconds(&self) -> Option<u64> {
        use Unit::{
            Day, Hour, Microsecond, Millisecond, Minute, Month, Nanosecond, Second, Week, Year,
        };
        match self {
            Year | Month => None,
            Week => Some(NS_PER_DAY * 7),
            Day => Some(NS_PER_DAY),
            Hour => Some(3_600_000_000_000),
            Minute => Some(60_000_000_000),
            Second => Some(1_000_000_000),
            Millisecond => Some(1_000_000),
            Microsecond => Some(1_000),
            Nanosecond => Some(1),
        }
    }

    /// Returns whether the unit is counted on the calendar rather than
    /// measured on the timeline.
    #[inline]
    #[must_use]
    pub const fn is_calendar_unit(&self) -> bool {
        matches!(self, Self::Year | Self::Month | Self::Week)
    }

    /// Returns whether the unit is a day or larger.
    #[inline]
    #[must_use]
    pub const fn is_date_unit(&self) -> bool {
        matches!(self, Self::Year | Self::Month | Self::Week | Self::Day)
    }

    #[inline]
    #[must_use]
    pub const fn is_time_unit(&self) -> bool {
        !self.is_date_unit()
    }

    /// Converts `amount` of `source` units into this unit, truncating toward zero.
    ///
    /// ```rust
    /// use datespan::options::Unit;
    ///
    /// let six_days_of_millis = 6 * 86_400_000;
    /// assert_eq!(Unit::Day.convert(six_days_of_millis, Unit::Millisecond).unwrap(), 6);
    /// assert_eq!(Unit::Hour.convert(-90, Unit::Minute).unwrap(), -1);
    /// ```
    pub fn convert(self, amount: i64, source: Unit) -> DateTimeResult<i64> {
        let (Some(target_ns), Some(source_ns)) = (self.as_nanoseconds(), source.as_nanoseconds())
        else {
            return Err(DateTimeError::range()
                .with_message("Months and years do not have a fixed length to convert."));
        };
        let nanoseconds = i128::from(amount) * i128::from(source_ns);
        i64::try_from(nanoseconds / i128::from(target_ns))
            .map_err(|_| DateTimeError::range().with_message("Converted amount exceeds an i64."))
    }
}

/// A parsing error for `Unit`
#[derive(Debug, Clone, Copy)]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid Unit")
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(Self::Year),
            "month" | "months" => Ok(Self::Month),
            "week" | "weeks" => Ok(Self::Week),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            "microsecond" | "microseconds" => Ok(Self::Microsecond),
            "nanosecond" | "nanoseconds" => Ok(Self::Nanosecond),
            _ => Err(ParseUnitError),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
            Self::Microsecond => "microsecond",
            Self::Nanosecond => "nanosecond",
        }
        .fmt(f)
    }
}

/// `Overflow` decides what happens to a calendar field that is out of
/// range, and consists of the "constrain" and "reject" options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Clamp the field into range.
    #[default]
    Constrain,
    /// Return a range error.
    Reject,
}

/// A parsing error for `Overflow`
#[derive(Debug, Clone, Copy)]
pub struct ParseOverflowError;

impl fmt::Display for ParseOverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

impl FromStr for Overflow {
    type Err = ParseOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Self::Constrain),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseOverflowError),
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constrain => "constrain",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

/// How a wall-clock time that is skipped or repeated by a time zone
/// transition is resolved to an exact time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Disambiguation {
    /// Skipped times move forward by the length of the gap, repeated times
    /// take the earlier occurrence.
    #[default]
    Compatible,
    /// Take the earlier of the possible exact times.
    Earlier,
    /// Take the later of the possible exact times.
    Later,
    /// Return a range error.
    Reject,
}

/// A parsing error for `Disambiguation`.
#[derive(Debug, Clone, Copy)]
pub struct ParseDisambiguationError;

impl fmt::Display for ParseDisambiguationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid disambiguation value")
    }
}

impl FromStr for Disambiguation {
    type Err = ParseDisambiguationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compatible" => Ok(Self::Compatible),
            "earlier" => Ok(Self::Earlier),
            "later" => Ok(Self::Later),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseDisambiguationError),
        }
    }
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Compatible => "compatible",
            Self::Earlier => "earlier",
            Self::Later => "later",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}
