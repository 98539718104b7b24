//! This module implements `Duration` along with it's methods and components.

use core::fmt;

use num_traits::{AsPrimitive, ToPrimitive};

use crate::{options::Unit, DateTimeError, DateTimeResult, Sign, NS_PER_DAY};

#[cfg(test)]
mod tests;

const NS_PER_SECOND: i128 = 1_000_000_000;

/// A value that sits on a nanosecond timeline, so that the exact time
/// between two values can be measured.
///
/// `PlainDateTime` measures on its local timeline, `Instant` and
/// `ZonedDateTime` on the UTC timeline.
pub trait TimelineSlots {
    /// Returns the position of this value on its timeline in nanoseconds.
    fn timeline_nanoseconds(&self) -> i128;
}

/// A fixed-length span of time, stored as nanoseconds.
///
/// Unlike a [`Period`][crate::Period], every day of a `Duration` is exactly
/// 24 hours long.
///
/// ```rust
/// use datespan::{options::Unit, Duration, PlainDateTime};
///
/// let start = PlainDateTime::try_new(2024, 1, 17, 15, 50, 30).unwrap();
/// let end = PlainDateTime::try_new(2024, 1, 17, 15, 44, 30).unwrap();
///
/// let duration = Duration::between(&start, &end);
/// assert_eq!(duration.to_minutes(), -6);
/// assert_eq!(duration.abs().to_string(), "PT6M");
/// assert_eq!(Duration::from_days(3).total(Unit::Week).unwrap(), 3.0 / 7.0);
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    nanoseconds: i128,
}

// ==== Constructors ====

impl Duration {
    /// The zero-length `Duration`.
    pub const ZERO: Self = Self::from_nanoseconds(0);

    /// Returns the exact time from `start` until `end`.
    pub fn between<T: TimelineSlots>(start: &T, end: &T) -> Self {
        Self::from_nanoseconds(end.timeline_nanoseconds() - start.timeline_nanoseconds())
    }

    #[inline]
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i128) -> Self {
        Self { nanoseconds }
    }

    #[inline]
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::from_nanoseconds(seconds as i128 * NS_PER_SECOND)
    }

    #[inline]
    #[must_use]
    pub const fn from_minutes(minutes: i64) -> Self {
        Self::from_nanoseconds(minutes as i128 * 60 * NS_PER_SECOND)
    }

    #[inline]
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_nanoseconds(hours as i128 * 3600 * NS_PER_SECOND)
    }

    /// Creates a `Duration` of `days` 24-hour days.
    #[inline]
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self::from_nanoseconds(days as i128 * NS_PER_DAY as i128)
    }

    /// Creates a `Duration` of `amount` `unit`s.
    ///
    /// Months and years have no fixed length and return a range error.
    pub fn of(amount: i64, unit: Unit) -> DateTimeResult<Self> {
        let unit_nanoseconds = unit.as_nanoseconds().ok_or(
            DateTimeError::range().with_message("Duration units must have a fixed length."),
        )?;
        Ok(Self::from_nanoseconds(
            i128::from(amount) * i128::from(unit_nanoseconds),
        ))
    }
}

// ==== Conversions ====

impl Duration {
    /// Returns the length of this `Duration` in nanoseconds.
    #[inline]
    #[must_use]
    pub const fn as_nanoseconds(&self) -> i128 {
        self.nanoseconds
    }

    /// Returns whole 24-hour days, truncated toward zero.
    #[must_use]
    pub fn to_days(&self) -> i64 {
        self.truncate_to(i128::from(NS_PER_DAY))
    }

    /// Returns whole hours, truncated toward zero.
    #[must_use]
    pub fn to_hours(&self) -> i64 {
        self.truncate_to(3600 * NS_PER_SECOND)
    }

    /// Returns whole minutes, truncated toward zero.
    #[must_use]
    pub fn to_minutes(&self) -> i64 {
        self.truncate_to(60 * NS_PER_SECOND)
    }

    /// Returns whole seconds, truncated toward zero.
    #[must_use]
    pub fn to_seconds(&self) -> i64 {
        self.truncate_to(NS_PER_SECOND)
    }

    /// Returns whole milliseconds, truncated toward zero.
    #[must_use]
    pub fn to_milliseconds(&self) -> i64 {
        self.truncate_to(1_000_000)
    }

    /// Returns the nanoseconds, saturated at the bounds of an `i64`.
    #[must_use]
    pub fn to_nanoseconds(&self) -> i64 {
        self.truncate_to(1)
    }

    #[inline]
    fn truncate_to(&self, unit_nanoseconds: i128) -> i64 {
        let value = self.nanoseconds / unit_nanoseconds;
        value
            .to_i64()
            .unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
    }

    /// Returns this `Duration` as a fractional count of `unit`.
    ///
    /// Months and years have no fixed length and return a range error.
    pub fn total(&self, unit: Unit) -> DateTimeResult<f64> {
        let unit_nanoseconds = i128::from(unit.as_nanoseconds().ok_or(
            DateTimeError::range().with_message("Duration units must have a fixed length."),
        )?);
        // Splitting keeps the whole part exact before the fraction is added.
        let whole = self.nanoseconds / unit_nanoseconds;
        let fraction = self.nanoseconds % unit_nanoseconds;
        let (whole, fraction, unit): (f64, f64, f64) =
            (whole.as_(), fraction.as_(), unit_nanoseconds.as_());
        Ok(whole + fraction / unit)
    }
}

// ==== Sign and arithmetic ====

impl Duration {
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::from_i128(self.nanoseconds)
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.nanoseconds == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.nanoseconds < 0
    }

    /// Returns the absolute value of this `Duration`.
    #[inline]
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self::from_nanoseconds(self.nanoseconds.abs())
    }

    /// Returns this `Duration` with the opposite sign.
    #[inline]
    #[must_use]
    pub const fn negated(&self) -> Self {
        Self::from_nanoseconds(-self.nanoseconds)
    }

    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.nanoseconds
            .checked_add(other.nanoseconds)
            .map(Self::from_nanoseconds)
    }

    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.nanoseconds
            .checked_sub(other.nanoseconds)
            .map(Self::from_nanoseconds)
    }
}

impl fmt::Display for Duration {
    /// Writes the `Duration` in the ISO-8601 `PTnHnMnS` form, with each
    /// non-zero component carrying the sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.nanoseconds.unsigned_abs();
        let total_seconds = abs / NS_PER_SECOND as u128;
        let nanoseconds = abs % NS_PER_SECOND as u128;

        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        f.write_str("PT")?;
        if hours != 0 {
            write!(f, "{sign}{hours}H")?;
        }
        if minutes != 0 {
            write!(f, "{sign}{minutes}M")?;
        }
        if seconds != 0 || nanoseconds != 0 {
            write!(f, "{sign}{seconds}")?;
            if nanoseconds != 0 {
                let fraction = alloc::format!("{nanoseconds:09}");
                write!(f, ".{}", fraction.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        }
        Ok(())
    }
}
