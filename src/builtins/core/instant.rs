//! An implementation of the `Instant` type.

use core::{fmt, str::FromStr};

use crate::{
    builtins::core::{Duration, TimelineSlots},
    difference::Difference,
    iso::IsoDateTime,
    options::Unit,
    parsers,
    time::EpochNanoseconds,
    DateTimeError, DateTimeResult, DateTimeUnwrap,
};

/// An exact point on the UTC timeline, counted in nanoseconds from the Unix epoch.
///
/// ```rust
/// use datespan::{options::Unit, Instant};
///
/// let start = Instant::from_epoch_seconds(0).unwrap();
/// let end: Instant = "1970-01-01T00:10:30Z".parse().unwrap();
///
/// assert_eq!(start.until(&end, Unit::Minute).unwrap(), 10);
/// assert_eq!(end.epoch_milliseconds(), 630_000);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(EpochNanoseconds);

// ==== Private API ====

impl Instant {
    #[inline]
    pub(crate) fn as_i128(&self) -> i128 {
        self.0.as_i128()
    }

    /// Adds an exact amount of nanoseconds, checking the result is in range.
    pub(crate) fn add_nanoseconds(&self, nanoseconds: i128) -> DateTimeResult<Self> {
        let result = self
            .as_i128()
            .checked_add(nanoseconds)
            .ok_or(DateTimeError::range().with_message("Instant exceeds a valid range."))?;
        Self::try_new(result)
    }
}

// ==== Public API ====

impl Instant {
    /// Creates a new `Instant`, checking the nanoseconds are within range.
    pub fn try_new(epoch_nanoseconds: i128) -> DateTimeResult<Self> {
        let epoch_nanoseconds = EpochNanoseconds::from(epoch_nanoseconds);
        epoch_nanoseconds.check_validity()?;
        Ok(Self(epoch_nanoseconds))
    }

    /// Creates a new `Instant` from milliseconds since the Unix epoch.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> DateTimeResult<Self> {
        let epoch_nanoseconds = EpochNanoseconds::from_milliseconds(epoch_milliseconds);
        epoch_nanoseconds.check_validity()?;
        Ok(Self(epoch_nanoseconds))
    }

    /// Creates a new `Instant` from seconds since the Unix epoch.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> DateTimeResult<Self> {
        let epoch_nanoseconds = EpochNanoseconds::from_seconds(epoch_seconds);
        epoch_nanoseconds.check_validity()?;
        Ok(Self(epoch_nanoseconds))
    }

    /// Returns the milliseconds since the Unix epoch, rounded toward negative infinity.
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        // Valid instants are at most 8.64e15 milliseconds from the epoch.
        self.as_i128().div_euclid(1_000_000) as i64
    }

    /// Returns the nanoseconds since the Unix epoch.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> &EpochNanoseconds {
        &self.0
    }

    pub fn add_duration(&self, duration: &Duration) -> DateTimeResult<Self> {
        self.add_nanoseconds(duration.as_nanoseconds())
    }

    pub fn subtract_duration(&self, duration: &Duration) -> DateTimeResult<Self> {
        self.add_nanoseconds(-duration.as_nanoseconds())
    }

    /// Returns the whole `unit`s from `self` until `other`.
    ///
    /// Days are exactly 24 hours long. Weeks, months, and years are not
    /// supported, since an `Instant` has no calendar.
    pub fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        if unit > Unit::Day {
            return Err(DateTimeError::range()
                .with_message(alloc::format!("{unit} is not supported by Instant.")));
        }
        let unit_nanoseconds = unit.as_nanoseconds().datespan_unwrap()?;
        let difference = other.as_i128() - self.as_i128();
        i64::try_from(difference / i128::from(unit_nanoseconds))
            .map_err(|_| DateTimeError::range().with_message("Difference exceeds an i64."))
    }

    /// Returns the whole `unit`s from `other` until `self`.
    pub fn since(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        other.until(self, unit)
    }
}

impl Difference for Instant {
    fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        Instant::until(self, other, unit)
    }
}

impl TimelineSlots for Instant {
    fn timeline_nanoseconds(&self) -> i128 {
        self.as_i128()
    }
}

impl From<Instant> for EpochNanoseconds {
    fn from(value: Instant) -> Self {
        value.0
    }
}

impl FromStr for Instant {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epoch_nanoseconds = parsers::parse_instant(s)?;
        Ok(Self(epoch_nanoseconds))
    }
}

impl fmt::Display for Instant {
    /// Writes the instant as a UTC date-time, e.g. `2024-01-10T12:00:00Z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iso = IsoDateTime::from_epoch_nanos(self.as_i128(), 0).map_err(|_| fmt::Error)?;
        parsers::write_date_time(f, &iso)?;
        f.write_str("Z")
    }
}
