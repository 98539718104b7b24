//! This module implements `PlainDateTime` any directly related algorithms.

use core::{fmt, str::FromStr};

use crate::{
    builtins::core::{date::negate, Duration, Period, PlainDate, TimelineSlots},
    difference::Difference,
    iso::{DateDifference, IsoDate, IsoDateSlots, IsoDateTime, IsoTime},
    options::{Overflow, Unit},
    parsers, DateTimeError, DateTimeResult,
};

/// A calendar date and wall-clock time, with no time zone.
///
/// ```rust
/// use datespan::{options::Unit, PlainDateTime};
///
/// let start: PlainDateTime = "2024-01-17T15:50:30".parse().unwrap();
/// let end = start.add_seconds(10).unwrap();
///
/// assert_eq!(start.until(&end, Unit::Second).unwrap(), 10);
/// assert_eq!(end.to_string(), "2024-01-17T15:50:40");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDateTime {
    pub(crate) iso: IsoDateTime,
}

// ==== Private PlainDateTime API ====

impl PlainDateTime {
    /// Creates a new unchecked `PlainDateTime`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDateTime) -> Self {
        Self { iso }
    }

    fn add_date(&self, duration: &DateDifference) -> DateTimeResult<Self> {
        self.iso
            .add_date_duration(duration, Overflow::Constrain)
            .map(Self::new_unchecked)
    }

    fn add_exact(&self, nanoseconds: i128) -> DateTimeResult<Self> {
        self.iso.add_nanoseconds(nanoseconds).map(Self::new_unchecked)
    }
}

// ==== Public PlainDateTime API ====

impl PlainDateTime {
    /// Creates a new `PlainDateTime`, rejecting any invalid field.
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> DateTimeResult<Self> {
        Self::try_new_with_subseconds(year, month, day, hour, minute, second, 0, 0, 0)
    }

    /// Creates a new `PlainDateTime` with sub-second fields, rejecting any
    /// invalid field.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new_with_subseconds(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> DateTimeResult<Self> {
        let date = IsoDate::new_with_overflow(year, month.into(), day.into(), Overflow::Reject)?;
        let time = IsoTime::new(
            hour.into(),
            minute.into(),
            second.into(),
            millisecond.into(),
            microsecond.into(),
            nanosecond.into(),
            Overflow::Reject,
        )?;
        IsoDateTime::new(date, time).map(Self::new_unchecked)
    }

    /// Combines a `PlainDate` and an `IsoTime`.
    pub fn new(date: PlainDate, time: IsoTime) -> DateTimeResult<Self> {
        if !time.is_valid() {
            return Err(DateTimeError::range().with_message("IsoTime is not valid"));
        }
        IsoDateTime::new(date.iso, time).map(Self::new_unchecked)
    }

    /// Parses a date and time with a numeric field pattern, such as
    /// `MM/dd/yyyy HH:mm:ss`.
    pub fn from_pattern(source: &str, pattern: &str) -> DateTimeResult<Self> {
        parsers::parse_with_pattern(source, pattern).map(Self::new_unchecked)
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso.date.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.iso.date.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso.date.day
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.iso.time.hour
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.iso.time.minute
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.iso.time.second
    }

    #[inline]
    #[must_use]
    pub fn millisecond(&self) -> u16 {
        self.iso.time.millisecond
    }

    #[inline]
    #[must_use]
    pub fn microsecond(&self) -> u16 {
        self.iso.time.microsecond
    }

    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u16 {
        self.iso.time.nanosecond
    }

    /// Returns the wall-clock time of this `PlainDateTime`.
    #[inline]
    #[must_use]
    pub fn time(&self) -> IsoTime {
        self.iso.time
    }

    #[inline]
    #[must_use]
    pub fn to_plain_date(&self) -> PlainDate {
        PlainDate::new_unchecked(self.iso.date)
    }
}

// ==== Arithmetic ====

impl PlainDateTime {
    pub fn add_years(&self, years: i64) -> DateTimeResult<Self> {
        self.add_date(&DateDifference::new(years, 0, 0, 0))
    }

    pub fn subtract_years(&self, years: i64) -> DateTimeResult<Self> {
        self.add_years(negate(years)?)
    }

    pub fn add_months(&self, months: i64) -> DateTimeResult<Self> {
        self.add_date(&DateDifference::new(0, months, 0, 0))
    }

    pub fn subtract_months(&self, months: i64) -> DateTimeResult<Self> {
        self.add_months(negate(months)?)
    }

    pub fn add_weeks(&self, weeks: i64) -> DateTimeResult<Self> {
        self.add_date(&DateDifference::new(0, 0, weeks, 0))
    }

    pub fn subtract_weeks(&self, weeks: i64) -> DateTimeResult<Self> {
        self.add_weeks(negate(weeks)?)
    }

    pub fn add_days(&self, days: i64) -> DateTimeResult<Self> {
        self.add_date(&DateDifference::new(0, 0, 0, days))
    }

    pub fn subtract_days(&self, days: i64) -> DateTimeResult<Self> {
        self.add_days(negate(days)?)
    }

    pub fn add_hours(&self, hours: i64) -> DateTimeResult<Self> {
        self.add_duration(&Duration::from_hours(hours))
    }

    pub fn subtract_hours(&self, hours: i64) -> DateTimeResult<Self> {
        self.subtract_duration(&Duration::from_hours(hours))
    }

    pub fn add_minutes(&self, minutes: i64) -> DateTimeResult<Self> {
        self.add_duration(&Duration::from_minutes(minutes))
    }

    pub fn subtract_minutes(&self, minutes: i64) -> DateTimeResult<Self> {
        self.subtract_duration(&Duration::from_minutes(minutes))
    }

    pub fn add_seconds(&self, seconds: i64) -> DateTimeResult<Self> {
        self.add_duration(&Duration::from_seconds(seconds))
    }

    pub fn subtract_seconds(&self, seconds: i64) -> DateTimeResult<Self> {
        self.subtract_duration(&Duration::from_seconds(seconds))
    }

    pub fn add_milliseconds(&self, milliseconds: i64) -> DateTimeResult<Self> {
        self.add_exact(i128::from(milliseconds) * 1_000_000)
    }

    pub fn subtract_milliseconds(&self, milliseconds: i64) -> DateTimeResult<Self> {
        self.add_exact(-i128::from(milliseconds) * 1_000_000)
    }

    pub fn add_nanoseconds(&self, nanoseconds: i64) -> DateTimeResult<Self> {
        self.add_exact(i128::from(nanoseconds))
    }

    pub fn subtract_nanoseconds(&self, nanoseconds: i64) -> DateTimeResult<Self> {
        self.add_exact(-i128::from(nanoseconds))
    }

    /// Adds an exact `Duration`; a time past midnight carries into the date.
    pub fn add_duration(&self, duration: &Duration) -> DateTimeResult<Self> {
        self.add_exact(duration.as_nanoseconds())
    }

    pub fn subtract_duration(&self, duration: &Duration) -> DateTimeResult<Self> {
        self.add_exact(-duration.as_nanoseconds())
    }

    /// Adds a `Period` to the date, keeping the time of day.
    pub fn add_period(&self, period: &Period) -> DateTimeResult<Self> {
        self.add_date(&period.as_date_difference())
    }

    pub fn subtract_period(&self, period: &Period) -> DateTimeResult<Self> {
        self.add_period(&period.negated()?)
    }
}

// ==== Differences ====

impl PlainDateTime {
    /// Returns the whole `unit`s from `self` until `other`.
    ///
    /// Time units divide the exact difference by the unit length. Date units
    /// only count a day once its time of day has been reached, so
    /// `2024-01-17T15:50` until `2024-01-18T10:20` is zero days.
    pub fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        self.iso.until_unit(&other.iso, unit)
    }

    /// Returns the whole `unit`s from `other` until `self`.
    pub fn since(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        other.until(self, unit)
    }

    /// Returns the whole days elapsed from `self` until `other`.
    pub fn days_until(&self, other: &Self) -> DateTimeResult<i64> {
        self.until(other, Unit::Day)
    }
}

impl IsoDateSlots for PlainDateTime {
    fn iso_date(&self) -> IsoDate {
        self.iso.date
    }
}

impl TimelineSlots for PlainDateTime {
    fn timeline_nanoseconds(&self) -> i128 {
        self.iso.as_nanoseconds()
    }
}

impl Difference for PlainDateTime {
    fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        PlainDateTime::until(self, other, unit)
    }
}

impl From<PlainDate> for PlainDateTime {
    fn from(value: PlainDate) -> Self {
        Self::new_unchecked(IsoDateTime::new_unchecked(value.iso, IsoTime::default()))
    }
}

impl FromStr for PlainDateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_date_time(s).map(Self::new_unchecked)
    }
}

impl fmt::Display for PlainDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        parsers::write_date_time(f, &self.iso)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{iso::IsoTime, options::Unit, Duration, Period, PlainDate, PlainDateTime};

    #[test]
    fn new_rejects_invalid_fields() {
        assert!(PlainDateTime::try_new(2024, 1, 17, 24, 0, 0).is_err());
        assert!(PlainDateTime::try_new(2024, 2, 30, 0, 0, 0).is_err());
        assert!(PlainDateTime::try_new_with_subseconds(2024, 1, 1, 0, 0, 0, 1000, 0, 0).is_err());
        // The last representable local date-time sits a day past the instant limit.
        assert!(PlainDateTime::try_new(275_760, 9, 13, 23, 59, 59).is_ok());
        assert!(PlainDateTime::try_new(-271_821, 4, 19, 0, 0, 0).is_err());
        assert!(PlainDateTime::try_new(-271_821, 4, 19, 0, 0, 1).is_ok());
    }

    #[test]
    fn time_arithmetic_carries_into_date() {
        let dt = PlainDateTime::try_new(2023, 12, 31, 23, 59, 30).unwrap();
        let result = dt.add_seconds(45).unwrap();
        assert_eq!(result.to_string(), "2024-01-01T00:00:15");
        let result = dt.subtract_hours(48).unwrap();
        assert_eq!(result.to_string(), "2023-12-29T23:59:30");
        let result = dt.add_milliseconds(30_001).unwrap();
        assert_eq!(result.to_string(), "2024-01-01T00:00:00.001");
        let result = dt.subtract_nanoseconds(1).unwrap();
        assert_eq!(result.nanosecond(), 999);
        assert_eq!(result.second(), 29);
    }

    #[test]
    fn date_arithmetic_keeps_time() {
        let dt = PlainDateTime::try_new(2024, 1, 31, 8, 15, 0).unwrap();
        assert_eq!(dt.add_months(1).unwrap().to_string(), "2024-02-29T08:15:00");
        assert_eq!(dt.subtract_years(1).unwrap().to_string(), "2023-01-31T08:15:00");
        assert_eq!(dt.add_weeks(2).unwrap().to_string(), "2024-02-14T08:15:00");
        assert_eq!(
            dt.add_period(&Period::new(1, 1, 1)).unwrap().to_string(),
            "2025-03-01T08:15:00"
        );
        assert_eq!(
            dt.add_duration(&Duration::from_days(1)).unwrap().to_string(),
            "2024-02-01T08:15:00"
        );
    }

    #[test]
    fn date_units_respect_time_of_day() {
        let start = PlainDateTime::try_new(2024, 1, 17, 15, 50, 30).unwrap();
        let end = PlainDateTime::try_new(2024, 6, 3, 10, 20, 55).unwrap();
        assert_eq!(start.until(&end, Unit::Day).unwrap(), 137);
        assert_eq!(start.days_until(&end).unwrap(), 137);
        assert_eq!(start.until(&end, Unit::Week).unwrap(), 19);
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 4);
        assert_eq!(end.until(&start, Unit::Day).unwrap(), -137);

        let next_morning = PlainDateTime::try_new(2024, 1, 18, 10, 20, 0).unwrap();
        assert_eq!(start.until(&next_morning, Unit::Day).unwrap(), 0);
        assert_eq!(start.until(&next_morning, Unit::Hour).unwrap(), 18);
    }

    #[test]
    fn time_units_truncate() {
        let start = PlainDateTime::try_new(2024, 1, 17, 15, 50, 30).unwrap();
        let end = start.subtract_minutes(6).unwrap().add_seconds(59).unwrap();
        assert_eq!(start.until(&end, Unit::Minute).unwrap(), -5);
        assert_eq!(start.until(&end, Unit::Second).unwrap(), -301);
        assert_eq!(end.since(&start, Unit::Second).unwrap(), -301);
    }

    #[test]
    fn conversions() {
        let date = PlainDate::try_new(2024, 6, 3).unwrap();
        let dt = PlainDateTime::new(date, IsoTime::default()).unwrap();
        assert_eq!(dt, PlainDateTime::from(date));
        assert_eq!(dt.to_plain_date(), date);
        let parsed: PlainDateTime = "2024-06-03T10:20:55.123456789".parse().unwrap();
        assert_eq!(parsed.millisecond(), 123);
        assert_eq!(parsed.microsecond(), 456);
        assert_eq!(parsed.nanosecond(), 789);
        assert_eq!(parsed.to_string(), "2024-06-03T10:20:55.123456789");
        let from_pattern =
            PlainDateTime::from_pattern("06/03/2024 10:20:55", "MM/dd/yyyy HH:mm:ss").unwrap();
        assert_eq!(from_pattern.to_string(), "2024-06-03T10:20:55");
    }
}
