//! This module implements `PlainDate` and any directly related algorithms.

use core::{fmt, str::FromStr};

use crate::{
    builtins::core::{Period, PlainDateTime},
    difference::Difference,
    iso::{DateDifference, IsoDate, IsoDateSlots, IsoDateTime, IsoTime},
    options::{Overflow, Unit},
    parsers, utils, DateTimeError, DateTimeResult,
};

/// A calendar date in the proleptic Gregorian calendar, with no time of day
/// and no time zone.
///
/// ```rust
/// use datespan::{options::Unit, PlainDate};
///
/// let start = PlainDate::from_pattern("06/24/2017", "MM/dd/yyyy").unwrap();
/// let end: PlainDate = "2017-06-30".parse().unwrap();
///
/// assert_eq!(start.days_until(&end), 6);
/// assert_eq!(start.until(&end, Unit::Week).unwrap(), 0);
/// assert_eq!(start.to_string(), "2017-06-24");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate {
    pub(crate) iso: IsoDate,
}

// ==== Private API ====

impl PlainDate {
    /// Create a new `PlainDate` with the date values and calendar slot.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }

    /// Returns the date after adding a date difference.
    pub(crate) fn add_date(
        &self,
        duration: &DateDifference,
        overflow: Overflow,
    ) -> DateTimeResult<Self> {
        self.iso
            .add_date_duration(duration, overflow)
            .map(Self::new_unchecked)
    }
}

// ==== Public API ====

impl PlainDate {
    /// Creates a new `PlainDate`, rejecting any invalid field.
    #[inline]
    pub fn try_new(year: i32, month: u8, day: u8) -> DateTimeResult<Self> {
        Self::new_with_overflow(year, month, day, Overflow::Reject)
    }

    /// Creates a new `PlainDate`, handling invalid fields according to `overflow`.
    pub fn new_with_overflow(
        year: i32,
        month: u8,
        day: u8,
        overflow: Overflow,
    ) -> DateTimeResult<Self> {
        let iso = IsoDate::new_with_overflow(year, month.into(), day.into(), overflow)?;
        Ok(Self::new_unchecked(iso))
    }

    /// Creates the date `epoch_days` days after 1970-01-01.
    pub fn from_epoch_days(epoch_days: i64) -> DateTimeResult<Self> {
        IsoDate::from_epoch_days(epoch_days).map(Self::new_unchecked)
    }

    /// Parses a date with a numeric field pattern, such as `MM/dd/yyyy`.
    ///
    /// Time fields in the pattern are parsed and then dropped.
    pub fn from_pattern(source: &str, pattern: &str) -> DateTimeResult<Self> {
        parsers::parse_with_pattern(source, pattern).map(|iso| Self::new_unchecked(iso.date))
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.iso.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso.day
    }

    /// Returns the ISO day of the week, 1 (Monday) to 7 (Sunday).
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        self.iso.day_of_week()
    }

    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        self.iso.day_of_year()
    }

    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        utils::iso_days_in_month(self.iso.year, self.iso.month)
    }

    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        utils::mathematical_days_in_year(self.iso.year)
    }

    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        utils::is_leap(self.iso.year)
    }

    /// Returns the days since 1970-01-01.
    #[must_use]
    pub fn to_epoch_days(&self) -> i64 {
        self.iso.to_epoch_days()
    }
}

// ==== Arithmetic ====

impl PlainDate {
    pub fn add_days(&self, days: i64) -> DateTimeResult<Self> {
        self.add_date(&DateDifference::new(0, 0, 0, days), Overflow::Constrain)
    }

    pub fn subtract_days(&self, days: i64) -> DateTimeResult<Self> {
        self.add_days(negate(days)?)
    }

    pub fn add_weeks(&self, weeks: i64) -> DateTimeResult<Self> {
        self.add_date(&DateDifference::new(0, 0, weeks, 0), Overflow::Constrain)
    }

    pub fn subtract_weeks(&self, weeks: i64) -> DateTimeResult<Self> {
        self.add_weeks(negate(weeks)?)
    }

    /// Adds months, clamping the day to the end of the resulting month.
    pub fn add_months(&self, months: i64) -> DateTimeResult<Self> {
        self.add_date(&DateDifference::new(0, months, 0, 0), Overflow::Constrain)
    }

    pub fn subtract_months(&self, months: i64) -> DateTimeResult<Self> {
        self.add_months(negate(months)?)
    }

    /// Adds years, clamping February 29th to the 28th in common years.
    pub fn add_years(&self, years: i64) -> DateTimeResult<Self> {
        self.add_date(&DateDifference::new(years, 0, 0, 0), Overflow::Constrain)
    }

    pub fn subtract_years(&self, years: i64) -> DateTimeResult<Self> {
        self.add_years(negate(years)?)
    }

    /// Adds a `Period`: years and months first, then days.
    pub fn add_period(&self, period: &Period) -> DateTimeResult<Self> {
        self.add_date(&period.as_date_difference(), Overflow::Constrain)
    }

    pub fn subtract_period(&self, period: &Period) -> DateTimeResult<Self> {
        self.add_period(&period.negated()?)
    }
}

// ==== Differences ====

impl PlainDate {
    /// Returns the whole `unit`s from `self` until `other`.
    ///
    /// Weeks are whole days divided by seven. Months and years are counted on
    /// the calendar. Time units are not supported.
    pub fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        self.iso.until_date_unit(&other.iso, unit)
    }

    /// Returns the whole `unit`s from `other` until `self`.
    pub fn since(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        other.until(self, unit)
    }

    /// Returns the signed number of days from `self` until `other`.
    #[must_use]
    pub fn days_until(&self, other: &Self) -> i64 {
        other.to_epoch_days() - self.to_epoch_days()
    }

    /// Returns the `Period` from `self` until `other`.
    pub fn period_until(&self, other: &Self) -> DateTimeResult<Period> {
        Period::between(self, other)
    }
}

// ==== Conversions ====

impl PlainDate {
    /// Combines this date with a wall-clock time.
    pub fn at_time(&self, hour: u8, minute: u8, second: u8) -> DateTimeResult<PlainDateTime> {
        let time = IsoTime::new(
            hour.into(),
            minute.into(),
            second.into(),
            0,
            0,
            0,
            Overflow::Reject,
        )?;
        PlainDateTime::new(*self, time)
    }

    /// Returns midnight at the start of this date.
    pub fn at_start_of_day(&self) -> DateTimeResult<PlainDateTime> {
        IsoDateTime::new(self.iso, IsoTime::default()).map(PlainDateTime::new_unchecked)
    }
}

impl IsoDateSlots for PlainDate {
    fn iso_date(&self) -> IsoDate {
        self.iso
    }
}

impl Difference for PlainDate {
    fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        PlainDate::until(self, other, unit)
    }
}

impl FromStr for PlainDate {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_date(s).map(Self::new_unchecked)
    }
}

impl fmt::Display for PlainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        parsers::write_date(f, &self.iso)
    }
}

#[inline]
pub(crate) fn negate(value: i64) -> DateTimeResult<i64> {
    value
        .checked_neg()
        .ok_or(DateTimeError::range().with_message("Value cannot be negated."))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{options::Overflow, options::Unit, Period, PlainDate};

    #[test]
    fn new_date_limits() {
        assert!(PlainDate::try_new(-271_821, 4, 19).is_ok());
        assert!(PlainDate::try_new(-271_821, 4, 18).is_err());
        assert!(PlainDate::try_new(275_760, 9, 13).is_ok());
        assert!(PlainDate::try_new(275_760, 9, 14).is_err());
        assert!(PlainDate::try_new(2023, 2, 29).is_err());
        let constrained = PlainDate::new_with_overflow(2023, 2, 29, Overflow::Constrain).unwrap();
        assert_eq!(constrained.day(), 28);
    }

    #[test]
    fn accessors() {
        let date = PlainDate::try_new(2024, 3, 1).unwrap();
        assert_eq!(date.day_of_week(), 5);
        assert_eq!(date.day_of_year(), 61);
        assert_eq!(date.days_in_month(), 31);
        assert_eq!(date.days_in_year(), 366);
        assert!(date.in_leap_year());
        assert_eq!(
            PlainDate::from_epoch_days(date.to_epoch_days()).unwrap(),
            date
        );
    }

    #[test]
    fn month_arithmetic_clamps() {
        let date = PlainDate::try_new(2021, 1, 31).unwrap();
        assert_eq!(
            date.add_months(1).unwrap(),
            PlainDate::try_new(2021, 2, 28).unwrap()
        );
        let leap_day = PlainDate::try_new(2024, 2, 29).unwrap();
        assert_eq!(
            leap_day.add_years(1).unwrap(),
            PlainDate::try_new(2025, 2, 28).unwrap()
        );
        assert_eq!(
            leap_day.subtract_weeks(1).unwrap(),
            PlainDate::try_new(2024, 2, 22).unwrap()
        );
        assert_eq!(
            leap_day.add_period(&Period::new(0, 1, 1)).unwrap(),
            PlainDate::try_new(2024, 3, 30).unwrap()
        );
        assert!(leap_day.add_days(i64::MAX).is_err());
        assert!(leap_day.subtract_days(i64::MIN).is_err());
    }

    #[test]
    fn whole_unit_differences() {
        let start = PlainDate::try_new(2024, 1, 10).unwrap();
        let end = PlainDate::try_new(2024, 11, 15).unwrap();
        assert_eq!(start.until(&end, Unit::Day).unwrap(), 310);
        assert_eq!(start.until(&end, Unit::Week).unwrap(), 44);
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 10);
        assert_eq!(start.until(&end, Unit::Year).unwrap(), 0);
        assert_eq!(end.until(&start, Unit::Week).unwrap(), -44);
        assert_eq!(end.since(&start, Unit::Day).unwrap(), 310);
        assert!(start.until(&end, Unit::Hour).is_err());
    }

    #[test]
    fn month_difference_respects_day_of_month() {
        let start = PlainDate::try_new(2021, 1, 31).unwrap();
        let end = PlainDate::try_new(2021, 2, 28).unwrap();
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 0);
        let end = PlainDate::try_new(2021, 3, 31).unwrap();
        assert_eq!(start.until(&end, Unit::Month).unwrap(), 2);
    }

    #[test]
    fn to_date_time() {
        let date = PlainDate::try_new(2022, 10, 31).unwrap();
        let date_time = date.at_time(23, 59, 59).unwrap();
        assert_eq!(date_time.to_string(), "2022-10-31T23:59:59");
        assert_eq!(
            date.at_start_of_day().unwrap().to_string(),
            "2022-10-31T00:00:00"
        );
        assert!(date.at_time(24, 0, 0).is_err());
    }

    #[test]
    fn strings() {
        let date: PlainDate = "2017-06-24".parse().unwrap();
        assert_eq!(date, PlainDate::try_new(2017, 6, 24).unwrap());
        assert_eq!(
            PlainDate::try_new(-1, 1, 1).unwrap().to_string(),
            "-000001-01-01"
        );
        assert_eq!(
            PlainDate::try_new(12_345, 1, 1).unwrap().to_string(),
            "+012345-01-01"
        );
        assert!("2017-13-01".parse::<PlainDate>().is_err());
    }
}
