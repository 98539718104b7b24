//! This module implements the internal ISO field records.
//!
//! The three main types of records are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` represents a year, month, and day in the proleptic Gregorian
//! calendar.
//!
//! An `IsoTime` represents an hour, minute, second, millisecond, microsecond,
//! and nanosecond of a day.
//!
//! An `IsoDateTime` has the fields of both an `IsoDate` and `IsoTime`.

use alloc::format;
use core::cmp::Ordering;

use crate::{
    datespan_assert,
    options::{Overflow, Unit},
    utils, DateTimeError, DateTimeResult, DateTimeUnwrap, NS_PER_DAY,
};

/// The largest supported ISO year.
pub const MAX_ISO_YEAR: i32 = 275_760;
/// The smallest supported ISO year.
pub const MIN_ISO_YEAR: i32 = -271_821;

/// The epoch day range that a date is allowed to occupy.
const MIN_EPOCH_DAYS: i64 = -100_000_001;
const MAX_EPOCH_DAYS: i64 = 100_000_000;

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validaiton.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Creates a new validated `IsoDateTime` that is within valid limits.
    pub fn new(date: IsoDate, time: IsoTime) -> DateTimeResult<Self> {
        let result = Self::new_unchecked(date, time);
        if !result.is_within_limits() {
            return Err(
                DateTimeError::range().with_message("IsoDateTime not within a valid range.")
            );
        }
        Ok(result)
    }

    /// Creates an `IsoDateTime` from epoch nanoseconds and a UTC offset in nanoseconds.
    pub(crate) fn from_epoch_nanos(nanos: i128, offset: i64) -> DateTimeResult<Self> {
        let local = nanos + i128::from(offset);
        let days = local.div_euclid(i128::from(NS_PER_DAY));
        let nanos_of_day = local.rem_euclid(i128::from(NS_PER_DAY));

        let days = i64::try_from(days).map_err(|_| {
            DateTimeError::range().with_message("nanos was not within a valid range.")
        })?;
        let date = IsoDate::from_epoch_days(days)?;
        // The remainder is always less than a day of nanoseconds.
        let time = IsoTime::from_nanoseconds_of_day(nanos_of_day as i64);
        Self::new(date, time)
    }

    /// Returns whether the `IsoDateTime` is within valid limits.
    pub(crate) fn is_within_limits(&self) -> bool {
        iso_dt_within_valid_limits(self.date, &self.time)
    }

    /// Returns this `IsoDateTime` in nanoseconds, as if it were a UTC time.
    pub fn as_nanoseconds(&self) -> i128 {
        i128::from(self.date.to_epoch_days()) * i128::from(NS_PER_DAY)
            + i128::from(self.time.to_nanoseconds_of_day())
    }

    /// Adds a calendar duration to the date part, keeping the time.
    pub(crate) fn add_date_duration(
        &self,
        duration: &DateDifference,
        overflow: Overflow,
    ) -> DateTimeResult<Self> {
        let date = self.date.add_date_duration(duration, overflow)?;
        Self::new(date, self.time)
    }

    /// Adds an exact amount of nanoseconds, carrying overflow into the date.
    pub(crate) fn add_nanoseconds(&self, nanoseconds: i128) -> DateTimeResult<Self> {
        let total = self
            .as_nanoseconds()
            .checked_add(nanoseconds)
            .ok_or(DateTimeError::range().with_message("IsoDateTime not within a valid range."))?;
        Self::from_epoch_nanos(total, 0)
    }

    /// Returns the date that whole date units should be counted to when
    /// differencing `self` and `other`.
    ///
    /// When `other`'s time of day has not yet reached `self`'s time of day, the
    /// last day is incomplete and the end date moves one day toward `self`.
    pub(crate) fn adjusted_end_date(&self, other: &Self) -> DateTimeResult<IsoDate> {
        let date_sign = other.date.cmp(&self.date);
        let time_sign = other.time.cmp(&self.time);

        match (date_sign, time_sign) {
            (Ordering::Greater, Ordering::Less) => {
                IsoDate::from_epoch_days(other.date.to_epoch_days() - 1)
            }
            (Ordering::Less, Ordering::Greater) => {
                IsoDate::from_epoch_days(other.date.to_epoch_days() + 1)
            }
            _ => Ok(other.date),
        }
    }

    /// Returns the whole `unit`s from `self` until `other`.
    ///
    /// Time units measure the exact local difference. Date units are counted
    /// from `self`'s date to the adjusted end date.
    pub(crate) fn until_unit(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        if unit.is_date_unit() {
            let end = self.adjusted_end_date(other)?;
            return self.date.until_date_unit(&end, unit);
        }
        let unit_nanoseconds = unit.as_nanoseconds().datespan_unwrap()?;
        let difference = other.as_nanoseconds() - self.as_nanoseconds();
        i64::try_from(difference / i128::from(unit_nanoseconds))
            .map_err(|_| DateTimeError::range().with_message("Difference exceeds an i64."))
    }
}

// ==== `IsoDate` section ====

/// A trait for accessing the `IsoDate` across the various value types
pub trait IsoDateSlots {
    /// Returns the target's internal `IsoDate`.
    fn iso_date(&self) -> IsoDate;
}

/// The result of differencing two `IsoDate`s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateDifference {
    pub(crate) years: i64,
    pub(crate) months: i64,
    pub(crate) weeks: i64,
    pub(crate) days: i64,
}

impl DateDifference {
    pub(crate) const fn new(years: i64, months: i64, weeks: i64, days: i64) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }
}

/// `IsoDate` serves as a record for the year, month, and day fields of a
/// proleptic Gregorian date.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, regulating the fields according to `overflow`.
    pub fn new_with_overflow(
        year: i32,
        month: i32,
        day: i32,
        overflow: Overflow,
    ) -> DateTimeResult<Self> {
        let id = match overflow {
            Overflow::Constrain => {
                let month = month.clamp(1, 12) as u8;
                let day = constrain_iso_day(year, month, day);
                // NOTE: Values are clamped in a u8 range.
                Self::new_unchecked(year, month, day)
            }
            Overflow::Reject => {
                if !is_valid_date(year, month, day) {
                    return Err(DateTimeError::range().with_message("not a valid ISO date."));
                }
                // NOTE: Values have been verified to be in a u8 range.
                Self::new_unchecked(year, month as u8, day as u8)
            }
        };

        if !id.is_within_limits() {
            return Err(
                DateTimeError::range().with_message("Date is not within ISO date time limits.")
            );
        }

        Ok(id)
    }

    /// Creates an `IsoDate` from a count of days since 1970-01-01.
    pub(crate) fn from_epoch_days(epoch_days: i64) -> DateTimeResult<Self> {
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&epoch_days) {
            return Err(DateTimeError::range().with_message("Not in a valid ISO day range."));
        }
        let (year, month, day) = utils::ymd_from_epoch_days(epoch_days);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Functionally the same as Date's abstract operation `MakeDay`
    ///
    /// Equivalent to `IsoDateToEpochDays`
    #[inline]
    pub fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_gregorian_date(self.year, self.month, self.day)
    }

    /// Returns if the current `IsoDate` is valid.
    pub fn is_valid(self) -> bool {
        is_valid_date(self.year, self.month.into(), self.day.into())
    }

    pub(crate) fn is_within_limits(self) -> bool {
        (MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(&self.year)
            && (MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&self.to_epoch_days())
    }

    /// Returns the ISO day of the week, 1 (Monday) to 7 (Sunday).
    pub(crate) fn day_of_week(self) -> u8 {
        utils::epoch_days_to_iso_day_of_week(self.to_epoch_days())
    }

    /// Returns the 1-indexed day of the year.
    pub(crate) fn day_of_year(self) -> u16 {
        utils::month_to_day(self.month - 1, utils::is_leap(self.year)) + u16::from(self.day)
    }

    /// Returns the resulting `IsoDate` from adding a `DateDifference` to this `IsoDate`
    pub(crate) fn add_date_duration(
        self,
        duration: &DateDifference,
        overflow: Overflow,
    ) -> DateTimeResult<Self> {
        // 1. Let intermediate be ! BalanceISOYearMonth(year + years, month + months).
        let (year, month) = balance_iso_year_month(
            i64::from(self.year) + duration.years,
            i64::from(self.month) + duration.months,
        )?;

        // 2. Let intermediate be ? RegulateISODate(intermediate.[[Year]], intermediate.[[Month]], day, overflow).
        let intermediate =
            Self::new_with_overflow(year, i32::from(month), i32::from(self.day), overflow)?;

        // 3. Set days to days + 7 × weeks.
        let additional_days = duration
            .weeks
            .checked_mul(7)
            .and_then(|weeks| weeks.checked_add(duration.days))
            .ok_or(DateTimeError::range().with_message("days exceeded a valid range."))?;

        // 4. Let d be intermediate.[[Day]] + days.
        let day = i64::from(intermediate.day)
            .checked_add(additional_days)
            .ok_or(DateTimeError::range().with_message("days exceeded a valid range."))?;

        // 5. Return BalanceISODate(intermediate.[[Year]], intermediate.[[Month]], d).
        Self::balance(
            i64::from(intermediate.year),
            i64::from(intermediate.month),
            day,
        )
    }

    /// Balances a year, month, and day of any magnitude into a valid `IsoDate`.
    pub(crate) fn balance(year: i64, month: i64, day: i64) -> DateTimeResult<Self> {
        let (year, month) = balance_iso_year_month(year, month)?;
        let epoch_days = day
            .checked_sub(1)
            .and_then(|days| {
                utils::epoch_days_from_gregorian_date(year, month, 1).checked_add(days)
            })
            .ok_or(DateTimeError::range().with_message("days exceeded a valid range."))?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the whole date `unit`s from `self` until `other`.
    pub(crate) fn until_date_unit(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        let days = other.to_epoch_days() - self.to_epoch_days();
        match unit {
            Unit::Day => Ok(days),
            Unit::Week => Ok(days / 7),
            Unit::Month => Ok(self.diff_iso_date(other, Unit::Month)?.months),
            Unit::Year => Ok(self.diff_iso_date(other, Unit::Year)?.years),
            _ => Err(DateTimeError::range()
                .with_message(format!("{unit} is not supported between dates."))),
        }
    }

    /// Differences `self` against `other`, balancing up to `largest_unit`.
    ///
    /// Whole years and months are counted first, without passing `other`, and
    /// the remainder is expressed in days, or in weeks and days when the
    /// largest unit is `Week`.
    pub(crate) fn diff_iso_date(
        &self,
        other: &Self,
        largest_unit: Unit,
    ) -> DateTimeResult<DateDifference> {
        datespan_assert!(
            largest_unit.is_date_unit(),
            "Dates can only be differenced in date units."
        );
        // 1. Let sign be -CompareISODate(y1, m1, d1, y2, m2, d2).
        let sign = -(self.cmp(other) as i64);
        // 2. If sign = 0, return ! CreateDateDurationRecord(0, 0, 0, 0).
        if sign == 0 {
            return Ok(DateDifference::default());
        }

        let mut years = 0;
        let mut months = 0;
        // 3. If largestUnit is "year", then
        if largest_unit == Unit::Year {
            // Starting one year short of the year difference saves iterations.
            let mut candidate_years = i64::from(other.year - self.year);
            if candidate_years != 0 {
                candidate_years -= sign;
            }
            // b. Repeat, while ISODateSurpasses(sign, y1 + candidateYears, m1, d1, y2, m2, d2) is false,
            while !iso_date_surpasses(
                &Self::new_unchecked(self.year + candidate_years as i32, self.month, self.day),
                other,
                sign,
            ) {
                // i. Set years to candidateYears.
                years = candidate_years;
                // ii. Set candidateYears to candidateYears + sign.
                candidate_years += sign;
            }
        }

        // 4. If largestUnit is "year" or largestUnit is "month", then
        if largest_unit == Unit::Year || largest_unit == Unit::Month {
            let start_year = i64::from(self.year) + years;
            let mut candidate_months = (i64::from(other.year) - start_year) * 12
                + (i64::from(other.month) - i64::from(self.month));
            if candidate_months != 0 {
                candidate_months -= sign;
            }
            loop {
                let (year, month) =
                    balance_iso_year_month(start_year, i64::from(self.month) + candidate_months)?;
                // c. Repeat, while ISODateSurpasses(sign, intermediate.[[Year]], intermediate.[[Month]], d1, y2, m2, d2) is false,
                if iso_date_surpasses(&Self::new_unchecked(year, month, self.day), other, sign) {
                    break;
                }
                // i. Set months to candidateMonths.
                months = candidate_months;
                // ii. Set candidateMonths to candidateMonths + sign.
                candidate_months += sign;
            }
        }

        // 5. Set intermediate to BalanceISOYearMonth(y1 + years, m1 + months).
        let (year, month) = balance_iso_year_month(
            i64::from(self.year) + years,
            i64::from(self.month) + months,
        )?;
        // 6. Let constrained be ! RegulateISODate(intermediate.[[Year]], intermediate.[[Month]], d1, "constrain").
        let constrained =
            Self::new_unchecked(year, month, constrain_iso_day(year, month, self.day.into()));

        let days = other.to_epoch_days() - constrained.to_epoch_days();

        let (weeks, days) = if largest_unit == Unit::Week {
            (days / 7, days % 7)
        } else {
            (0, days)
        };

        // 7. Return ! CreateDateDurationRecord(years, months, weeks, days).
        Ok(DateDifference::new(years, months, weeks, days))
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record that contains the time fields of a day.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,         // 0..=23
    pub minute: u8,       // 0..=59
    pub second: u8,       // 0..=59
    pub millisecond: u16, // 0..=999
    pub microsecond: u16, // 0..=999
    pub nanosecond: u16,  // 0..=999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    /// Creates a new regulated `IsoTime`.
    pub fn new(
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
        microsecond: i32,
        nanosecond: i32,
        overflow: Overflow,
    ) -> DateTimeResult<IsoTime> {
        match overflow {
            Overflow::Constrain => {
                let h = hour.clamp(0, 23) as u8;
                let min = minute.clamp(0, 59) as u8;
                let sec = second.clamp(0, 59) as u8;
                let milli = millisecond.clamp(0, 999) as u16;
                let micro = microsecond.clamp(0, 999) as u16;
                let nano = nanosecond.clamp(0, 999) as u16;
                Ok(Self::new_unchecked(h, min, sec, milli, micro, nano))
            }
            Overflow::Reject => {
                if !is_valid_time(hour, minute, second, millisecond, microsecond, nanosecond) {
                    return Err(DateTimeError::range().with_message("IsoTime is not valid"));
                };
                Ok(Self::new_unchecked(
                    hour as u8,
                    minute as u8,
                    second as u8,
                    millisecond as u16,
                    microsecond as u16,
                    nanosecond as u16,
                ))
            }
        }
    }

    /// Creates an `IsoTime` from a nanosecond of the day in `0..NS_PER_DAY`.
    pub(crate) fn from_nanoseconds_of_day(nanoseconds: i64) -> Self {
        let (_, time) = Self::balance(0, 0, 0, 0, 0, nanoseconds);
        time
    }

    /// Balances and creates a new `IsoTime` with `day` overflow from the provided values.
    pub(crate) fn balance(
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
        microsecond: i64,
        nanosecond: i64,
    ) -> (i64, Self) {
        // 1. Set microsecond to microsecond + floor(nanosecond / 1000).
        // 2. Set nanosecond to nanosecond modulo 1000.
        let (quotient, nanosecond) = div_mod(nanosecond, 1000);
        let microsecond = microsecond + quotient;

        // 3. Set millisecond to millisecond + floor(microsecond / 1000).
        // 4. Set microsecond to microsecond modulo 1000.
        let (quotient, microsecond) = div_mod(microsecond, 1000);
        let millisecond = millisecond + quotient;

        // 5. Set second to second + floor(millisecond / 1000).
        // 6. Set millisecond to millisecond modulo 1000.
        let (quotient, millisecond) = div_mod(millisecond, 1000);
        let second = second + quotient;

        // 7. Set minute to minute + floor(second / 60).
        // 8. Set second to second modulo 60.
        let (quotient, second) = div_mod(second, 60);
        let minute = minute + quotient;

        // 9. Set hour to hour + floor(minute / 60).
        // 10. Set minute to minute modulo 60.
        let (quotient, minute) = div_mod(minute, 60);
        let hour = hour + quotient;

        // 11. Let days be floor(hour / 24).
        // 12. Set hour to hour modulo 24.
        let (days, hour) = div_mod(hour, 24);

        let time = Self::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            millisecond as u16,
            microsecond as u16,
            nanosecond as u16,
        );

        (days, time)
    }

    /// Returns the nanoseconds elapsed since the start of the day.
    pub(crate) fn to_nanoseconds_of_day(self) -> i64 {
        let ms = i64::from(self.hour) * utils::MS_PER_HOUR
            + i64::from(self.minute) * utils::MS_PER_MINUTE
            + i64::from(self.second) * 1000
            + i64::from(self.millisecond);
        (ms * 1000 + i64::from(self.microsecond)) * 1000 + i64::from(self.nanosecond)
    }

    /// Checks if the time is a valid `IsoTime`
    pub(crate) fn is_valid(&self) -> bool {
        is_valid_time(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.millisecond.into(),
            self.microsecond.into(),
            self.nanosecond.into(),
        )
    }
}

// ==== `IsoDateTime` specific utility functions ====

#[inline]
/// Utility function to determine if a `DateTime`'s components create a `DateTime` within valid limits
fn iso_dt_within_valid_limits(date: IsoDate, time: &IsoTime) -> bool {
    if !date.is_within_limits() {
        return false;
    }
    let ns = IsoDateTime::new_unchecked(date, *time).as_nanoseconds();

    let max = crate::NS_MAX_INSTANT + i128::from(NS_PER_DAY);
    let min = crate::NS_MIN_INSTANT - i128::from(NS_PER_DAY);

    min < ns && max > ns
}

// ==== `IsoDate` specific utiltiy functions ====

#[inline]
// Determines if the month and day are valid for the given year.
fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    is_valid_iso_day(year, month as u8, day)
}

#[inline]
/// Returns with the `this` surpasses `other`.
fn iso_date_surpasses(this: &IsoDate, other: &IsoDate, sign: i64) -> bool {
    this.cmp(other) as i64 * sign == 1
}

#[inline]
fn balance_iso_year_month(year: i64, month: i64) -> DateTimeResult<(i32, u8)> {
    // 1. Set year to year + floor((month - 1) / 12).
    let y = year + (month - 1).div_euclid(12);
    // 2. Set month to ((month - 1) modulo 12) + 1.
    let m = (month - 1).rem_euclid(12) + 1;
    // A year outside of the ISO limits is always out of range.
    let y = i32::try_from(y)
        .ok()
        .filter(|y| (MIN_ISO_YEAR..=MAX_ISO_YEAR).contains(y))
        .ok_or(DateTimeError::range().with_message("year is not within a valid range."))?;
    // 3. Return the Record { [[Year]]: year, [[Month]]: month  }.
    Ok((y, m as u8))
}

#[inline]
pub(crate) fn constrain_iso_day(year: i32, month: u8, day: i32) -> u8 {
    let days_in_month = utils::iso_days_in_month(year, month);
    day.clamp(1, days_in_month.into()) as u8
}

#[inline]
pub(crate) fn is_valid_iso_day(year: i32, month: u8, day: i32) -> bool {
    let days_in_month = utils::iso_days_in_month(year, month);
    (1..=i32::from(days_in_month)).contains(&day)
}

// ==== `IsoTime` specific utilities ====

#[inline]
fn is_valid_time(hour: i32, minute: i32, second: i32, ms: i32, mis: i32, ns: i32) -> bool {
    if !(0..=23).contains(&hour) {
        return false;
    }

    let min_sec = 0..=59;
    if !min_sec.contains(&minute) || !min_sec.contains(&second) {
        return false;
    }

    let sub_second = 0..=999;
    sub_second.contains(&ms) && sub_second.contains(&mis) && sub_second.contains(&ns)
}

#[inline]
fn div_mod(dividend: i64, divisor: i64) -> (i64, i64) {
    (dividend.div_euclid(divisor), dividend.rem_euclid(divisor))
}

#[cfg(test)]
mod tests {
    use super::{IsoDate, IsoDateTime, IsoTime};
    use crate::options::{Overflow, Unit};

    #[test]
    fn diff_with_month_end_constraint() {
        let jan_31 = IsoDate::new_unchecked(2021, 1, 31);
        let mar_1 = IsoDate::new_unchecked(2021, 3, 1);
        let diff = jan_31.diff_iso_date(&mar_1, Unit::Year).unwrap();
        assert_eq!((diff.years, diff.months, diff.days), (0, 1, 1));

        let diff = jan_31.diff_iso_date(&mar_1, Unit::Week).unwrap();
        assert_eq!((diff.weeks, diff.days), (4, 1));
    }

    #[test]
    fn diff_negative_direction() {
        let start = IsoDate::new_unchecked(2020, 9, 11);
        let end = IsoDate::new_unchecked(2020, 7, 13);
        let diff = start.diff_iso_date(&end, Unit::Year).unwrap();
        assert_eq!((diff.years, diff.months, diff.days), (0, -1, -29));

        let diff = start.diff_iso_date(&end, Unit::Month).unwrap();
        assert_eq!((diff.years, diff.months, diff.days), (0, -1, -29));
    }

    #[test]
    fn diff_multiple_years() {
        let start = IsoDate::new_unchecked(2019, 2, 28);
        let end = IsoDate::new_unchecked(2024, 2, 29);
        let diff = start.diff_iso_date(&end, Unit::Year).unwrap();
        assert_eq!((diff.years, diff.months, diff.days), (5, 0, 1));

        let diff = start.diff_iso_date(&end, Unit::Month).unwrap();
        assert_eq!((diff.years, diff.months, diff.days), (0, 60, 1));
    }

    #[test]
    fn balance_carries_days_and_months() {
        assert_eq!(
            IsoDate::balance(2023, 14, 1).unwrap(),
            IsoDate::new_unchecked(2024, 2, 1)
        );
        assert_eq!(
            IsoDate::balance(2024, 3, 0).unwrap(),
            IsoDate::new_unchecked(2024, 2, 29)
        );
        assert_eq!(
            IsoDate::balance(2024, 1, 366).unwrap(),
            IsoDate::new_unchecked(2024, 12, 31)
        );
        assert!(IsoDate::balance(2024, 1, i64::MAX).is_err());
    }

    #[test]
    fn overflow_regulation() {
        let constrained = IsoDate::new_with_overflow(2023, 2, 31, Overflow::Constrain).unwrap();
        assert_eq!((constrained.month, constrained.day), (2, 28));
        assert!(IsoDate::new_with_overflow(2023, 2, 31, Overflow::Reject).is_err());
        assert!(IsoDate::new_with_overflow(300_000, 1, 1, Overflow::Reject).is_err());

        let time = IsoTime::new(25, 61, 0, 0, 0, 0, Overflow::Constrain).unwrap();
        assert_eq!((time.hour, time.minute), (23, 59));
        assert!(IsoTime::new(24, 0, 0, 0, 0, 0, Overflow::Reject).is_err());
    }

    #[test]
    fn epoch_nanos_with_offset() {
        // 2023-11-30T01:49:12Z
        let nanos = 1_701_308_952_000_000_000i128;
        let utc = IsoDateTime::from_epoch_nanos(nanos, 0).unwrap();
        assert_eq!(
            (utc.date.year, utc.date.month, utc.date.day, utc.time.hour),
            (2023, 11, 30, 1)
        );

        let minus_five = IsoDateTime::from_epoch_nanos(nanos, -5 * 3_600_000_000_000).unwrap();
        assert_eq!((minus_five.date.day, minus_five.time.hour), (29, 20));
        assert_eq!(utc.as_nanoseconds(), nanos);
    }

    #[test]
    fn adjusted_end_date_moves_toward_start() {
        let start = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(2024, 1, 17),
            IsoTime::new_unchecked(15, 50, 30, 0, 0, 0),
        );
        let end = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(2024, 6, 3),
            IsoTime::new_unchecked(10, 20, 55, 0, 0, 0),
        );
        assert_eq!(
            start.adjusted_end_date(&end).unwrap(),
            IsoDate::new_unchecked(2024, 6, 2)
        );
        assert_eq!(
            end.adjusted_end_date(&start).unwrap(),
            IsoDate::new_unchecked(2024, 1, 18)
        );
    }
}
