//! This module implements `Period`, a calendar-aware span of years, months, and days.

use core::fmt;

use crate::{iso::DateDifference, DateTimeError, DateTimeResult, PlainDate};

/// A span of years, months, and days.
///
/// The length of a `Period` depends on where it is applied: one month from
/// January 31st lands on a different number of days than one month from
/// June 1st.
///
/// ```rust
/// use datespan::{Period, PlainDate};
///
/// let start = PlainDate::try_new(2020, 9, 11).unwrap();
/// let end = start.subtract_days(60).unwrap();
///
/// let period = Period::between(&start, &end).unwrap();
/// assert_eq!((period.months(), period.days()), (-1, -29));
/// assert_eq!(period.to_string(), "P-1M-29D");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// The zero-length `Period`.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a new `Period`. The components may have mixed signs.
    #[inline]
    #[must_use]
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    #[inline]
    #[must_use]
    pub const fn of_days(days: i32) -> Self {
        Self::new(0, 0, days)
    }

    /// Creates a `Period` of `weeks` seven-day weeks.
    pub fn of_weeks(weeks: i32) -> DateTimeResult<Self> {
        weeks
            .checked_mul(7)
            .map(Self::of_days)
            .ok_or(DateTimeError::range().with_message("Weeks exceed the range of days."))
    }

    #[inline]
    #[must_use]
    pub const fn of_months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    #[inline]
    #[must_use]
    pub const fn of_years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    /// Returns the `Period` from `start` until `end`.
    ///
    /// Whole months are counted first and split into years and months, then
    /// the remaining days. When the day of `end` falls short of the day of
    /// `start`, the last month is not complete and its days are counted
    /// instead, so all components share the sign of the span.
    pub fn between(start: &PlainDate, end: &PlainDate) -> DateTimeResult<Self> {
        let mut total_months = proleptic_month(end) - proleptic_month(start);
        let mut days = i64::from(end.day()) - i64::from(start.day());
        if total_months > 0 && days < 0 {
            total_months -= 1;
            let month_end = start.add_months(total_months)?;
            days = end.to_epoch_days() - month_end.to_epoch_days();
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.days_in_month());
        }
        Self::try_from(DateDifference::new(
            total_months / 12,
            total_months % 12,
            0,
            days,
        ))
    }
}

#[inline]
fn proleptic_month(date: &PlainDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month()) - 1
}

impl Period {
    #[inline]
    #[must_use]
    pub const fn years(&self) -> i32 {
        self.years
    }

    #[inline]
    #[must_use]
    pub const fn months(&self) -> i32 {
        self.months
    }

    #[inline]
    #[must_use]
    pub const fn days(&self) -> i32 {
        self.days
    }

    /// Returns the years and months of this `Period` as a count of months.
    #[must_use]
    pub const fn to_total_months(&self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns whether any component is negative.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Returns this `Period` with every component made non-negative.
    pub fn abs(&self) -> DateTimeResult<Self> {
        Ok(Self::new(
            checked_abs(self.years)?,
            checked_abs(self.months)?,
            checked_abs(self.days)?,
        ))
    }

    /// Returns this `Period` with every component negated.
    pub fn negated(&self) -> DateTimeResult<Self> {
        Ok(Self::new(
            checked_neg(self.years)?,
            checked_neg(self.months)?,
            checked_neg(self.days)?,
        ))
    }

    /// Returns this `Period` with months rolled into years, so that the months
    /// are within `-11..=11` and share the sign of the years. Days are kept
    /// as they are.
    pub fn normalized(&self) -> DateTimeResult<Self> {
        let total_months = self.to_total_months();
        let years = i32::try_from(total_months / 12)
            .map_err(|_| DateTimeError::range().with_message("Years exceed an i32."))?;
        // The remainder is always within -11..=11.
        Ok(Self::new(years, (total_months % 12) as i32, self.days))
    }

    pub(crate) fn as_date_difference(&self) -> DateDifference {
        DateDifference::new(
            self.years.into(),
            self.months.into(),
            0,
            self.days.into(),
        )
    }
}

impl TryFrom<DateDifference> for Period {
    type Error = DateTimeError;

    fn try_from(value: DateDifference) -> Result<Self, Self::Error> {
        let convert = |value: i64| {
            i32::try_from(value).map_err(|_| {
                DateTimeError::range().with_message("Period component exceeds an i32.")
            })
        };
        let days = value
            .weeks
            .checked_mul(7)
            .and_then(|weeks| weeks.checked_add(value.days))
            .ok_or(DateTimeError::range().with_message("Period component exceeds an i32."))?;
        Ok(Self::new(
            convert(value.years)?,
            convert(value.months)?,
            convert(days)?,
        ))
    }
}

impl fmt::Display for Period {
    /// Writes the `Period` in the ISO-8601 `PnYnMnD` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

#[inline]
fn checked_abs(value: i32) -> DateTimeResult<i32> {
    value
        .checked_abs()
        .ok_or(DateTimeError::range().with_message("Period component overflowed."))
}

#[inline]
fn checked_neg(value: i32) -> DateTimeResult<i32> {
    value
        .checked_neg()
        .ok_or(DateTimeError::range().with_message("Period component overflowed."))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::Period;
    use crate::PlainDate;

    #[test]
    fn between_shares_one_sign() {
        let start = PlainDate::try_new(2020, 9, 11).unwrap();
        let end = PlainDate::try_new(2020, 7, 13).unwrap();
        let period = Period::between(&start, &end).unwrap();
        assert_eq!(period, Period::new(0, -1, -29));
        assert!(period.is_negative());
        assert_eq!(period.abs().unwrap(), Period::new(0, 1, 29));

        let reverse = Period::between(&end, &start).unwrap();
        assert_eq!(reverse, Period::new(0, 1, 29));
        assert_eq!(reverse.negated().unwrap(), period);
    }

    #[test]
    fn between_keeps_months_when_days_share_the_sign() {
        let start = PlainDate::try_new(2021, 3, 30).unwrap();
        let end = PlainDate::try_new(2021, 2, 28).unwrap();
        let period = Period::between(&start, &end).unwrap();
        assert_eq!(period, Period::new(0, -1, -2));
        assert_eq!(period.to_string(), "P-1M-2D");

        let start = PlainDate::try_new(2024, 1, 31).unwrap();
        let end = PlainDate::try_new(2024, 3, 1).unwrap();
        assert_eq!(Period::between(&start, &end).unwrap(), Period::new(0, 1, 1));
        assert_eq!(Period::between(&end, &start).unwrap(), Period::new(0, -1, -1));
    }

    #[test]
    fn between_counts_years() {
        let start = PlainDate::try_new(1990, 5, 20).unwrap();
        let end = PlainDate::try_new(2024, 3, 1).unwrap();
        let period = Period::between(&start, &end).unwrap();
        assert_eq!(period, Period::new(33, 9, 10));
        assert_eq!(period.to_total_months(), 405);
        assert!(Period::between(&start, &start).unwrap().is_zero());
    }

    #[test]
    fn normalized_rolls_months() {
        assert_eq!(
            Period::new(1, 15, 3).normalized().unwrap(),
            Period::new(2, 3, 3)
        );
        assert_eq!(
            Period::new(1, -15, 3).normalized().unwrap(),
            Period::new(0, -3, 3)
        );
    }

    #[test]
    fn constructors() {
        assert_eq!(Period::of_weeks(3).unwrap(), Period::of_days(21));
        assert!(Period::of_weeks(i32::MAX).is_err());
        assert_eq!(Period::of_months(4).months(), 4);
        assert_eq!(Period::of_years(2).years(), 2);
        assert!(Period::new(i32::MIN, 0, 0).negated().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::new(0, 1, 29).to_string(), "P1M29D");
        assert_eq!(Period::new(0, -1, -29).to_string(), "P-1M-29D");
        assert_eq!(Period::new(2, 0, 0).to_string(), "P2Y");
    }
}
