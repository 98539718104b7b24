use core::str::FromStr;

use crate::{
    builtins::compiled::with_tz_provider,
    difference::Difference,
    options::{Disambiguation, Unit},
    DateTimeError, DateTimeResult, Duration, PlainDateTime, TimeZone, ZonedDateTime,
};

// ==== TZ_PROVIDER method implementations ====

/// The primary `ZonedDateTime` method implementations.
///
/// The following [`ZonedDateTime`] methods are feature gated behind the
/// `compiled_data` feature flag.
impl ZonedDateTime {
    /// Creates a new valid `ZonedDateTime`.
    #[inline]
    pub fn try_new(epoch_nanoseconds: i128, time_zone: TimeZone) -> DateTimeResult<Self> {
        with_tz_provider(|provider| {
            Self::try_new_with_provider(epoch_nanoseconds, time_zone, provider)
        })
    }

    /// Resolves a `PlainDateTime` in `time_zone`.
    pub fn from_plain_date_time(
        date_time: &PlainDateTime,
        time_zone: TimeZone,
        disambiguation: Disambiguation,
    ) -> DateTimeResult<Self> {
        with_tz_provider(|provider| {
            Self::from_plain_date_time_with_provider(date_time, time_zone, disambiguation, provider)
        })
    }

    /// Returns the same instant seen from `time_zone`.
    pub fn with_time_zone(&self, time_zone: TimeZone) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.with_time_zone_with_provider(time_zone, provider))
    }

    pub fn add_years(&self, years: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_years_with_provider(years, provider))
    }

    pub fn subtract_years(&self, years: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_years_with_provider(years, provider))
    }

    pub fn add_months(&self, months: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_months_with_provider(months, provider))
    }

    pub fn subtract_months(&self, months: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_months_with_provider(months, provider))
    }

    pub fn add_weeks(&self, weeks: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_weeks_with_provider(weeks, provider))
    }

    pub fn subtract_weeks(&self, weeks: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_weeks_with_provider(weeks, provider))
    }

    pub fn add_days(&self, days: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_days_with_provider(days, provider))
    }

    pub fn subtract_days(&self, days: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_days_with_provider(days, provider))
    }

    pub fn add_hours(&self, hours: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_hours_with_provider(hours, provider))
    }

    pub fn subtract_hours(&self, hours: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_hours_with_provider(hours, provider))
    }

    pub fn add_minutes(&self, minutes: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_minutes_with_provider(minutes, provider))
    }

    pub fn subtract_minutes(&self, minutes: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_minutes_with_provider(minutes, provider))
    }

    pub fn add_seconds(&self, seconds: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_seconds_with_provider(seconds, provider))
    }

    pub fn subtract_seconds(&self, seconds: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_seconds_with_provider(seconds, provider))
    }

    pub fn add_nanoseconds(&self, nanoseconds: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_nanoseconds_with_provider(nanoseconds, provider))
    }

    pub fn subtract_nanoseconds(&self, nanoseconds: i64) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_nanoseconds_with_provider(nanoseconds, provider))
    }

    /// Adds an exact [`Duration`] to the current `ZonedDateTime`.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn add_duration(&self, duration: &Duration) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.add_duration_with_provider(duration, provider))
    }

    /// Subtracts an exact [`Duration`] from the current `ZonedDateTime`.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn subtract_duration(&self, duration: &Duration) -> DateTimeResult<Self> {
        with_tz_provider(|provider| self.subtract_duration_with_provider(duration, provider))
    }

    /// Returns the whole `unit`s from `self` until `other`.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        with_tz_provider(|provider| self.until_with_provider(other, unit, provider))
    }

    /// Returns the whole `unit`s from `other` until `self`.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn since(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        with_tz_provider(|provider| self.since_with_provider(other, unit, provider))
    }
}

impl Difference for ZonedDateTime {
    fn until(&self, other: &Self, unit: Unit) -> DateTimeResult<i64> {
        ZonedDateTime::until(self, other, unit)
    }
}

impl FromStr for ZonedDateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        with_tz_provider(|provider| Self::from_str_with_provider(s, provider))
    }
}
