//! This module contains the core implementation of the `ZonedDateTime`
//! builtin type.

use core::fmt;

use crate::{
    builtins::core::{
        date::negate, timezone::UtcOffset, Duration, Instant, PlainDate, PlainDateTime, TimeZone,
        TimelineSlots,
    },
    iso::{DateDifference, IsoDate, IsoDateSlots, IsoDateTime},
    options::{Disambiguation, Overflow, Unit},
    parsers::{self, ParsedOffset},
    provider::TimeZoneProvider,
    time::EpochNanoseconds,
    DateTimeError, DateTimeResult,
};

#[cfg(test)]
mod tests;

/// An exact point in time paired with a `TimeZone`.
///
/// The local date and time and the offset in effect are resolved when the
/// value is created, so accessors never consult the provider.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    instant: Instant,
    time_zone: TimeZone,
    offset: UtcOffset,
    iso: IsoDateTime,
}

// ==== Private API ====

impl ZonedDateTime {
    /// Creates a `ZonedDateTime` from its resolved parts.
    #[inline]
    #[must_use]
    pub(crate) fn new_unchecked(
        instant: Instant,
        time_zone: TimeZone,
        offset: UtcOffset,
        iso: IsoDateTime,
    ) -> Self {
        Self {
            instant,
            time_zone,
            offset,
            iso,
        }
    }

    /// Creates a `ZonedDateTime` for `instant` in `time_zone`.
    pub(crate) fn from_instant_with_provider(
        instant: Instant,
        time_zone: TimeZone,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        let (iso, offset) = time_zone.get_iso_datetime_for(&instant, provider)?;
        Ok(Self::new_unchecked(instant, time_zone, offset, iso))
    }

    /// Adds calendar units to the local date-time, then resolves it back to
    /// an exact time preferring the current offset.
    fn add_date_with_provider(
        &self,
        duration: &DateDifference,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        let local = self.iso.add_date_duration(duration, Overflow::Constrain)?;
        let instant = self.time_zone.resolve_local(
            &local,
            Disambiguation::Compatible,
            Some(self.offset),
            provider,
        )?;
        Self::from_instant_with_provider(instant, self.time_zone.clone(), provider)
    }

    /// Adds exact nanoseconds to the instant.
    fn add_exact_with_provider(
        &self,
        nanoseconds: i128,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        let instant = self.instant.add_nanoseconds(nanoseconds)?;
        Self::from_instant_with_provider(instant, self.time_zone.clone(), provider)
    }
}

// ==== Public API ====

impl ZonedDateTime {
    /// Creates a new valid `ZonedDateTime`.
    #[inline]
    pub fn try_new_with_provider(
        epoch_nanoseconds: i128,
        time_zone: TimeZone,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        let instant = Instant::try_new(epoch_nanoseconds)?;
        Self::from_instant_with_provider(instant, time_zone, provider)
    }

    /// Resolves a `PlainDateTime` in `time_zone`.
    pub fn from_plain_date_time_with_provider(
        date_time: &PlainDateTime,
        time_zone: TimeZone,
        disambiguation: Disambiguation,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        let instant = time_zone.resolve_local(&date_time.iso, disambiguation, None, provider)?;
        Self::from_instant_with_provider(instant, time_zone, provider)
    }

    /// Returns the same instant seen from `time_zone`.
    pub fn with_time_zone_with_provider(
        &self,
        time_zone: TimeZone,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        Self::from_instant_with_provider(self.instant, time_zone, provider)
    }

    /// Parses a `ZonedDateTime` such as `2022-02-01T00:00:00Z[UTC]`.
    ///
    /// An offset in the string fixes the exact time. Without one, the local
    /// time is resolved in the annotated zone with `Compatible`.
    pub fn from_str_with_provider(
        source: &str,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        let record = parsers::parse_zoned_date_time(source)?;
        let time_zone = match (&record.time_zone, record.offset) {
            (Some(identifier), _) => TimeZone::try_from_str_with_provider(identifier, provider)?,
            (None, Some(ParsedOffset::Z)) => TimeZone::utc(),
            (None, Some(ParsedOffset::Seconds(seconds))) => {
                TimeZone::from(UtcOffset::from_seconds(seconds)?)
            }
            (None, None) => {
                return Err(DateTimeError::syntax()
                    .with_message("A ZonedDateTime requires a time zone or an offset."))
            }
        };

        let local = record.date_time()?;
        let instant = match record.offset {
            Some(offset) => {
                Instant::try_new(local.as_nanoseconds() - i128::from(offset.nanoseconds()))?
            }
            None => time_zone.resolve_local(&local, Disambiguation::Compatible, None, provider)?,
        };
        Self::from_instant_with_provider(instant, time_zone, provider)
    }
}

// ==== Accessors ====

impl ZonedDateTime {
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

    /// Returns the UTC offset in effect at this instant.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    #[inline]
    #[must_use]
    pub fn instant(&self) -> Instant {
        self.instant
    }

    #[inline]
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        self.instant.epoch_milliseconds()
    }

    #[inline]
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> &EpochNanoseconds {
        self.instant.epoch_nanoseconds()
    }

    #[inline]
    #[must_use]
    pub fn to_plain_date_time(&self) -> PlainDateTime {
        PlainDateTime::new_unchecked(self.iso)
    }

    #[inline]
    #[must_use]
    pub fn to_plain_date(&self) -> PlainDate {
        PlainDate::new_unchecked(self.iso.date)
    }
}

// ==== Arithmetic ====

impl ZonedDateTime {
    pub fn add_years_with_provider(
        &self,
        years: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_date_with_provider(&DateDifference::new(years, 0, 0, 0), provider)
    }

    pub fn subtract_years_with_provider(
        &self,
        years: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_years_with_provider(negate(years)?, provider)
    }

    pub fn add_months_with_provider(
        &self,
        months: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_date_with_provider(&DateDifference::new(0, months, 0, 0), provider)
    }

    pub fn subtract_months_with_provider(
        &self,
        months: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_months_with_provider(negate(months)?, provider)
    }

    pub fn add_weeks_with_provider(
        &self,
        weeks: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_date_with_provider(&DateDifference::new(0, 0, weeks, 0), provider)
    }

    pub fn subtract_weeks_with_provider(
        &self,
        weeks: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_weeks_with_provider(negate(weeks)?, provider)
    }

    /// Adds calendar days; the wall-clock time is kept across offset changes.
    pub fn add_days_with_provider(
        &self,
        days: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_date_with_provider(&DateDifference::new(0, 0, 0, days), provider)
    }

    pub fn subtract_days_with_provider(
        &self,
        days: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_days_with_provider(negate(days)?, provider)
    }

    pub fn add_hours_with_provider(
        &self,
        hours: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_duration_with_provider(&Duration::from_hours(hours), provider)
    }

    pub fn subtract_hours_with_provider(
        &self,
        hours: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.subtract_duration_with_provider(&Duration::from_hours(hours), provider)
    }

    pub fn add_minutes_with_provider(
        &self,
        minutes: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_duration_with_provider(&Duration::from_minutes(minutes), provider)
    }

    pub fn subtract_minutes_with_provider(
        &self,
        minutes: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.subtract_duration_with_provider(&Duration::from_minutes(minutes), provider)
    }

    pub fn add_seconds_with_provider(
        &self,
        seconds: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_duration_with_provider(&Duration::from_seconds(seconds), provider)
    }

    pub fn subtract_seconds_with_provider(
        &self,
        seconds: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.subtract_duration_with_provider(&Duration::from_seconds(seconds), provider)
    }

    pub fn add_nanoseconds_with_provider(
        &self,
        nanoseconds: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_exact_with_provider(i128::from(nanoseconds), provider)
    }

    pub fn subtract_nanoseconds_with_provider(
        &self,
        nanoseconds: i64,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_exact_with_provider(-i128::from(nanoseconds), provider)
    }

    /// Adds an exact `Duration` to the instant.
    pub fn add_duration_with_provider(
        &self,
        duration: &Duration,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_exact_with_provider(duration.as_nanoseconds(), provider)
    }

    pub fn subtract_duration_with_provider(
        &self,
        duration: &Duration,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        self.add_exact_with_provider(-duration.as_nanoseconds(), provider)
    }
}

// ==== Differences ====

impl ZonedDateTime {
    /// Returns the whole `unit`s from `self` until `other`.
    ///
    /// For date units, `other` is first moved into `self`'s time zone and the
    /// local date-times are compared, so two values in different zones count
    /// the days a person in `self`'s zone would see. Time units compare the
    /// exact instants.
    pub fn until_with_provider(
        &self,
        other: &Self,
        unit: Unit,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<i64> {
        if unit.is_date_unit() {
            let other = if other.time_zone == self.time_zone {
                other.iso
            } else {
                other
                    .with_time_zone_with_provider(self.time_zone.clone(), provider)?
                    .iso
            };
            return self.iso.until_unit(&other, unit);
        }
        self.instant.until(&other.instant, unit)
    }

    /// Returns the whole `unit`s from `other` until `self`.
    pub fn since_with_provider(
        &self,
        other: &Self,
        unit: Unit,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<i64> {
        other.until_with_provider(self, unit, provider)
    }
}

impl IsoDateSlots for ZonedDateTime {
    fn iso_date(&self) -> IsoDate {
        self.iso.date
    }
}

impl TimelineSlots for ZonedDateTime {
    fn timeline_nanoseconds(&self) -> i128 {
        self.instant.as_i128()
    }
}

impl fmt::Display for ZonedDateTime {
    /// Writes the local date-time, the offset, and the zone annotation,
    /// e.g. `2024-01-10T09:00:00-05:00[America/Montreal]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        parsers::write_date_time(f, &self.iso)?;
        write!(f, "{}[{}]", self.offset, self.time_zone)
    }
}
