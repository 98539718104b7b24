//! This module implements `TimeZone` and `UtcOffset`.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    iso::IsoDateTime,
    options::Disambiguation,
    parsers,
    provider::TimeZoneProvider,
    DateTimeError, DateTimeResult, NS_PER_DAY,
};

use super::Instant;

const NS_PER_SECOND: i64 = 1_000_000_000;

/// Identifiers that always name UTC, no matter which provider is in use.
const UTC_IDENTIFIERS: [&str; 16] = [
    "UTC",
    "Etc/UTC",
    "GMT",
    "Etc/GMT",
    "UCT",
    "Etc/UCT",
    "Zulu",
    "Etc/Zulu",
    "Universal",
    "Etc/Universal",
    "Greenwich",
    "Etc/Greenwich",
    "GMT0",
    "Etc/GMT0",
    "GMT+0",
    "GMT-0",
];

/// A fixed offset from UTC, stored as whole seconds east of UTC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i64);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self(0);

    /// Creates an offset of `seconds` east of UTC.
    ///
    /// The magnitude must be less than 24 hours.
    pub fn from_seconds(seconds: i64) -> DateTimeResult<Self> {
        if seconds.abs() >= crate::SECONDS_PER_DAY {
            return Err(
                DateTimeError::range().with_message("UTC offset must be less than 24 hours.")
            );
        }
        Ok(Self(seconds))
    }

    /// Creates an offset from signed hours and minutes, e.g. `(-5, -30)`.
    pub fn from_hours_minutes(hours: i32, minutes: i32) -> DateTimeResult<Self> {
        let mixed_signs = hours != 0 && minutes != 0 && hours.signum() != minutes.signum();
        if minutes.abs() > 59 || mixed_signs {
            return Err(DateTimeError::range().with_message("Invalid minutes for a UTC offset."));
        }
        Self::from_seconds(i64::from(hours) * 3600 + i64::from(minutes) * 60)
    }

    /// Returns the offset in seconds.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.0
    }

    #[inline]
    pub(crate) const fn nanoseconds(&self) -> i64 {
        self.0 * NS_PER_SECOND
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        let (hour, minute, second) = (abs / 3600, (abs % 3600) / 60, abs % 60);
        write!(f, "{sign}{hour:02}:{minute:02}")?;
        if second != 0 {
            write!(f, ":{second:02}")?;
        }
        Ok(())
    }
}

/// A time zone: either a fixed offset or a named IANA zone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeZone {
    UtcOffset(UtcOffset),
    IanaIdentifier(String),
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(value: UtcOffset) -> Self {
        Self::UtcOffset(value)
    }
}

impl TimeZone {
    /// Returns the `UTC` time zone.
    #[must_use]
    pub fn utc() -> Self {
        Self::IanaIdentifier("UTC".to_owned())
    }

    /// Parses a `TimeZone` from an identifier without checking that a named
    /// zone exists.
    ///
    /// `Z` is accepted as UTC.
    pub fn try_from_identifier_str(source: &str) -> DateTimeResult<Self> {
        if source == "Z" || source == "z" {
            return Ok(Self::utc());
        }
        parsers::parse_identifier(source)
    }

    /// Parses a `TimeZone` from an identifier, checking named zones against
    /// `provider`.
    pub fn try_from_str_with_provider(
        source: &str,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Self> {
        let time_zone = Self::try_from_identifier_str(source)?;
        if let Self::IanaIdentifier(identifier) = &time_zone {
            if !is_utc_identifier(identifier) && !provider.check_identifier(identifier) {
                return Err(
                    DateTimeError::range().with_message("Valid time zone was not provided.")
                );
            }
        }
        Ok(time_zone)
    }

    /// Returns the identifier of this time zone.
    ///
    /// Offset zones are written as `±HH:MM`.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self {
            Self::IanaIdentifier(s) => s.clone(),
            Self::UtcOffset(offset) => alloc::format!("{offset}"),
        }
    }

    /// Returns whether this zone is UTC at every instant.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        match self {
            Self::UtcOffset(offset) => offset.seconds() == 0,
            Self::IanaIdentifier(identifier) => is_utc_identifier(identifier),
        }
    }
}

impl TimeZone {
    /// Returns the offset in effect at `epoch_nanoseconds`.
    pub fn get_offset_for(
        &self,
        epoch_nanoseconds: i128,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<UtcOffset> {
        match self {
            Self::UtcOffset(offset) => Ok(*offset),
            Self::IanaIdentifier(identifier) if is_utc_identifier(identifier) => Ok(UtcOffset::UTC),
            Self::IanaIdentifier(identifier) => {
                let epoch_seconds = i64::try_from(
                    epoch_nanoseconds.div_euclid(i128::from(NS_PER_SECOND)),
                )
                .map_err(|_| DateTimeError::range().with_message("Epoch seconds out of range."))?;
                let seconds = provider.get_named_tz_offset_seconds(identifier, epoch_seconds)?;
                UtcOffset::from_seconds(seconds)
            }
        }
    }

    /// Returns the local date and time of `instant` in this zone.
    pub(crate) fn get_iso_datetime_for(
        &self,
        instant: &Instant,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<(IsoDateTime, UtcOffset)> {
        let offset = self.get_offset_for(instant.as_i128(), provider)?;
        let iso = IsoDateTime::from_epoch_nanos(instant.as_i128(), offset.nanoseconds())?;
        Ok((iso, offset))
    }

    /// Resolves a wall-clock date and time in this zone to an exact time.
    ///
    /// A local time that exists once resolves directly. A local time skipped
    /// by a transition (a gap) or repeated by one (an overlap) resolves
    /// according to `disambiguation`. In an overlap, `preferred_offset` wins
    /// when it is one of the candidates.
    pub fn resolve_local(
        &self,
        local: &IsoDateTime,
        disambiguation: Disambiguation,
        preferred_offset: Option<UtcOffset>,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<Instant> {
        let local_nanos = local.as_nanoseconds();
        let to_instant = |offset: UtcOffset| {
            Instant::try_new(local_nanos - i128::from(offset.nanoseconds()))
        };

        if let Self::UtcOffset(offset) = self {
            return to_instant(*offset);
        }
        if self.is_utc() {
            return to_instant(UtcOffset::UTC);
        }

        // No zone changes its offset twice within a day, so the offsets a day
        // either side of the local time cover every candidate.
        let day = i128::from(NS_PER_DAY);
        let before = self.get_offset_for(local_nanos - day, provider)?;
        let after = self.get_offset_for(local_nanos + day, provider)?;

        let mut candidates = Vec::with_capacity(2);
        for offset in [before, after] {
            if candidates.contains(&offset) {
                continue;
            }
            let instant = local_nanos - i128::from(offset.nanoseconds());
            if self.get_offset_for(instant, provider)? == offset {
                candidates.push(offset);
            }
        }

        match candidates.as_slice() {
            [offset] => to_instant(*offset),
            [] => {
                #[cfg(feature = "log")]
                log::trace!("{local:?} falls in a gap of {}", self.identifier());
                match disambiguation {
                    Disambiguation::Reject => Err(DateTimeError::range()
                        .with_message("Local time does not exist in the time zone.")),
                    Disambiguation::Earlier => to_instant(after),
                    Disambiguation::Compatible | Disambiguation::Later => to_instant(before),
                }
            }
            [first, second, ..] => {
                #[cfg(feature = "log")]
                log::trace!("{local:?} is repeated in {}", self.identifier());
                if let Some(preferred) = preferred_offset.filter(|o| candidates.contains(o)) {
                    return to_instant(preferred);
                }
                // A larger offset gives the earlier exact time.
                let (earlier, later) = if first > second {
                    (*first, *second)
                } else {
                    (*second, *first)
                };
                match disambiguation {
                    Disambiguation::Reject => Err(DateTimeError::range()
                        .with_message("Local time is ambiguous in the time zone.")),
                    Disambiguation::Compatible | Disambiguation::Earlier => to_instant(earlier),
                    Disambiguation::Later => to_instant(later),
                }
            }
        }
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IanaIdentifier(s) => f.write_str(s),
            Self::UtcOffset(offset) => fmt::Display::fmt(offset, f),
        }
    }
}

#[inline]
fn is_utc_identifier(identifier: &str) -> bool {
    UTC_IDENTIFIERS
        .iter()
        .any(|utc| utc.eq_ignore_ascii_case(identifier))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{TimeZone, UtcOffset};
    use crate::{
        iso::{IsoDate, IsoDateTime, IsoTime},
        options::Disambiguation,
        provider::NeverProvider,
    };

    #[test]
    fn offset_display() {
        assert_eq!(UtcOffset::from_seconds(0).unwrap().to_string(), "+00:00");
        assert_eq!(
            UtcOffset::from_hours_minutes(-5, -30).unwrap().to_string(),
            "-05:30"
        );
        assert_eq!(UtcOffset::from_seconds(3_723).unwrap().to_string(), "+01:02:03");
        assert!(UtcOffset::from_seconds(86_400).is_err());
        assert!(UtcOffset::from_hours_minutes(1, -30).is_err());
    }

    #[test]
    fn identifiers() {
        assert!(TimeZone::try_from_identifier_str("Z").unwrap().is_utc());
        assert_eq!(
            TimeZone::try_from_identifier_str("+08:00").unwrap(),
            TimeZone::UtcOffset(UtcOffset::from_seconds(8 * 3600).unwrap())
        );
        assert_eq!(
            TimeZone::try_from_identifier_str("America/Montreal")
                .unwrap()
                .identifier(),
            "America/Montreal"
        );
        assert!(TimeZone::try_from_identifier_str("America//Montreal").is_err());
        assert!(TimeZone::try_from_str_with_provider("Etc/UTC", &NeverProvider).is_ok());
        assert!(TimeZone::try_from_str_with_provider("Asia/Singapore", &NeverProvider).is_err());
    }

    #[test]
    fn utc_resolves_without_provider() {
        let local = IsoDateTime::new(
            IsoDate::new_unchecked(2022, 2, 1),
            IsoTime::new_unchecked(0, 0, 0, 0, 0, 0),
        )
        .unwrap();
        let instant = TimeZone::utc()
            .resolve_local(&local, Disambiguation::Reject, None, &NeverProvider)
            .unwrap();
        assert_eq!(instant.epoch_milliseconds(), 1_643_673_600_000);

        let plus_two = TimeZone::from(UtcOffset::from_seconds(7200).unwrap());
        let instant = plus_two
            .resolve_local(&local, Disambiguation::Reject, None, &NeverProvider)
            .unwrap();
        assert_eq!(instant.epoch_milliseconds(), 1_643_673_600_000 - 7_200_000);
    }
}
