//! The `Now` component, reading the current time from a set of host hooks.

use crate::{
    host::HostHooks, iso::IsoDateTime, provider::TimeZoneProvider, DateTimeResult,
};

use super::{timezone::TimeZone, Instant, PlainDate, PlainDateTime, ZonedDateTime};

/// Access to the current time as seen by a host.
///
/// The time zone, when one is not provided, is read from the host before the
/// clock, so a slow time zone lookup does not make the returned time stale.
pub struct Now<H: HostHooks> {
    host_hooks: H,
}

impl<H: HostHooks> Now<H> {
    pub fn new(host_hooks: H) -> Self {
        Self { host_hooks }
    }

    fn system_datetime_with_provider(
        &self,
        time_zone: Option<TimeZone>,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<(IsoDateTime, TimeZone)> {
        let time_zone = match time_zone {
            Some(time_zone) => time_zone,
            None => self.host_hooks.get_system_time_zone(provider)?,
        };
        let instant = self.instant()?;
        let (iso, _) = time_zone.get_iso_datetime_for(&instant, provider)?;
        Ok((iso, time_zone))
    }

    /// Returns the current `Instant`.
    pub fn instant(&self) -> DateTimeResult<Instant> {
        let epoch_nanoseconds = self.host_hooks.get_system_epoch_nanoseconds()?;
        Instant::try_new(epoch_nanoseconds.as_i128())
    }

    /// Returns the host's time zone.
    pub fn time_zone_with_provider(
        &self,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<TimeZone> {
        self.host_hooks.get_system_time_zone(provider)
    }

    /// Returns the current time in `time_zone`, or in the host's zone when
    /// `None`.
    pub fn zoned_date_time_with_provider(
        &self,
        time_zone: Option<TimeZone>,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<ZonedDateTime> {
        let time_zone = match time_zone {
            Some(time_zone) => time_zone,
            None => self.host_hooks.get_system_time_zone(provider)?,
        };
        let instant = self.instant()?;
        ZonedDateTime::from_instant_with_provider(instant, time_zone, provider)
    }

    pub fn plain_date_time_with_provider(
        &self,
        time_zone: Option<TimeZone>,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<PlainDateTime> {
        let (iso, _) = self.system_datetime_with_provider(time_zone, provider)?;
        Ok(PlainDateTime::new_unchecked(iso))
    }

    pub fn plain_date_with_provider(
        &self,
        time_zone: Option<TimeZone>,
        provider: &impl TimeZoneProvider,
    ) -> DateTimeResult<PlainDate> {
        let (iso, _) = self.system_datetime_with_provider(time_zone, provider)?;
        Ok(PlainDate::new_unchecked(iso.date))
    }
}
