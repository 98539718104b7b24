use crate::{
    builtins::{
        compiled::with_tz_provider,
        core::{Now, PlainDate, PlainDateTime, ZonedDateTime},
    },
    host::HostHooks,
    DateTimeResult, TimeZone,
};

impl<H: HostHooks> Now<H> {
    /// Returns the host's time zone.
    pub fn time_zone(&self) -> DateTimeResult<TimeZone> {
        with_tz_provider(|provider| self.time_zone_with_provider(provider))
    }

    /// Returns the current time in `time_zone`, or in the host's zone when `None`.
    pub fn zoned_date_time(&self, time_zone: Option<TimeZone>) -> DateTimeResult<ZonedDateTime> {
        with_tz_provider(|provider| self.zoned_date_time_with_provider(time_zone, provider))
    }

    pub fn plain_date_time(&self, time_zone: Option<TimeZone>) -> DateTimeResult<PlainDateTime> {
        with_tz_provider(|provider| self.plain_date_time_with_provider(time_zone, provider))
    }

    pub fn plain_date(&self, time_zone: Option<TimeZone>) -> DateTimeResult<PlainDate> {
        with_tz_provider(|provider| self.plain_date_with_provider(time_zone, provider))
    }
}
