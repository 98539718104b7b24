use crate::builtins::Now;
use crate::host::{HostClock, HostHooks, HostTimeZone};
use crate::provider::TimeZoneProvider;
use crate::time::EpochNanoseconds;
use crate::{DateTimeError, DateTimeResult, TimeZone};

use web_time::{SystemTime, UNIX_EPOCH};

/// The entry point for reading the current system time.
///
/// ```rust,no_run
/// use datespan::{options::Unit, sys::Clock};
///
/// let now = Clock::utc_now();
/// let start = now.instant().unwrap();
/// let end = now.instant().unwrap();
/// assert!(start.until(&end, Unit::Second).unwrap() >= 0);
/// ```
pub struct Clock;

impl Clock {
    /// Get a `Now` object with a [`LocalHostSystem`], which
    /// will use the host system's time zone as a fallback.
    pub fn local_now() -> Now<LocalHostSystem> {
        Now::new(LocalHostSystem)
    }

    /// Get a `Now` object with a [`UtcHostSystem`], which
    /// will use a UTC time zone as a fallback.
    pub fn utc_now() -> Now<UtcHostSystem> {
        Now::new(UtcHostSystem)
    }
}

/// A UTC host system implementation that will return the current time
/// with a UTC time zone as fallback.
///
/// This implementation is backed by [`std::time::SystemTime`].
pub struct UtcHostSystem;

impl HostHooks for UtcHostSystem {}

impl HostClock for UtcHostSystem {
    fn get_host_epoch_nanoseconds(&self) -> DateTimeResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

impl HostTimeZone for UtcHostSystem {
    fn get_host_time_zone(&self, _: &impl TimeZoneProvider) -> DateTimeResult<TimeZone> {
        Ok(TimeZone::utc())
    }
}

/// A local host system implementation that will return the current time
/// with the system time zone as a fallback.
///
/// This implementation is backed by [`std::time::SystemTime`] and [`iana_time_zone`].
pub struct LocalHostSystem;

impl HostHooks for LocalHostSystem {}

impl HostClock for LocalHostSystem {
    fn get_host_epoch_nanoseconds(&self) -> DateTimeResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

impl HostTimeZone for LocalHostSystem {
    fn get_host_time_zone(&self, provider: &impl TimeZoneProvider) -> DateTimeResult<TimeZone> {
        get_system_timezone(provider)
    }
}

#[inline]
pub(crate) fn get_system_timezone(provider: &impl TimeZoneProvider) -> DateTimeResult<TimeZone> {
    let identifier = iana_time_zone::get_timezone()
        .map_err(|_| DateTimeError::general("Error fetching system time zone"))?;
    #[cfg(feature = "log")]
    log::debug!("system time zone is {identifier}");
    TimeZone::try_from_str_with_provider(&identifier, provider)
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> DateTimeResult<EpochNanoseconds> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| DateTimeError::general("Error fetching system time"))
        .map(|d| EpochNanoseconds::from(d.as_nanos() as i128))
}
