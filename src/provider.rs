//! The `TimeZoneProvider` trait.

use crate::{DateTimeError, DateTimeResult};

/// The `TimeZoneProvider` trait provides methods required for a provider
/// to implement in order to source time zone data from that provider.
///
/// Offsets are whole seconds east of UTC.
pub trait TimeZoneProvider {
    /// Returns whether `identifier` names a time zone this provider knows.
    fn check_identifier(&self, identifier: &str) -> bool;

    /// Returns the UTC offset in effect for `identifier` at `epoch_seconds`.
    fn get_named_tz_offset_seconds(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> DateTimeResult<i64>;
}

/// A provider with no time zone data.
///
/// Offset and UTC time zones still work with it, named zones do not.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverProvider;

impl TimeZoneProvider for NeverProvider {
    fn check_identifier(&self, _: &str) -> bool {
        false
    }

    fn get_named_tz_offset_seconds(&self, identifier: &str, _: i64) -> DateTimeResult<i64> {
        Err(DateTimeError::range().with_message(alloc::format!(
            "No time zone data is available for {identifier}."
        )))
    }
}
