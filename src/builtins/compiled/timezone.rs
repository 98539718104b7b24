use crate::{builtins::compiled::with_tz_provider, DateTimeResult, TimeZone, UtcOffset};

impl TimeZone {
    /// Parses a `TimeZone`, checking named zones against the bundled data.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn try_from_str(source: &str) -> DateTimeResult<Self> {
        with_tz_provider(|provider| Self::try_from_str_with_provider(source, provider))
    }

    /// Returns the offset in effect at `epoch_nanoseconds`.
    ///
    /// Enable with the `compiled_data` feature flag.
    pub fn get_offset(&self, epoch_nanoseconds: i128) -> DateTimeResult<UtcOffset> {
        with_tz_provider(|provider| self.get_offset_for(epoch_nanoseconds, provider))
    }
}
