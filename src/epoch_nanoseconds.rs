use crate::{DateTimeError, DateTimeResult};

/// Nanoseconds since the Unix epoch, 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochNanoseconds(pub(crate) i128);

impl From<i128> for EpochNanoseconds {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl EpochNanoseconds {
    pub fn as_i128(&self) -> i128 {
        self.0
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds as i128 * 1_000_000_000)
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds as i128 * 1_000_000)
    }

    pub fn check_validity(&self) -> DateTimeResult<()> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(DateTimeError::range()
                .with_message("Instant nanoseconds are not within a valid epoch range."));
        }
        Ok(())
    }
}

impl TryFrom<EpochNanoseconds> for i64 {
    type Error = DateTimeError;

    fn try_from(value: EpochNanoseconds) -> Result<Self, Self::Error> {
        i64::try_from(value.0)
            .map_err(|_| DateTimeError::range().with_message("epoch nanoseconds exceed an i64."))
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (crate::NS_MIN_INSTANT..=crate::NS_MAX_INSTANT).contains(nanos)
}
