//! Implementations of the core types that use the bundled time zone data.
//!
//! Enable with the `compiled_data` feature flag.

use std::sync::{LazyLock, Mutex};

use crate::{tzdb::TzdbProvider, DateTimeError, DateTimeResult};

mod now;
mod timezone;
mod zoneddatetime;

/// The process-wide provider backed by the bundled IANA time zone database.
pub static TZ_PROVIDER: LazyLock<Mutex<TzdbProvider>> =
    LazyLock::new(|| Mutex::new(TzdbProvider::default()));

/// Runs `f` with the locked `TZ_PROVIDER`.
pub(crate) fn with_tz_provider<T>(
    f: impl FnOnce(&TzdbProvider) -> DateTimeResult<T>,
) -> DateTimeResult<T> {
    let provider = TZ_PROVIDER
        .lock()
        .map_err(|_| DateTimeError::general("Unable to acquire lock"))?;
    f(&provider)
}
