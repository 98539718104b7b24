//! The `datespan` crate computes differences between ISO-8601 dates and
//! times in the units people actually ask for: days, weeks, months, minutes,
//! seconds.
//!
//! ```rust
//! use datespan::{options::Unit, PlainDate};
//!
//! let start = PlainDate::try_new(2024, 1, 10).unwrap();
//! let end = PlainDate::try_new(2024, 11, 15).unwrap();
//!
//! // Whole weeks, truncated toward zero.
//! assert_eq!(Unit::Week.between(&start, &end).unwrap(), 44);
//!
//! // A calendar-aware breakdown of the same span.
//! let period = start.period_until(&end).unwrap();
//! assert_eq!((period.years(), period.months(), period.days()), (0, 10, 5));
//! ```
//!
//! Values come in four flavors:
//!
//!   - [`PlainDate`]: a calendar date with no time or zone.
//!   - [`PlainDateTime`]: a calendar date and wall-clock time with no zone.
//!   - [`Instant`]: an exact point on the UTC timeline.
//!   - [`ZonedDateTime`]: an exact point paired with a [`TimeZone`].
//!
//! Spans come in two: a calendar-aware [`Period`] of years, months and days,
//! and a fixed-length [`Duration`].
//!
//! Named time zones are resolved through a [`provider::TimeZoneProvider`]. The
//! `tzdb` feature ships one backed by the IANA database, and the
//! `compiled_data` feature adds provider-free methods that use it.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Currently throws a false positive regarding dependencies that are only used in tests.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::let_unit_value,
    clippy::option_if_let_else,

    // Casts are range checked at the call sites.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    clippy::missing_panics_doc,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iso;
pub mod options;
pub mod parsers;
pub mod provider;

pub mod host;

#[cfg(feature = "sys")]
pub mod sys;

mod builtins;
mod difference;
mod epoch_nanoseconds;

#[cfg(feature = "tzdb")]
pub mod tzdb;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::DateTimeError;

pub use difference::Difference;

/// The `datespan` result type
pub type DateTimeResult<T> = Result<T, DateTimeError>;

pub mod time {
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::builtins::{
    Duration, Instant, Now, Period, PlainDate, PlainDateTime, TimeZone, TimelineSlots, UtcOffset,
    ZonedDateTime,
};

#[cfg(feature = "compiled_data")]
pub use crate::builtins::TZ_PROVIDER;

/// A library specific trait for unwrapping assertions.
pub(crate) trait DateTimeUnwrap {
    type Output;

    /// `datespan` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn datespan_unwrap(self) -> DateTimeResult<Self::Output>;
}

impl<T> DateTimeUnwrap for Option<T> {
    type Output = T;

    fn datespan_unwrap(self) -> DateTimeResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(DateTimeError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! datespan_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DateTimeError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DateTimeError::assert());
        }
    };
}

/// The sign of a span or a comparison.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    #[default]
    Zero = 0,
    Positive = 1,
    Negative = -1,
}

impl Sign {
    pub(crate) fn from_i128(value: i128) -> Self {
        match value.cmp(&0) {
            core::cmp::Ordering::Greater => Self::Positive,
            core::cmp::Ordering::Less => Self::Negative,
            core::cmp::Ordering::Equal => Self::Zero,
        }
    }
}

// Relevant numeric constants

/// Nanoseconds per day constant: 8.64e+13
pub(crate) const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Milliseconds per day constant: 8.64e+7
pub(crate) const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// Seconds per day constant
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
/// Max Instant nanosecond constant
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY as i128 * 100_000_000i128;
/// Min Instant nanosecond constant
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
