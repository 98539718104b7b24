//! The core implementations of the `datespan` builtin types.
//!
//! Methods here that need time zone data take a `TimeZoneProvider`.

pub(crate) mod date;
mod datetime;
mod duration;
mod instant;
mod now;
mod period;
pub(crate) mod timezone;
mod zoneddatetime;

#[doc(inline)]
pub use date::PlainDate;
#[doc(inline)]
pub use datetime::PlainDateTime;
#[doc(inline)]
pub use duration::{Duration, TimelineSlots};
#[doc(inline)]
pub use instant::Instant;
#[doc(inline)]
pub use now::Now;
#[doc(inline)]
pub use period::Period;
#[doc(inline)]
pub use timezone::{TimeZone, UtcOffset};
#[doc(inline)]
pub use zoneddatetime::ZonedDateTime;
