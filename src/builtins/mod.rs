pub(crate) mod core;

#[cfg(feature = "compiled_data")]
mod compiled;

pub use self::core::*;

#[cfg(feature = "compiled_data")]
pub use compiled::TZ_PROVIDER;
