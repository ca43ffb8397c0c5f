//! Logging shims.
//!
//! Expand to the `log` facade when the `logging` feature is enabled and to nothing
//! otherwise, so call sites do not need their own `cfg` attributes.

macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($arg)*);
        }
    };
}

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)*);
        }
    };
}

macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::warn!($($arg)*);
        }
    };
}
