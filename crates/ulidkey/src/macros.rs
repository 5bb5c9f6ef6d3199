#![allow(unused_macros)]

// Event helpers that compile away when the `tracing` feature is disabled.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)+) => { tracing::trace!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)+) => { tracing::debug!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "tracing")]
macro_rules! warn_event {
    ($($arg:tt)+) => { tracing::warn!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_event {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "std")]
macro_rules! cfg_std {
    ($($item:item)*) => { $($item)* };
}

#[cfg(not(feature = "std"))]
macro_rules! cfg_std {
    ($($item:item)*) => {};
}
