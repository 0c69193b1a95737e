//! Logging shims.
//!
//! With the `defmt-03` feature the macros forward to [`defmt`]; without it they
//! evaluate their arguments and discard them.

#![allow(unused_macros)]

#[cfg(feature = "defmt-03")]
macro_rules! trace {
    ($($arg:tt)*) => {{
        ::defmt::trace!($($arg)*);
    }};
}

#[cfg(feature = "defmt-03")]
macro_rules! debug {
    ($($arg:tt)*) => {{
        ::defmt::debug!($($arg)*);
    }};
}

#[cfg(feature = "defmt-03")]
macro_rules! info {
    ($($arg:tt)*) => {{
        ::defmt::info!($($arg)*);
    }};
}

#[cfg(feature = "defmt-03")]
macro_rules! warn_ {
    ($($arg:tt)*) => {{
        ::defmt::warn!($($arg)*);
    }};
}

#[cfg(feature = "defmt-03")]
macro_rules! error {
    ($($arg:tt)*) => {{
        ::defmt::error!($($arg)*);
    }};
}

#[cfg(not(feature = "defmt-03"))]
macro_rules! trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        let _ = ($fmt, $(&$arg),*);
    }};
}

#[cfg(not(feature = "defmt-03"))]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        let _ = ($fmt, $(&$arg),*);
    }};
}

#[cfg(not(feature = "defmt-03"))]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        let _ = ($fmt, $(&$arg),*);
    }};
}

#[cfg(not(feature = "defmt-03"))]
macro_rules! warn_ {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        let _ = ($fmt, $(&$arg),*);
    }};
}

#[cfg(not(feature = "defmt-03"))]
macro_rules! error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        let _ = ($fmt, $(&$arg),*);
    }};
}

// `warn` alone would clash with the builtin attribute of the same name.
pub(crate) use {debug, error, info, trace, warn_ as warn};

#[cfg(all(test, not(feature = "defmt-03")))]
mod tests {
    use super::warn;

    #[test]
    fn every_level_accepts_arguments() {
        let value = 7_u8;
        trace!("plain");
        debug!("one {=u8}", value);
        info!("two {} {}", value, 1_u32,);
        warn!("warn {=u8:#x}", value);
        error!("error");
    }
}
