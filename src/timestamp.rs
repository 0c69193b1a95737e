//! Millisecond timestamps.
//!
//! The application installs one function returning milliseconds since some epoch.
//! Drivers read it through a [`Clock`], which lets tests substitute their own time.

use core::cell::Cell;

use critical_section::Mutex;

/// Timestamp that has not been captured.
pub const TIMESTAMP_INVALID: u64 = u64::MAX;

/// Source of millisecond timestamps.
pub type TimestampFn = fn() -> u64;

static TIMESTAMP_FN: Mutex<Cell<Option<TimestampFn>>> = Mutex::new(Cell::new(None));

/// Installs the process-wide timestamp source, replacing any earlier one.
///
/// # Errors
///
/// Never fails; the `Result` keeps the signature uniform with the rest of the crate.
pub fn timestamp_function_set(function: TimestampFn) -> Result<(), crate::Status> {
    critical_section::with(|cs| TIMESTAMP_FN.borrow(cs).set(Some(function)));
    Ok(())
}

/// Current time in milliseconds, `0` when no source is installed.
#[must_use]
pub fn timestamp_get() -> u64 {
    critical_section::with(|cs| TIMESTAMP_FN.borrow(cs).get()).map_or(0, |function| function())
}

/// Time as seen by a driver.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch.
    fn now_ms(&mut self) -> u64;
}

/// [`Clock`] backed by [`timestamp_get`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&mut self) -> u64 {
        timestamp_get()
    }
}

impl<F> Clock for F
where
    F: FnMut() -> u64,
{
    fn now_ms(&mut self) -> u64 {
        self()
    }
}
