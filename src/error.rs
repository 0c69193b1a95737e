//! Status codes and the process-wide sticky error log.
//!
//! Every fallible operation in this crate returns `Result<_, Status>`. A [`Status`] is a
//! bit set, so sub-results of a batch operation can be OR-ed together and reported once
//! the whole batch has run. [`ErrorLog`] keeps every error reported through
//! [`ErrorLog::check`] until it is drained with [`ErrorLog::clear`].

use core::cell::Cell;
use core::fmt;

use bitflags::bitflags;
use critical_section::Mutex;
use portable_atomic::{AtomicU32, Ordering};

use crate::log::{error, warn};

bitflags! {
    /// Error bit set. The empty set is success.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Status: u32 {
        /// Impossible or corrupted state reached, or the bus reported a failure.
        const INTERNAL = 1 << 0;
        /// Device did not identify as the expected part.
        const NOT_FOUND = 1 << 2;
        /// Requested value exceeds what the hardware can do.
        const NOT_SUPPORTED = 1 << 3;
        /// Argument out of range.
        const INVALID_PARAM = 1 << 4;
        /// Precondition violated, e.g. the sensor is not asleep.
        const INVALID_STATE = 1 << 5;
        /// Buffer length not accepted by the transport.
        const INVALID_LENGTH = 1 << 6;
        /// Operation timed out.
        const TIMEOUT = 1 << 10;
        /// Missing output buffer.
        const NULL = 1 << 11;
        /// Resource is held by another context.
        const BUSY = 1 << 14;
        /// Operation or bus type is not implemented.
        const NOT_IMPLEMENTED = 1 << 16;
        /// Self-test response was outside the expected band.
        const SELFTEST = 1 << 17;
        /// Sensor has not been initialized.
        const NOT_INITIALIZED = 1 << 19;
        /// Classification overlay: the error cannot be tolerated.
        const FATAL = 1 << 31;
    }
}

impl Status {
    /// Success.
    pub const SUCCESS: Self = Self::empty();

    /// `Ok(())` when no bit is set, the status itself otherwise.
    ///
    /// # Errors
    ///
    /// Returns `self` when it is not empty.
    pub fn into_result(self) -> Result<(), Status> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Folds the error of `result` into `self` and hands back the success value.
    pub fn merge<T>(&mut self, result: Result<T, Status>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(status) => {
                *self |= status;
                None
            }
        }
    }

    /// Status carried by `result`, empty on success.
    #[must_use]
    pub fn of<T>(result: &Result<T, Status>) -> Status {
        match result {
            Ok(_) => Status::SUCCESS,
            Err(status) => *status,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("SUCCESS");
        }
        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt-03")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Status({=u32:#x})", self.bits());
    }
}

/// How [`ErrorLog::check`] classified an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Severity {
    /// Nothing to report.
    Success,
    /// Every set bit was covered by the non-fatal mask.
    Warning,
    /// At least one set bit was not tolerated. The caller is expected to reset.
    Fatal,
}

/// Callback invoked for every reported error with `(error, fatal, file, line)`.
pub type ErrorCallback = fn(Status, bool, &'static str, u32);

/// Sticky, OR-accumulated error mask with an optional observer.
pub struct ErrorLog {
    errors: AtomicU32,
    callback: Mutex<Cell<Option<ErrorCallback>>>,
}

impl ErrorLog {
    /// Empty log without callback.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: AtomicU32::new(0),
            callback: Mutex::new(Cell::new(None)),
        }
    }

    /// Records `error`, logs it and notifies the callback.
    ///
    /// Bits outside `non_fatal_mask` make the error fatal.
    pub fn check(
        &self,
        error: Status,
        non_fatal_mask: Status,
        file: &'static str,
        line: u32,
    ) -> Severity {
        if error.is_empty() {
            return Severity::Success;
        }
        self.errors.fetch_or(error.bits(), Ordering::AcqRel);

        let fatal = !(error & !non_fatal_mask).is_empty();
        let file = file_name(file);
        if fatal {
            error!("{}:{} FATAL: {}", file, line, error);
        } else {
            warn!("{}:{} WARNING: {}", file, line, error);
        }

        let callback = critical_section::with(|cs| self.callback.borrow(cs).get());
        if let Some(callback) = callback {
            callback(error, fatal, file, line);
        }

        if fatal { Severity::Fatal } else { Severity::Warning }
    }

    /// Returns every error recorded since the previous call and resets the log.
    pub fn clear(&self) -> Status {
        Status::from_bits_retain(self.errors.swap(0, Ordering::AcqRel))
    }

    /// Errors recorded so far, without resetting.
    #[must_use]
    pub fn peek(&self) -> Status {
        Status::from_bits_retain(self.errors.load(Ordering::Acquire))
    }

    /// Replaces the error callback. `None` removes it.
    pub fn callback_set(&self, callback: Option<ErrorCallback>) {
        critical_section::with(|cs| self.callback.borrow(cs).set(callback));
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide error log used by [`error_check!`](crate::error_check).
pub static ERRORS: ErrorLog = ErrorLog::new();

/// Reports an error to [`ERRORS`] with the caller's source location.
///
/// ```
/// use sensor_hal::{error_check, Severity, Status};
///
/// let severity = error_check!(Status::NOT_SUPPORTED, Status::NOT_SUPPORTED);
/// assert_eq!(severity, Severity::Warning);
/// ```
#[macro_export]
macro_rules! error_check {
    ($error:expr, $non_fatal_mask:expr) => {
        $crate::error::ERRORS.check($error, $non_fatal_mask, file!(), line!())
    };
}

/// Strips directories from a `file!()` path, accepting both separators.
fn file_name(path: &'static str) -> &'static str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portable_atomic::AtomicUsize;

    #[test]
    fn success_is_not_recorded() {
        let log = ErrorLog::new();
        assert_eq!(
            log.check(Status::SUCCESS, Status::SUCCESS, file!(), line!()),
            Severity::Success
        );
        assert_eq!(log.clear(), Status::SUCCESS);
    }

    #[test]
    fn errors_accumulate_until_cleared() {
        let log = ErrorLog::new();
        log.check(Status::NOT_SUPPORTED, Status::all(), file!(), line!());
        log.check(Status::INVALID_STATE, Status::all(), file!(), line!());
        assert_eq!(log.peek(), Status::NOT_SUPPORTED | Status::INVALID_STATE);
        assert_eq!(log.clear(), Status::NOT_SUPPORTED | Status::INVALID_STATE);
        assert_eq!(log.clear(), Status::SUCCESS);
    }

    #[test]
    fn bits_outside_mask_are_fatal() {
        let log = ErrorLog::new();
        let mask = Status::NOT_SUPPORTED;
        assert_eq!(
            log.check(Status::NOT_SUPPORTED, mask, file!(), line!()),
            Severity::Warning
        );
        assert_eq!(
            log.check(Status::NOT_SUPPORTED | Status::INTERNAL, mask, file!(), line!()),
            Severity::Fatal
        );
    }

    static CALLS: AtomicUsize = AtomicUsize::new(0);
    static LAST_FATAL: AtomicUsize = AtomicUsize::new(0);

    fn record(_error: Status, fatal: bool, file: &'static str, _line: u32) {
        assert!(!file.contains('/'));
        CALLS.fetch_add(1, Ordering::SeqCst);
        LAST_FATAL.store(usize::from(fatal), Ordering::SeqCst);
    }

    #[test]
    fn callback_receives_classification() {
        let log = ErrorLog::new();
        log.callback_set(Some(record));
        log.check(Status::SELFTEST, Status::SUCCESS, "src/lis2dh12/mod.rs", 10);
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(LAST_FATAL.load(Ordering::SeqCst), 1);

        log.callback_set(None);
        log.check(Status::SELFTEST, Status::SUCCESS, file!(), line!());
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(file_name("src/lis2dh12/mod.rs"), "mod.rs");
        assert_eq!(file_name("C:\\fw\\main.rs"), "main.rs");
        assert_eq!(file_name("main.rs"), "main.rs");
    }

    #[test]
    fn merge_collects_errors() {
        let mut status = Status::SUCCESS;
        assert_eq!(status.merge(Ok::<u8, Status>(3)), Some(3));
        assert_eq!(status.merge::<u8>(Err(Status::INTERNAL)), None);
        assert_eq!(status.merge::<u8>(Err(Status::SELFTEST)), None);
        assert_eq!(status, Status::INTERNAL | Status::SELFTEST);
        assert_eq!(status.into_result(), Err(Status::INTERNAL | Status::SELFTEST));
    }

    #[test]
    fn display_lists_flag_names() {
        assert_eq!(Status::SUCCESS.to_string(), "SUCCESS");
        assert_eq!(
            (Status::INTERNAL | Status::SELFTEST).to_string(),
            "INTERNAL | SELFTEST"
        );
    }
}
