use crate::GenerateError;

/// A wall-clock source returning milliseconds since the Unix epoch.
///
/// This is the seam through which a host supplies its clock. Implementations
/// must be safe to call from any thread the host generates on.
///
/// # Example
///
/// ```
/// use ulidkey::{GenerateError, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> Result<u64, GenerateError> {
///         Ok(1234)
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), Ok(1234));
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since 1970-01-01 UTC.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Clock`] if the clock cannot be read.
    fn current_millis(&self) -> Result<u64, GenerateError>;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> Result<u64, GenerateError> {
        (**self).current_millis()
    }
}
