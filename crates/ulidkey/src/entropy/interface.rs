use crate::GenerateError;

/// A cryptographically secure source of random bytes.
///
/// This abstraction lets a host plug in its own strong random source, or a
/// fixed source in tests.
///
/// # Example
/// ```
/// use ulidkey::{GenerateError, RandSource};
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), GenerateError> {
///         dest.fill(0xAB);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0_u8; 4];
/// FixedRand.fill_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [0xAB; 4]);
/// ```
pub trait RandSource {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Entropy`] if the source is unavailable. `dest`
    /// must not be used in that case.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), GenerateError>;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), GenerateError> {
        (**self).fill_bytes(dest)
    }
}
