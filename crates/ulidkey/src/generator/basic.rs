#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Bytes, GenerateError, RandSource, TimeSource, ULID_LEN, Ulid};

/// A stateless ULID generator over a clock and a secure random source.
///
/// Each call reads the clock once and draws 80 fresh random bits. Nothing is
/// carried between calls, so two ULIDs created in the same millisecond are
/// ordered only by their random fields.
///
/// ## Features
/// - ✅ Thread-safe whenever `T` and `R` are
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered across milliseconds
/// - ❌ Not monotonic within a millisecond
///
/// # Example
/// ```
/// use ulidkey::{OsRandom, SystemClock, UlidGenerator};
///
/// let generator = UlidGenerator::new(SystemClock, OsRandom);
/// let id = generator.try_generate().unwrap();
/// assert!(id.timestamp_ms() > 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UlidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    time: T,
    rng: R,
}

impl<T, R> UlidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`UlidGenerator`] with the provided time source and RNG.
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a new ULID.
    ///
    /// The current Unix time in milliseconds is truncated to 48 bits and
    /// written big-endian into bytes 0..6; bytes 6..16 come from the random
    /// source. Timestamps past the 48-bit range (around the year 10889) wrap
    /// silently.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::Clock`] if the time source fails
    /// - [`GenerateError::Entropy`] if the random source fails
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_generate(&self) -> Result<Ulid, GenerateError> {
        let millis = self.time.current_millis()?;

        let mut bytes: Bytes = [0; ULID_LEN];
        let (timestamp, random) = bytes.split_at_mut(Ulid::TIMESTAMP_LEN);
        // Low 48 bits of the big-endian u64
        timestamp.copy_from_slice(&millis.to_be_bytes()[8 - Ulid::TIMESTAMP_LEN..]);
        self.rng.fill_bytes(random)?;

        Ok(Ulid::from_bytes(bytes))
    }
}

cfg_std! {
    use crate::{OsRandom, SystemClock};

    impl UlidGenerator<SystemClock, OsRandom> {
        /// A generator over the system clock and the OS random source.
        #[must_use]
        pub const fn system() -> Self {
            Self::new(SystemClock, OsRandom)
        }
    }

    /// Generates a ULID from the system clock and the OS random source.
    ///
    /// # Errors
    ///
    /// See [`UlidGenerator::try_generate`].
    ///
    /// # Example
    /// ```
    /// let a = ulidkey::generate().unwrap();
    /// let b = ulidkey::generate().unwrap();
    /// assert_ne!(a, b);
    /// ```
    pub fn generate() -> Result<Ulid, GenerateError> {
        UlidGenerator::system().try_generate()
    }

    impl Ulid {
        /// Generates a new ULID. Shorthand for [`generate`].
        ///
        /// # Errors
        ///
        /// See [`UlidGenerator::try_generate`].
        pub fn new() -> Result<Self, GenerateError> {
            generate()
        }
    }
}
