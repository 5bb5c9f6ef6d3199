use crate::{GenerateError, TimeSource};
use std::time::{SystemTime, UNIX_EPOCH};

/// A [`TimeSource`] backed by [`SystemTime`].
///
/// Reads the realtime clock on every call. A clock set before the Unix epoch
/// is reported as [`GenerateError::Clock`].
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> Result<u64, GenerateError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_err| {
                warn_event!(error = %_err, "system clock is before the unix epoch");
                GenerateError::Clock
            })?;
        // The generator keeps only the low 48 bits.
        Ok(elapsed.as_millis() as u64)
    }
}
