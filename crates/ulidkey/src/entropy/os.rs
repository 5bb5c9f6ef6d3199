use crate::{GenerateError, RandSource};
use rand::{RngCore, TryRngCore, rng, rngs::OsRng};

/// A `RandSource` that reads the operating system's CSPRNG
/// (`getrandom(2)` and friends) on every call.
///
/// This is the only source here that can actually fail, and it reports the
/// failure as [`GenerateError::Entropy`] instead of panicking.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), GenerateError> {
        OsRng.try_fill_bytes(dest).map_err(|_err| {
            warn_event!(error = %_err, "os random source failed");
            GenerateError::Entropy
        })
    }
}

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// periodically reseeded from the OS.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free. This type does **not** store the RNG itself; it accesses
/// the thread-local generator on each call, so it is `Send + Sync`.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), GenerateError> {
        rng().fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fills<R: RandSource>(source: R) {
        let mut a = [0_u8; 10];
        let mut b = [0_u8; 10];
        source.fill_bytes(&mut a).unwrap();
        source.fill_bytes(&mut b).unwrap();
        // 80 random bits; a repeat or an all-zero draw means the source is broken.
        assert_ne!(a, b);
        assert_ne!(a, [0; 10]);
    }

    #[test]
    fn os_random_fills_buffers() {
        assert_fills(OsRandom);
    }

    #[test]
    fn thread_random_fills_buffers() {
        assert_fills(ThreadRandom);
    }

    #[test]
    fn sources_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OsRandom>();
        assert_send_sync::<ThreadRandom>();
    }
}
