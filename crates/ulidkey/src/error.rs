use crate::{DecodeError, GenerateError};

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `ulidkey` can produce.
///
/// Decoding and generation have their own narrower error types
/// ([`DecodeError`], [`GenerateError`]); this enum wraps them for callers that
/// handle every failure in one place, and adds the binary receive failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input text is not a canonical ULID.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The clock or random source failed while generating.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// A raw byte buffer did not hold exactly 16 bytes.
    #[error("invalid byte length for ulid: expected {expected} bytes, got {actual}")]
    InvalidByteLength { actual: usize, expected: usize },
}
