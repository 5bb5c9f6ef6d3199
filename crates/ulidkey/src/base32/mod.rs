mod crockford;
mod error;
mod formatter;

pub use crockford::{ALPHABET, LOOKUP, NO_VALUE, decode_base32, encode_base32};
pub use error::*;
pub use formatter::*;

/// Returns `true` if `input` decodes to a ULID.
///
/// ```
/// assert!(ulidkey::is_valid("01ARZ3NDEKTSV4RRFFQ69G5FAV"));
/// assert!(!ulidkey::is_valid("01ARZ3NDEKTSV4RRFFQ69G5FAU"));
/// assert!(!ulidkey::is_valid("ZZZZZZZZZZZZZZZZZZZZZZZZZZ"));
/// ```
#[must_use]
pub fn is_valid(input: impl AsRef<[u8]>) -> bool {
    decode_base32(input.as_ref()).is_ok()
}
