/// Errors produced when decoding the 26-character text form of a ULID.
///
/// Checks run in a fixed order: length first, then every character, then the
/// 128-bit overflow check on the leading character. The first failing check
/// is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input was not exactly [`ULID_ENCODED_LEN`](crate::ULID_ENCODED_LEN)
    /// bytes long.
    #[error("invalid ulid: incorrect length {actual} (expected {expected})")]
    InvalidLength { actual: usize, expected: usize },

    /// A byte outside the Crockford alphabet. `position` is the zero-based
    /// index of the first such byte.
    #[error("invalid ulid: bad character {byte:#04x} at position {position}")]
    InvalidChar { byte: u8, position: usize },

    /// The leading character was above `'7'`, which would set bits beyond
    /// the 128-bit value.
    #[error("invalid ulid: value overflows 128 bit encoding")]
    Overflow,
}
