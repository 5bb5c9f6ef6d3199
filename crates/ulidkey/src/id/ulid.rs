use crate::{DecodeError, Error, UlidString, cmp, decode_base32, encode_base32};
use core::{cmp::Ordering, fmt, str::FromStr};

/// Size of the binary form in bytes.
pub const ULID_LEN: usize = 16;

/// Size of the canonical text form in characters.
pub const ULID_ENCODED_LEN: usize = 26;

/// The binary form of a ULID: big-endian, timestamp first.
pub type Bytes = [u8; ULID_LEN];

/// A 128-bit, lexicographically sortable identifier.
///
/// ```text
///  Byte:   0                 5 6                          15
///          +-------------------+----------------------------+
///  Field:  | timestamp (48)    | random (80)                |
///          +-------------------+----------------------------+
///          |<-- MSB ---------- 128 bits ------------ LSB -->|
/// ```
///
/// Storage characteristics:
/// - Fixed width: 16 bytes, no length prefix or terminator
/// - Representation: big-endian binary, so byte order is numeric order and
///   numeric order is chronological-then-random order
/// - Immutable and `Copy`
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Ulid {
    bytes: Bytes,
}

impl Ulid {
    pub const TIMESTAMP_BITS: u32 = 48;
    pub const RANDOM_BITS: u32 = 80;

    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const RANDOM_MASK: u128 = (1 << Self::RANDOM_BITS) - 1;

    /// Byte length of the timestamp field.
    pub const TIMESTAMP_LEN: usize = 6;

    /// The all-zero ULID, `00000000000000000000000000`.
    pub const NIL: Self = Self::from_bytes([0; ULID_LEN]);

    /// The largest ULID, `7ZZZZZZZZZZZZZZZZZZZZZZZZZ`.
    pub const MAX: Self = Self::from_bytes([0xFF; ULID_LEN]);

    #[inline(always)]
    #[must_use]
    pub const fn from_bytes(bytes: Bytes) -> Self {
        Self { bytes }
    }

    #[inline(always)]
    #[must_use]
    pub const fn as_bytes(&self) -> &Bytes {
        &self.bytes
    }

    #[inline(always)]
    #[must_use]
    pub const fn to_bytes(self) -> Bytes {
        self.bytes
    }

    #[inline(always)]
    #[must_use]
    pub const fn from_u128(raw: u128) -> Self {
        Self::from_bytes(raw.to_be_bytes())
    }

    #[inline(always)]
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.bytes)
    }

    /// Builds a ULID from a raw byte buffer, as received from the wire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidByteLength`] unless `bytes` is exactly 16 bytes
    /// long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: Bytes = bytes.try_into().map_err(|_| Error::InvalidByteLength {
            actual: bytes.len(),
            expected: ULID_LEN,
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Packs a timestamp (milliseconds since the Unix epoch) and a random
    /// payload. Bits above 48 and 80 respectively are discarded.
    #[must_use]
    pub const fn from_components(timestamp_ms: u64, random: u128) -> Self {
        let t = ((timestamp_ms & Self::TIMESTAMP_MASK) as u128) << Self::RANDOM_BITS;
        let r = random & Self::RANDOM_MASK;
        Self::from_u128(t | r)
    }

    /// The smallest ULID for the given millisecond, with the random field
    /// zeroed. Useful as a lower bound for time range scans.
    #[must_use]
    pub const fn from_timestamp(timestamp_ms: u64) -> Self {
        Self::from_components(timestamp_ms, 0)
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        (self.to_u128() >> Self::RANDOM_BITS) as u64
    }

    /// The 80-bit random field.
    #[must_use]
    pub const fn random(&self) -> u128 {
        self.to_u128() & Self::RANDOM_MASK
    }

    /// Encodes into the canonical 26-character uppercase form.
    #[must_use]
    pub fn encode(&self) -> UlidString {
        let mut buf = [0_u8; ULID_ENCODED_LEN];
        encode_base32(&self.bytes, &mut buf);
        UlidString::from_buf(buf)
    }

    /// Encodes into a caller-provided buffer and returns it as `&str`.
    pub fn encode_to_buf<'buf>(&self, buf: &'buf mut [u8; ULID_ENCODED_LEN]) -> &'buf str {
        encode_base32(&self.bytes, buf);
        // SAFETY: `encode_base32` fills every byte from the ASCII alphabet.
        unsafe { core::str::from_utf8_unchecked(buf) }
    }

    /// Decodes the 26-character text form. Case-insensitive.
    ///
    /// # Errors
    ///
    /// See [`DecodeError`] for the length, character, and overflow checks.
    ///
    /// # Example
    ///
    /// ```
    /// use ulidkey::{DecodeError, Ulid};
    ///
    /// assert_eq!(Ulid::decode("7zzzzzzzzzzzzzzzzzzzzzzzzz"), Ok(Ulid::MAX));
    /// assert_eq!(
    ///     Ulid::decode("80000000000000000000000000"),
    ///     Err(DecodeError::Overflow)
    /// );
    /// ```
    pub fn decode(input: impl AsRef<[u8]>) -> Result<Self, DecodeError> {
        decode_base32(input.as_ref()).map(Self::from_bytes)
    }
}

impl Ord for Ulid {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cmp::compare(self, other)
    }
}

impl PartialOrd for Ulid {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

impl fmt::Debug for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ulid").field(&self.encode().as_str()).finish()
    }
}

impl FromStr for Ulid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<&[u8]> for Ulid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(bytes)
    }
}

impl From<Bytes> for Ulid {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Ulid> for Bytes {
    fn from(ulid: Ulid) -> Self {
        ulid.to_bytes()
    }
}

impl From<u128> for Ulid {
    fn from(raw: u128) -> Self {
        Self::from_u128(raw)
    }
}

impl From<Ulid> for u128 {
    fn from(ulid: Ulid) -> Self {
        ulid.to_u128()
    }
}

impl AsRef<[u8]> for Ulid {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
