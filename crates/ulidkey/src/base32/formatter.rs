use crate::ULID_ENCODED_LEN;
use core::fmt;

/// The canonical 26-character text form of a ULID, held on the stack.
///
/// Returned by [`Ulid::encode`](crate::Ulid::encode). It derefs to `&str` and
/// implements [`fmt::Display`], so it can be written or compared without a
/// heap allocation:
///
/// ```
/// use ulidkey::Ulid;
///
/// let text = Ulid::MAX.encode();
/// assert_eq!(text, "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
/// assert_eq!(text.len(), 26);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UlidString {
    buf: [u8; ULID_ENCODED_LEN],
}

impl UlidString {
    pub(crate) const fn from_buf(buf: [u8; ULID_ENCODED_LEN]) -> Self {
        Self { buf }
    }

    /// Returns a `&str` view of the encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `buf` is only ever filled by `encode_base32`, which writes
        // bytes from the ASCII alphabet.
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns the raw ASCII bytes of the encoding.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ULID_ENCODED_LEN] {
        &self.buf
    }

    /// Consumes the formatter and returns the ASCII buffer.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; ULID_ENCODED_LEN] {
        self.buf
    }
}

impl core::ops::Deref for UlidString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for UlidString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for UlidString {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl fmt::Display for UlidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for UlidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq<str> for UlidString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for UlidString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<UlidString> for &str {
    fn eq(&self, other: &UlidString) -> bool {
        *self == other.as_str()
    }
}

#[cfg(feature = "std")]
impl PartialEq<String> for UlidString {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(feature = "std")]
impl From<UlidString> for String {
    fn from(s: UlidString) -> Self {
        s.as_str().to_owned()
    }
}
