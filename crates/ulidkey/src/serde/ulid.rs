use crate::{ULID_LEN, Ulid};
use core::fmt;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Human-readable formats get the 26-character text; binary formats get the
/// 16 raw bytes.
impl Serialize for Ulid {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(self.encode().as_str())
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Ulid {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            d.deserialize_str(UlidVisitor)
        } else {
            d.deserialize_bytes(UlidVisitor)
        }
    }
}

struct UlidVisitor;

impl<'de> de::Visitor<'de> for UlidVisitor {
    type Value = Ulid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a Crockford base32 string or 16 bytes")
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ulid::decode(v).map_err(de::Error::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ulid::try_from_slice(v).map_err(|_| de::Error::invalid_length(v.len(), &self))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut bytes = [0_u8; ULID_LEN];
        for (i, slot) in bytes.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(ULID_LEN + 1, &self));
        }
        Ok(Ulid::from_bytes(bytes))
    }
}

/// Serializes a [`Ulid`] as its native `u128`.
///
/// Every `u128` is a valid ULID, so deserialization cannot overflow.
pub mod as_native_ulid {
    use super::*;

    pub fn serialize<S: Serializer>(id: &Ulid, s: S) -> Result<S::Ok, S::Error> {
        id.to_u128().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Ulid, D::Error> {
        u128::deserialize(d).map(Ulid::from_u128)
    }
}

/// Serializes a [`Ulid`] as its base32 text regardless of format.
pub mod as_base32_ulid {
    use super::*;

    pub fn serialize<S: Serializer>(id: &Ulid, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Ulid, D::Error> {
        d.deserialize_str(UlidVisitor)
    }
}
