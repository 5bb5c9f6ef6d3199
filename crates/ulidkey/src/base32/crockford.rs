use crate::{Bytes, DecodeError, ULID_ENCODED_LEN, ULID_LEN};

/// The Crockford Base32 alphabet: digits, then letters without `I`, `L`, `O`
/// and `U`.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Sentinel stored in [`LOOKUP`] for bytes outside the alphabet.
pub const NO_VALUE: u8 = 0xFF;

const BITS_PER_CHAR: usize = 5;
const MASK: u16 = 0x1F;

/// Largest value the leading character may decode to. Only the low 3 bits of
/// the first character fit in 128 bits (26 * 5 = 130).
const MAX_LEADING_VALUE: u8 = 0b111;

/// Byte to 5-bit value lookup for Crockford base32 decoding. Upper and lower
/// case letters decode to the same value; every other byte is [`NO_VALUE`].
pub const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[c.to_ascii_lowercase() as usize] = i;
        }
        i += 1;
    }
    lut
};

/// Encodes 16 big-endian bytes into 26 uppercase Crockford characters.
///
/// The accumulator starts with the 2 unused high bits already counted, so the
/// first character carries only the top 3 bits of byte 0. With that offset the
/// 48 timestamp bits land exactly in characters 0..10 and the 80 random bits
/// in characters 10..26.
#[inline]
pub fn encode_base32(input: &Bytes, out: &mut [u8; ULID_ENCODED_LEN]) {
    let mut bits = ULID_ENCODED_LEN * BITS_PER_CHAR - ULID_LEN * 8;
    let mut acc = 0_u16;
    let mut pos = 0;

    for &b in input {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            out[pos] = ALPHABET[((acc >> bits) & MASK) as usize];
            pos += 1;
        }
    }
}

/// Decodes 26 Crockford characters into 16 big-endian bytes.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if the input is not 26 bytes long
/// - [`DecodeError::InvalidChar`] for the first byte outside the alphabet
/// - [`DecodeError::Overflow`] if the first character is above `'7'`
#[inline]
pub fn decode_base32(input: &[u8]) -> Result<Bytes, DecodeError> {
    if input.len() != ULID_ENCODED_LEN {
        return Err(DecodeError::InvalidLength {
            actual: input.len(),
            expected: ULID_ENCODED_LEN,
        });
    }

    // Shifting 26 groups into a u128 drops the 2 highest bits of the first
    // group, which the overflow check below requires to be zero anyway.
    let mut acc = 0_u128;
    for (position, &byte) in input.iter().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(DecodeError::InvalidChar { byte, position });
        }
        acc = (acc << BITS_PER_CHAR) | u128::from(val);
    }

    if LOOKUP[input[0] as usize] > MAX_LEADING_VALUE {
        return Err(DecodeError::Overflow);
    }

    Ok(acc.to_be_bytes())
}
