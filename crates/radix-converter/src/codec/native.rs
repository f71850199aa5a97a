//! Native-precision conversion over `u64`, bounded by [`NATIVE_MAX`].

use crate::codec::digits::{DigitError, Magnitude, decode_digits, encode_digits};
use crate::error::{DecodeError, EncodeError};
use crate::limits::NATIVE_MAX;
use crate::model::{Alphabet, Standard};
use crate::validate::{validate_decimal, validate_encoded, validate_native};

impl Magnitude for u64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0
    }

    #[inline]
    fn div_rem_small(&mut self, base: u32) -> usize {
        let base = u64::from(base);
        let rem = *self % base;
        *self /= base;
        rem as usize
    }

    /// Fails past [`NATIVE_MAX`], not just past `u64::MAX`.
    #[inline]
    fn checked_mul_add(self, base: u32, digit: usize) -> Option<Self> {
        self.checked_mul(u64::from(base))?
            .checked_add(digit as u64)
            .filter(|n| *n <= NATIVE_MAX)
    }
}

/// Encodes a native integer.
///
/// Values above [`NATIVE_MAX`] are rejected before any digit is produced.
pub fn encode(value: u64, alphabet: &Alphabet) -> Result<String, EncodeError> {
    validate_native(value)?;
    Ok(encode_digits(value, alphabet))
}

/// Decodes an encoded string to a native integer.
///
/// Fails with [`DecodeError::ValueTooLarge`] instead of wrapping when the
/// result would exceed [`NATIVE_MAX`].
pub fn decode(text: &str, alphabet: &Alphabet) -> Result<u64, DecodeError> {
    validate_encoded(text)?;
    Ok(decode_digits::<u64>(text, alphabet)?)
}

/// Parses decimal text into a native integer, with an exact range check.
pub fn parse_decimal(text: &str) -> Result<u64, EncodeError> {
    validate_decimal(text)?;
    decode_digits::<u64>(text, Standard::Decimal.alphabet()).map_err(|e| match e {
        DigitError::UnknownSymbol { .. } => EncodeError::InvalidInput {
            value: text.to_string(),
        },
        DigitError::Overflow => EncodeError::ValueTooLarge {
            value: text.to_string(),
            max: NATIVE_MAX,
        },
    })
}
