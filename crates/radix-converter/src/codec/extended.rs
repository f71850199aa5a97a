//! Extended-precision conversion over `num_bigint::BigUint`.
//!
//! Values cross this boundary as decimal digit strings so no native width
//! limits what can be represented.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::codec::digits::{Magnitude, decode_digits, encode_digits};
use crate::error::{DecodeError, EncodeError};
use crate::model::{Alphabet, Standard};
use crate::validate::{validate_decimal, validate_encoded};

impl Magnitude for BigUint {
    #[inline]
    fn zero() -> Self {
        <BigUint as Zero>::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn div_rem_small(&mut self, base: u32) -> usize {
        let rem = (&*self % base).to_usize();
        *self /= base;
        // The remainder is below `base`, so it always fits.
        rem.unwrap_or_default()
    }

    fn checked_mul_add(self, base: u32, digit: usize) -> Option<Self> {
        Some(self * base + BigUint::from(digit))
    }
}

/// Encodes a big integer.
pub fn encode(value: BigUint, alphabet: &Alphabet) -> String {
    encode_digits(value, alphabet)
}

/// Decodes an encoded string to a big integer.
pub fn decode(text: &str, alphabet: &Alphabet) -> Result<BigUint, DecodeError> {
    validate_encoded(text)?;
    Ok(decode_digits::<BigUint>(text, alphabet)?)
}

/// Parses decimal text into a big integer.
pub fn parse_decimal(text: &str) -> Result<BigUint, EncodeError> {
    validate_decimal(text)?;
    decode_digits::<BigUint>(text, Standard::Decimal.alphabet()).map_err(|_| {
        EncodeError::InvalidInput {
            value: text.to_string(),
        }
    })
}

/// Encodes decimal text of any magnitude.
pub fn encode_decimal(text: &str, alphabet: &Alphabet) -> Result<String, EncodeError> {
    let value = parse_decimal(text)?;
    Ok(encode(value, alphabet))
}

/// Decodes an encoded string to decimal text of any magnitude.
pub fn decode_decimal(text: &str, alphabet: &Alphabet) -> Result<String, DecodeError> {
    decode(text, alphabet).map(|n| n.to_str_radix(10))
}
