//! Digit extraction and reconstruction shared by both precision modes.
//!
//! The engine is generic over [`Magnitude`], the small set of integer
//! operations positional conversion needs. Native and extended precision
//! differ only in the type they plug in.

use crate::error::DecodeError;
use crate::limits::NATIVE_MAX;
use crate::model::Alphabet;

/// Integer operations needed for positional conversion.
///
/// The base is always small (it is an alphabet length), so only the value
/// itself needs the wide representation.
pub(crate) trait Magnitude: Sized {
    /// Returns zero.
    fn zero() -> Self;

    /// Returns true if the value is zero.
    fn is_zero(&self) -> bool;

    /// Divides the value by `base` in place and returns the remainder.
    fn div_rem_small(&mut self, base: u32) -> usize;

    /// Returns `self * base + digit`, or `None` if the result leaves the
    /// representable range.
    fn checked_mul_add(self, base: u32, digit: usize) -> Option<Self>;
}

/// Failure inside the digit engine, mapped to encode or decode errors by
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DigitError {
    UnknownSymbol { symbol: char, index: usize },
    Overflow,
}

impl From<DigitError> for DecodeError {
    fn from(e: DigitError) -> Self {
        match e {
            DigitError::UnknownSymbol { symbol, index } => {
                DecodeError::UnknownSymbol { symbol, index }
            }
            // Only bounded magnitudes overflow, and the only bounded one is native.
            DigitError::Overflow => DecodeError::ValueTooLarge { max: NATIVE_MAX },
        }
    }
}

/// Returns the alphabet length as a divisor.
#[inline]
fn radix(alphabet: &Alphabet) -> u32 {
    // Alphabet construction caps the length at MAX_ALPHABET_LEN.
    alphabet.base() as u32
}

/// Writes `value` in the alphabet, most significant digit first.
///
/// Zero becomes the single zero symbol; no other output has leading zero
/// symbols.
pub(crate) fn encode_digits<M: Magnitude>(mut value: M, alphabet: &Alphabet) -> String {
    let base = radix(alphabet);
    let mut reversed = Vec::new();
    loop {
        let digit = value.div_rem_small(base);
        reversed.push(alphabet.symbol_at(digit));
        if value.is_zero() {
            break;
        }
    }
    reversed.iter().rev().collect()
}

/// Reads `text` as a number in the alphabet.
///
/// Equivalent to summing `digit * base^position` from the last character,
/// evaluated most significant first so intermediate values never exceed
/// the final one.
pub(crate) fn decode_digits<M: Magnitude>(
    text: &str,
    alphabet: &Alphabet,
) -> Result<M, DigitError> {
    let base = radix(alphabet);
    let mut number = M::zero();
    for (index, symbol) in text.chars().enumerate() {
        let digit = alphabet
            .digit_of(symbol)
            .ok_or(DigitError::UnknownSymbol { symbol, index })?;
        number = number
            .checked_mul_add(base, digit)
            .ok_or(DigitError::Overflow)?;
    }
    Ok(number)
}
