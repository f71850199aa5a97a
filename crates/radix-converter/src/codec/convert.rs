//! Mode-dispatching conversions.
//!
//! These select native or extended precision from an explicit
//! [`PrecisionMode`]; a small value under extended precision still takes
//! the big-integer path and yields the same text as native precision.

use tracing::trace;

use crate::codec::native;
use crate::config::Config;
use crate::error::{DecodeError, EncodeError};
use crate::model::{Alphabet, PrecisionMode, Standard, Value};

/// Encodes decimal text in the given mode.
///
/// In native mode the text must denote a value no larger than
/// [`NATIVE_MAX`](crate::limits::NATIVE_MAX).
pub fn encode_decimal(
    text: &str,
    alphabet: &Alphabet,
    mode: PrecisionMode,
) -> Result<String, EncodeError> {
    trace!(base = alphabet.base(), ?mode, len = text.len(), "encode decimal");
    match mode {
        PrecisionMode::Native => native::encode(native::parse_decimal(text)?, alphabet),
        PrecisionMode::Extended => extended_encode_decimal(text, alphabet),
    }
}

/// Decodes to decimal text in the given mode.
pub fn decode_decimal(
    text: &str,
    alphabet: &Alphabet,
    mode: PrecisionMode,
) -> Result<String, DecodeError> {
    trace!(base = alphabet.base(), ?mode, len = text.len(), "decode decimal");
    match mode {
        PrecisionMode::Native => native::decode(text, alphabet).map(|n| n.to_string()),
        PrecisionMode::Extended => extended_decode_decimal(text, alphabet),
    }
}

/// Encodes a [`Value`] in the given mode.
///
/// [`Value::Int`] is range-checked in native mode and widened in extended
/// mode; [`Value::Text`] must be decimal digits.
pub fn encode_value(
    value: &Value,
    alphabet: &Alphabet,
    mode: PrecisionMode,
) -> Result<String, EncodeError> {
    match (value, mode) {
        (Value::Int(n), PrecisionMode::Native) => {
            trace!(base = alphabet.base(), value = n, "encode native");
            native::encode(*n, alphabet)
        }
        (Value::Int(n), PrecisionMode::Extended) => extended_encode_int(*n, alphabet),
        (Value::Text(text), mode) => encode_decimal(text, alphabet, mode),
    }
}

/// Decodes in the given mode, returning [`Value::Int`] for native
/// precision and [`Value::Text`] (decimal digits) for extended precision.
pub fn decode_value(
    text: &str,
    alphabet: &Alphabet,
    mode: PrecisionMode,
) -> Result<Value, DecodeError> {
    match mode {
        PrecisionMode::Native => {
            trace!(base = alphabet.base(), len = text.len(), "decode native");
            native::decode(text, alphabet).map(Value::Int)
        }
        PrecisionMode::Extended => extended_decode_decimal(text, alphabet).map(Value::Text),
    }
}

/// Encodes using a validated configuration.
pub fn encode_with(value: &Value, config: &Config) -> Result<String, EncodeError> {
    encode_value(value, config.alphabet(), config.mode())
}

/// Decodes using a validated configuration.
pub fn decode_with(text: &str, config: &Config) -> Result<Value, DecodeError> {
    decode_value(text, config.alphabet(), config.mode())
}

/// Encodes in base 62 with native precision.
pub fn encode_default(value: u64) -> Result<String, EncodeError> {
    native::encode(value, Standard::Alphanumeric62.alphabet())
}

/// Decodes base 62 with native precision.
pub fn decode_default(text: &str) -> Result<u64, DecodeError> {
    native::decode(text, Standard::Alphanumeric62.alphabet())
}

#[cfg(feature = "bigint")]
fn extended_encode_int(value: u64, alphabet: &Alphabet) -> Result<String, EncodeError> {
    trace!(base = alphabet.base(), value, "encode extended");
    Ok(crate::codec::extended::encode(value.into(), alphabet))
}

#[cfg(feature = "bigint")]
fn extended_encode_decimal(text: &str, alphabet: &Alphabet) -> Result<String, EncodeError> {
    crate::codec::extended::encode_decimal(text, alphabet)
}

#[cfg(feature = "bigint")]
fn extended_decode_decimal(text: &str, alphabet: &Alphabet) -> Result<String, DecodeError> {
    crate::codec::extended::decode_decimal(text, alphabet)
}

#[cfg(not(feature = "bigint"))]
fn extended_encode_int(_value: u64, _alphabet: &Alphabet) -> Result<String, EncodeError> {
    Err(EncodeError::UnsupportedPrecisionMode)
}

#[cfg(not(feature = "bigint"))]
fn extended_encode_decimal(_text: &str, _alphabet: &Alphabet) -> Result<String, EncodeError> {
    Err(EncodeError::UnsupportedPrecisionMode)
}

#[cfg(not(feature = "bigint"))]
fn extended_decode_decimal(_text: &str, _alphabet: &Alphabet) -> Result<String, DecodeError> {
    Err(DecodeError::UnsupportedPrecisionMode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::NATIVE_MAX;

    fn base62() -> &'static Alphabet {
        Standard::Alphanumeric62.alphabet()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(encode_default(65535).unwrap(), "h31");
        assert_eq!(decode_default("h31").unwrap(), 65535);
    }

    #[test]
    fn test_native_decimal_text() {
        assert_eq!(
            encode_decimal("255", base62(), PrecisionMode::Native).unwrap(),
            "47"
        );
        assert_eq!(
            decode_decimal("47", base62(), PrecisionMode::Native).unwrap(),
            "255"
        );
    }

    #[test]
    fn test_native_rejects_two_pow_63() {
        let result = encode_decimal("9223372036854775808", base62(), PrecisionMode::Native);
        assert!(matches!(result, Err(EncodeError::ValueTooLarge { .. })));

        let result = encode_value(&Value::Int(NATIVE_MAX + 1), base62(), PrecisionMode::Native);
        assert!(matches!(result, Err(EncodeError::ValueTooLarge { .. })));
    }

    #[test]
    fn test_decode_value_shape() {
        assert_eq!(
            decode_value("10", base62(), PrecisionMode::Native).unwrap(),
            Value::Int(62)
        );
    }

    #[test]
    fn test_text_input_is_digits_only() {
        let result = encode_value(&Value::from("4x"), base62(), PrecisionMode::Native);
        assert!(matches!(result, Err(EncodeError::InvalidInput { .. })));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_extended_two_pow_63() {
        let encoded =
            encode_decimal("9223372036854775808", base62(), PrecisionMode::Extended).unwrap();
        assert_eq!(encoded, "aZl8N0y58M8");
        assert_eq!(
            decode_value(&encoded, base62(), PrecisionMode::Extended).unwrap(),
            Value::from("9223372036854775808")
        );
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_extended_int_matches_native() {
        for n in [0u64, 1, 61, 62, 255, 65535, 2147483647, NATIVE_MAX] {
            let native = encode_value(&Value::Int(n), base62(), PrecisionMode::Native).unwrap();
            let extended = encode_value(&Value::Int(n), base62(), PrecisionMode::Extended).unwrap();
            assert_eq!(native, extended, "mismatch for {}", n);
        }
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_extended_accepts_u64_max() {
        let encoded =
            encode_value(&Value::Int(u64::MAX), base62(), PrecisionMode::Extended).unwrap();
        assert_eq!(
            decode_decimal(&encoded, base62(), PrecisionMode::Extended).unwrap(),
            u64::MAX.to_string()
        );
    }

    #[cfg(not(feature = "bigint"))]
    #[test]
    fn test_extended_unsupported() {
        assert_eq!(
            encode_decimal("1", base62(), PrecisionMode::Extended),
            Err(EncodeError::UnsupportedPrecisionMode)
        );
        assert_eq!(
            decode_value("1", base62(), PrecisionMode::Extended),
            Err(DecodeError::UnsupportedPrecisionMode)
        );
    }
}
