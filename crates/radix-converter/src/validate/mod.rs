//! Input validation for the codec.
//!
//! Checks here run before any digit work so that a conversion either
//! succeeds completely or fails without producing output.

use crate::error::{DecodeError, EncodeError, Error};
use crate::limits::NATIVE_MAX;
use crate::model::PrecisionMode;

/// Validates decimal text supplied for encoding.
///
/// The text must be one or more ASCII digits. Signs are rejected since
/// negative values are never valid. Length is not limited; the native
/// ceiling is enforced while parsing.
pub fn validate_decimal(text: &str) -> Result<(), EncodeError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodeError::InvalidInput {
            value: text.to_string(),
        });
    }
    Ok(())
}

/// Validates that a native integer is within the native ceiling.
pub fn validate_native(value: u64) -> Result<(), EncodeError> {
    if value > NATIVE_MAX {
        return Err(EncodeError::ValueTooLarge {
            value: value.to_string(),
            max: NATIVE_MAX,
        });
    }
    Ok(())
}

/// Validates the shape of an encoded string before decoding.
///
/// Symbol membership is checked during decoding, where the offending
/// character's index is known.
pub fn validate_encoded(text: &str) -> Result<(), DecodeError> {
    if text.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    Ok(())
}

/// Validates that `mode` can run in this build.
pub fn validate_mode(mode: PrecisionMode) -> Result<(), Error> {
    if !mode.is_available() {
        return Err(Error::UnsupportedPrecisionMode);
    }
    Ok(())
}
