//! Stateful facade for chained conversions.
//!
//! Holds a current value and a [`Config`], and replaces the value with the
//! result of each conversion.
//!
//! # Example
//!
//! ```rust
//! use radix_converter::{BINARY, Converter, Value};
//!
//! let mut converter = Converter::new();
//! assert_eq!(converter.encode_value(65535u64).unwrap().to_string(), "h31");
//!
//! converter.set_map(BINARY).unwrap();
//! assert_eq!(converter.decode_value("11111111").unwrap().value(), Some(&Value::Int(255)));
//! ```

use std::fmt;

use tracing::debug;

use crate::codec::{decode_with, encode_with};
use crate::config::Config;
use crate::error::Error;
use crate::model::Value;

/// Current value plus configuration.
///
/// Not synchronized; share a `Config` and use one converter per thread.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
    value: Option<Value>,
}

impl Converter {
    /// Creates a converter with the default configuration and no value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            value: None,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Replaces the alphabet with one parsed from `map`.
    ///
    /// On error the configuration is left unchanged.
    pub fn set_map(&mut self, map: &str) -> Result<&mut Self, Error> {
        self.config = self.config.clone().with_map(map)?;
        Ok(self)
    }

    /// Selects extended precision when `accept_long` is true.
    pub fn set_accept_long(&mut self, accept_long: bool) -> Result<&mut Self, Error> {
        self.config = self.config.clone().accept_long(accept_long)?;
        Ok(self)
    }

    /// Stores a value for the next conversion.
    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the current value.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Removes and returns the current value.
    pub fn take_value(&mut self) -> Option<Value> {
        self.value.take()
    }

    /// Encodes the current value and stores the encoded text.
    pub fn encode(&mut self) -> Result<&mut Self, Error> {
        let value = self
            .value
            .as_ref()
            .ok_or(Error::MissingValue {
                operation: "encode",
            })?;
        let encoded = encode_with(value, &self.config)?;
        debug!(%value, %encoded, "encoded");
        self.value = Some(Value::Text(encoded));
        Ok(self)
    }

    /// Decodes the current value and stores the result.
    ///
    /// An integer value is decoded from its decimal rendering.
    pub fn decode(&mut self) -> Result<&mut Self, Error> {
        let value = self
            .value
            .as_ref()
            .ok_or(Error::MissingValue {
                operation: "decode",
            })?;
        let decoded = match value {
            Value::Text(text) => decode_with(text, &self.config)?,
            Value::Int(n) => decode_with(&n.to_string(), &self.config)?,
        };
        debug!(%value, %decoded, "decoded");
        self.value = Some(decoded);
        Ok(self)
    }

    /// Stores `value` and encodes it.
    pub fn encode_value(&mut self, value: impl Into<Value>) -> Result<&mut Self, Error> {
        self.set_value(value).encode()
    }

    /// Stores `text` and decodes it.
    pub fn decode_value(&mut self, text: impl Into<Value>) -> Result<&mut Self, Error> {
        self.set_value(text).decode()
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => fmt::Display::fmt(value, f),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, ErrorKind};
    use crate::model::{HEXADECIMAL, OCTAL};

    #[test]
    fn test_value_roundtrip() {
        let mut converter = Converter::new();
        converter.set_value(99u64);
        assert_eq!(converter.value(), Some(&Value::Int(99)));
        converter.set_value("ABC");
        assert_eq!(converter.value(), Some(&Value::from("ABC")));
    }

    #[test]
    fn test_chained_encode_decode() {
        let mut converter = Converter::new();
        let text = converter.set_value(2147483647u64).encode().unwrap().to_string();
        assert_eq!(text, "2lkCB1");
        converter.decode().unwrap();
        assert_eq!(converter.value(), Some(&Value::Int(2147483647)));
    }

    #[test]
    fn test_display() {
        let mut converter = Converter::new();
        assert_eq!(converter.to_string(), "");
        assert_eq!(converter.encode_value(62u64).unwrap().to_string(), "10");
        assert_eq!(converter.decode_value("10").unwrap().to_string(), "62");
    }

    #[test]
    fn test_reconfigure() {
        let mut converter = Converter::new();
        converter.set_map(OCTAL).unwrap();
        assert_eq!(converter.encode_value(255u64).unwrap().to_string(), "377");
        converter.set_map(HEXADECIMAL).unwrap();
        assert_eq!(converter.encode_value(255u64).unwrap().to_string(), "ff");
    }

    #[test]
    fn test_bad_map_keeps_config() {
        let mut converter = Converter::new();
        converter.set_map("OKNU").unwrap();
        let err = converter.set_map("00123456789").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateSymbol);
        assert_eq!(converter.config().map(), "OKNU");
    }

    #[test]
    fn test_missing_value() {
        let mut converter = Converter::new();
        assert_eq!(
            converter.encode().unwrap_err(),
            Error::MissingValue {
                operation: "encode",
            }
        );
        assert_eq!(
            converter.decode().unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_decode_int_value_as_text() {
        let mut converter = Converter::new();
        assert_eq!(
            converter.decode_value(10u64).unwrap().value(),
            Some(&Value::Int(62))
        );
    }

    #[test]
    fn test_failed_conversion_keeps_value() {
        let mut converter = Converter::new();
        let err = converter.decode_value("ab#").unwrap_err();
        assert_eq!(
            err,
            Error::Decode(DecodeError::UnknownSymbol {
                symbol: '#',
                index: 2,
            })
        );
        assert_eq!(converter.value(), Some(&Value::from("ab#")));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_accept_long() {
        let mut converter = Converter::new();
        converter.set_accept_long(true).unwrap();
        assert_eq!(
            converter.encode_value("9223372036854775808").unwrap().to_string(),
            "aZl8N0y58M8"
        );
        assert_eq!(
            converter.decode().unwrap().value(),
            Some(&Value::from("9223372036854775808"))
        );
    }

    #[test]
    fn test_native_rejects_large_text() {
        let mut converter = Converter::new();
        converter.set_accept_long(false).unwrap();
        let err = converter.encode_value("9223372036854775808").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueTooLarge);
    }
}
