//! Conversion configuration: the alphabet ("map") and the precision mode
//! ("acceptLong").
//!
//! A `Config` is validated when it is built, so every conversion that uses
//! it can rely on a well-formed alphabet and an available precision mode.
//!
//! With the `serde` feature it deserializes from
//! `{ "map": "<symbols>", "acceptLong": <bool> }`. Both keys are optional
//! and unknown keys are rejected.

use tracing::debug;

use crate::error::Error;
use crate::model::{Alphabet, PrecisionMode};
use crate::validate::validate_mode;

/// Alphabet plus precision mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(try_from = "RawConfig"))]
pub struct Config {
    alphabet: Alphabet,
    mode: PrecisionMode,
}

impl Config {
    /// Creates the default configuration: base 62, native precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the precision mode.
    pub fn mode(&self) -> PrecisionMode {
        self.mode
    }

    /// Returns the symbol string of the alphabet.
    pub fn map(&self) -> String {
        self.alphabet.to_string()
    }

    /// Returns true if extended precision is selected.
    pub fn accepts_long(&self) -> bool {
        self.mode.accepts_long()
    }

    /// Replaces the alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        debug!(base = alphabet.base(), "configured alphabet");
        self.alphabet = alphabet;
        self
    }

    /// Replaces the alphabet with one parsed from `map`.
    pub fn with_map(self, map: &str) -> Result<Self, Error> {
        let alphabet: Alphabet = map.parse()?;
        Ok(self.with_alphabet(alphabet))
    }

    /// Selects the precision mode.
    ///
    /// Fails if the mode is unavailable in this build.
    pub fn with_mode(mut self, mode: PrecisionMode) -> Result<Self, Error> {
        validate_mode(mode)?;
        debug!(?mode, "configured precision mode");
        self.mode = mode;
        Ok(self)
    }

    /// Selects extended precision when `accept_long` is true.
    pub fn accept_long(self, accept_long: bool) -> Result<Self, Error> {
        self.with_mode(PrecisionMode::from_accept_long(accept_long))
    }
}

/// The external configuration surface.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    map: Option<String>,
    #[serde(default)]
    accept_long: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let config = match raw.map {
            Some(map) => Config::new().with_map(&map)?,
            None => Config::new(),
        };
        config.accept_long(raw.accept_long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AlphabetError, ErrorKind};
    use crate::model::{BINARY, Standard};

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.alphabet(), Standard::Alphanumeric62.alphabet());
        assert_eq!(config.mode(), PrecisionMode::Native);
        assert!(!config.accepts_long());
    }

    #[test]
    fn test_with_map() {
        let config = Config::new().with_map(BINARY).unwrap();
        assert_eq!(config.alphabet().base(), 2);
        assert_eq!(config.map(), "01");
    }

    #[test]
    fn test_with_map_rejects_duplicates() {
        let err = Config::new().with_map("00123456789").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateSymbol);
        assert!(matches!(
            err,
            Error::Alphabet(AlphabetError::DuplicateSymbol { symbol: '0', .. })
        ));
    }

    #[test]
    fn test_accept_long() {
        let result = Config::new().accept_long(true);
        if cfg!(feature = "bigint") {
            assert!(result.unwrap().accepts_long());
        } else {
            assert_eq!(result.unwrap_err(), Error::UnsupportedPrecisionMode);
        }

        let config = Config::new().accept_long(false).unwrap();
        assert_eq!(config.mode(), PrecisionMode::Native);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_surface() {
        let config: Config = serde_json::from_str(r#"{"map": "OKNU"}"#).unwrap();
        assert_eq!(config.map(), "OKNU");
        assert_eq!(config.mode(), PrecisionMode::Native);

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[cfg(all(feature = "serde", feature = "bigint"))]
    #[test]
    fn test_deserialize_accept_long() {
        let config: Config = serde_json::from_str(r#"{"acceptLong": true}"#).unwrap();
        assert_eq!(config.mode(), PrecisionMode::Extended);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_bad_input() {
        assert!(serde_json::from_str::<Config>(r#"{"map": "aa"}"#).is_err());
        assert!(serde_json::from_str::<Config>(r#"{"radix": 16}"#).is_err());
    }
}
