//! Error types for alphabet construction, encoding and decoding.

use thiserror::Error;

/// Error classes shared by every failure the crate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Alphabet has too few symbols to form a base.
    EmptyAlphabet,
    /// Alphabet repeats a symbol.
    DuplicateSymbol,
    /// Malformed numeral text, wrong argument shape, or an oversized
    /// alphabet.
    InvalidInput,
    /// Native-precision ceiling exceeded.
    ValueTooLarge,
    /// Encoded text contains a symbol outside the alphabet.
    UnknownSymbol,
    /// Extended precision requested without big-integer support.
    UnsupportedPrecisionMode,
}

impl ErrorKind {
    /// Returns the stable name of this error class (e.g., "ValueTooLarge").
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::EmptyAlphabet => "EmptyAlphabet",
            ErrorKind::DuplicateSymbol => "DuplicateSymbol",
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::ValueTooLarge => "ValueTooLarge",
            ErrorKind::UnknownSymbol => "UnknownSymbol",
            ErrorKind::UnsupportedPrecisionMode => "UnsupportedPrecisionMode",
        }
    }
}

/// Error while constructing an alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet has {len} symbol(s); at least {min} are required")]
    TooFewSymbols { len: usize, min: usize },

    /// Classified as [`ErrorKind::InvalidInput`].
    #[error("alphabet has {len} symbols; at most {max} are allowed")]
    TooManySymbols { len: usize, max: usize },

    #[error("alphabet contains {symbol:?} at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
}

impl AlphabetError {
    /// Returns the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlphabetError::TooFewSymbols { .. } => ErrorKind::EmptyAlphabet,
            AlphabetError::TooManySymbols { .. } => ErrorKind::InvalidInput,
            AlphabetError::DuplicateSymbol { .. } => ErrorKind::DuplicateSymbol,
        }
    }
}

/// Error while encoding a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("the value {value:?} includes characters other than decimal digits")]
    InvalidInput { value: String },

    #[error("the value {value} exceeds the native maximum {max}")]
    ValueTooLarge { value: String, max: u64 },

    #[error("extended precision requires big-integer support (the `bigint` feature)")]
    UnsupportedPrecisionMode,
}

impl EncodeError {
    /// Returns the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::InvalidInput { .. } => ErrorKind::InvalidInput,
            EncodeError::ValueTooLarge { .. } => ErrorKind::ValueTooLarge,
            EncodeError::UnsupportedPrecisionMode => ErrorKind::UnsupportedPrecisionMode,
        }
    }
}

/// Error while decoding an encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("encoded string is empty")]
    EmptyInput,

    #[error("invalid character {symbol:?} at index {index}")]
    UnknownSymbol { symbol: char, index: usize },

    #[error("decoded value exceeds the native maximum {max}")]
    ValueTooLarge { max: u64 },

    #[error("extended precision requires big-integer support (the `bigint` feature)")]
    UnsupportedPrecisionMode,
}

impl DecodeError {
    /// Returns the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::EmptyInput => ErrorKind::InvalidInput,
            DecodeError::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
            DecodeError::ValueTooLarge { .. } => ErrorKind::ValueTooLarge,
            DecodeError::UnsupportedPrecisionMode => ErrorKind::UnsupportedPrecisionMode,
        }
    }
}

/// Any error raised by configuration or the [`Converter`](crate::Converter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("extended precision requires big-integer support (the `bigint` feature)")]
    UnsupportedPrecisionMode,

    #[error("no value to {operation}")]
    MissingValue { operation: &'static str },
}

impl Error {
    /// Returns the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Alphabet(e) => e.kind(),
            Error::Encode(e) => e.kind(),
            Error::Decode(e) => e.kind(),
            Error::UnsupportedPrecisionMode => ErrorKind::UnsupportedPrecisionMode,
            Error::MissingValue { .. } => ErrorKind::InvalidInput,
        }
    }
}
