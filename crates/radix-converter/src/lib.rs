//! Radix conversion over arbitrary symbol alphabets.
//!
//! This crate converts non-negative integers to and from strings in any
//! positional numeral system defined by an alphabet of unique symbols,
//! with native (`u64` up to `i64::MAX`) or arbitrary precision.
//!
//! # Quick Start
//!
//! ```rust
//! use radix_converter::{Alphabet, Standard, decode, encode};
//!
//! let base62 = Standard::Alphanumeric62.alphabet();
//! assert_eq!(encode(2147483647, base62).unwrap(), "2lkCB1");
//! assert_eq!(decode("2lkCB1", base62).unwrap(), 2147483647);
//!
//! let custom: Alphabet = "OKNU".parse().unwrap();
//! assert_eq!(encode(228, &custom).unwrap(), "UNKO");
//! ```
//!
//! Values beyond the native range need extended precision, where values
//! are exchanged as decimal text:
//!
//! ```rust
//! # #[cfg(feature = "bigint")] {
//! use radix_converter::{PrecisionMode, Standard, decode_decimal, encode_decimal};
//!
//! let base62 = Standard::Alphanumeric62.alphabet();
//! let text = encode_decimal("9223372036854775808", base62, PrecisionMode::Extended).unwrap();
//! assert_eq!(text, "aZl8N0y58M8");
//! assert_eq!(
//!     decode_decimal(&text, base62, PrecisionMode::Extended).unwrap(),
//!     "9223372036854775808"
//! );
//! # }
//! ```
//!
//! # Modules
//!
//! - [`model`]: Alphabets, precision modes and values
//! - [`codec`]: Encoding and decoding in both precision modes
//! - [`config`]: Validated alphabet + precision configuration
//! - [`converter`]: Stateful facade for chained conversions
//! - [`validate`]: Input checks run before conversion
//! - [`error`]: Error types
//! - [`limits`]: Native ceiling and alphabet size limits
//!
//! # Features
//!
//! - `bigint` (default): extended precision via `num-bigint`. Without it,
//!   extended conversions fail with `UnsupportedPrecisionMode`.
//! - `serde`: deserialize [`Config`] from `{ "map": ..., "acceptLong": ... }`.

pub mod codec;
pub mod config;
pub mod converter;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    decode, decode_decimal, decode_default, decode_value, decode_with, encode, encode_decimal,
    encode_default, encode_value, encode_with,
};
pub use config::Config;
pub use converter::Converter;
pub use error::{AlphabetError, DecodeError, EncodeError, Error, ErrorKind};
pub use limits::NATIVE_MAX;
pub use model::{
    ALPHANUMERIC_36, ALPHANUMERIC_62, Alphabet, BINARY, DECIMAL, HEXADECIMAL, OCTAL,
    PrecisionMode, Standard, Value,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
