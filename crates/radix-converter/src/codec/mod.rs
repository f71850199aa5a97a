//! Encoding and decoding between integers and alphabet strings.
//!
//! - [`native`]: `u64` values up to `i64::MAX`
//! - [`extended`]: arbitrary precision (requires the `bigint` feature)
//! - `digits`: the shared digit engine both modes plug into

pub mod convert;
mod digits;
#[cfg(feature = "bigint")]
pub mod extended;
pub mod native;

pub use convert::{
    decode_decimal, decode_default, decode_value, decode_with, encode_decimal, encode_default,
    encode_value, encode_with,
};
pub use native::{decode, encode};
