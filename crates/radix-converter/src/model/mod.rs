//! Data model types.
//!
//! - Alphabets (symbol maps and the built-in standards)
//! - Precision modes
//! - Values (native integers or decimal text)

pub mod alphabet;
pub mod mode;
pub mod value;

pub use alphabet::{
    ALPHANUMERIC_36, ALPHANUMERIC_62, Alphabet, BINARY, DECIMAL, HEXADECIMAL, OCTAL, Standard,
};
pub use mode::PrecisionMode;
pub use value::Value;
