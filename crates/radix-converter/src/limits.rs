//! Limits applied to values and alphabets.
//!
//! Native conversions are bounded by the signed 64-bit ceiling. Extended
//! conversions have no magnitude or length limit.

/// Largest value accepted or produced in native precision (`i64::MAX`).
pub const NATIVE_MAX: u64 = i64::MAX as u64;

/// Smallest alphabet that forms a positional system.
pub const MIN_ALPHABET_LEN: usize = 2;

/// Largest alphabet accepted. Keeps the base within a `u32` operand.
pub const MAX_ALPHABET_LEN: usize = 65_536;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_max_is_signed_ceiling() {
        assert_eq!(NATIVE_MAX, 9_223_372_036_854_775_807);
        assert_eq!(NATIVE_MAX.checked_add(1), Some(1u64 << 63));
    }

    #[test]
    fn test_alphabet_len_fits_u32() {
        assert!(u32::try_from(MAX_ALPHABET_LEN).is_ok());
        assert!(MIN_ALPHABET_LEN < MAX_ALPHABET_LEN);
    }
}
