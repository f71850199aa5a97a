//! Integer precision used by the codec.

/// Selects the integer representation the codec works in.
///
/// The mode is always chosen explicitly; it is never inferred from the
/// magnitude of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrecisionMode {
    /// Values in `0..=i64::MAX`, held in a `u64`.
    #[default]
    Native,
    /// Unbounded values, exchanged as decimal digit strings.
    Extended,
}

impl PrecisionMode {
    /// Maps the `acceptLong` configuration flag to a mode.
    pub fn from_accept_long(accept_long: bool) -> Self {
        if accept_long {
            PrecisionMode::Extended
        } else {
            PrecisionMode::Native
        }
    }

    /// Returns true for [`PrecisionMode::Extended`].
    pub fn accepts_long(&self) -> bool {
        matches!(self, PrecisionMode::Extended)
    }

    /// Returns true if this mode can be used in the current build.
    ///
    /// Extended precision needs the `bigint` feature.
    pub fn is_available(&self) -> bool {
        match self {
            PrecisionMode::Native => true,
            PrecisionMode::Extended => cfg!(feature = "bigint"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_long_mapping() {
        assert_eq!(
            PrecisionMode::from_accept_long(false),
            PrecisionMode::Native
        );
        assert_eq!(
            PrecisionMode::from_accept_long(true),
            PrecisionMode::Extended
        );
        assert!(PrecisionMode::Extended.accepts_long());
        assert!(!PrecisionMode::default().accepts_long());
    }

    #[test]
    fn test_native_always_available() {
        assert!(PrecisionMode::Native.is_available());
        assert_eq!(
            PrecisionMode::Extended.is_available(),
            cfg!(feature = "bigint")
        );
    }
}
