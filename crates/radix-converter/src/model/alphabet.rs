//! Symbol alphabets defining a positional numeral system.
//!
//! The symbol at position `i` stands for digit `i`, so an alphabet of `N`
//! symbols defines base `N`. Uniqueness is checked once, at construction.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::error::AlphabetError;
use crate::limits::{MAX_ALPHABET_LEN, MIN_ALPHABET_LEN};

/// Base 2.
pub const BINARY: &str = "01";
/// Base 8.
pub const OCTAL: &str = "01234567";
/// Base 10.
pub const DECIMAL: &str = "0123456789";
/// Base 16, lowercase.
pub const HEXADECIMAL: &str = "0123456789abcdef";
/// Base 36: digits and lowercase letters.
pub const ALPHANUMERIC_36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
/// Base 62: digits, lowercase then uppercase letters. The default map.
pub const ALPHANUMERIC_62: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The built-in alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Alphanumeric36,
    Alphanumeric62,
}

impl Standard {
    /// All built-in alphabets, smallest base first.
    pub const ALL: [Standard; 6] = [
        Standard::Binary,
        Standard::Octal,
        Standard::Decimal,
        Standard::Hexadecimal,
        Standard::Alphanumeric36,
        Standard::Alphanumeric62,
    ];

    /// Returns the symbol string for this alphabet.
    pub fn map(&self) -> &'static str {
        match self {
            Standard::Binary => BINARY,
            Standard::Octal => OCTAL,
            Standard::Decimal => DECIMAL,
            Standard::Hexadecimal => HEXADECIMAL,
            Standard::Alphanumeric36 => ALPHANUMERIC_36,
            Standard::Alphanumeric62 => ALPHANUMERIC_62,
        }
    }

    /// Returns a short display name (e.g., "base62").
    pub fn name(&self) -> &'static str {
        match self {
            Standard::Binary => "binary",
            Standard::Octal => "octal",
            Standard::Decimal => "decimal",
            Standard::Hexadecimal => "hexadecimal",
            Standard::Alphanumeric36 => "base36",
            Standard::Alphanumeric62 => "base62",
        }
    }

    /// Returns the shared alphabet instance.
    pub fn alphabet(&self) -> &'static Alphabet {
        let index = match self {
            Standard::Binary => 0,
            Standard::Octal => 1,
            Standard::Decimal => 2,
            Standard::Hexadecimal => 3,
            Standard::Alphanumeric36 => 4,
            Standard::Alphanumeric62 => 5,
        };
        &STANDARD_ALPHABETS[index]
    }
}

lazy_static! {
    static ref STANDARD_ALPHABETS: [Alphabet; 6] =
        Standard::ALL.map(|s| Alphabet::from_known(s.map()));
}

/// An ordered set of unique symbols.
///
/// Immutable once built; lookups in both directions are constant time.
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    symbols: Vec<char>,
    digits: FxHashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from a sequence of symbols.
    ///
    /// Fails if there are fewer than two symbols, more than
    /// [`MAX_ALPHABET_LEN`], or any symbol repeats.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.len() < MIN_ALPHABET_LEN {
            return Err(AlphabetError::TooFewSymbols {
                len: symbols.len(),
                min: MIN_ALPHABET_LEN,
            });
        }
        if symbols.len() > MAX_ALPHABET_LEN {
            return Err(AlphabetError::TooManySymbols {
                len: symbols.len(),
                max: MAX_ALPHABET_LEN,
            });
        }

        let mut digits = FxHashMap::with_capacity_and_hasher(symbols.len(), Default::default());
        for (digit, &symbol) in symbols.iter().enumerate() {
            if let Some(first) = digits.insert(symbol, digit) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol,
                    first,
                    second: digit,
                });
            }
        }

        Ok(Self { symbols, digits })
    }

    /// Builds one of the built-in maps, which are unique by construction.
    fn from_known(map: &str) -> Self {
        let symbols: Vec<char> = map.chars().collect();
        let digits: FxHashMap<char, usize> =
            symbols.iter().enumerate().map(|(digit, &symbol)| (symbol, digit)).collect();
        debug_assert_eq!(digits.len(), symbols.len());
        Self { symbols, digits }
    }

    /// Returns the shared instance of a built-in alphabet.
    pub fn standard(standard: Standard) -> &'static Alphabet {
        standard.alphabet()
    }

    /// Returns the base (number of symbols).
    #[inline]
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol for `digit`.
    ///
    /// Callers pass digits produced modulo [`base`](Self::base); a digit
    /// outside `0..base` is an invariant violation and panics.
    #[inline]
    pub fn symbol_at(&self, digit: usize) -> char {
        self.symbols[digit]
    }

    /// Returns the digit for `symbol`, or `None` if it is not in the alphabet.
    #[inline]
    pub fn digit_of(&self, symbol: char) -> Option<usize> {
        self.digits.get(&symbol).copied()
    }

    /// Returns the symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol for zero.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Standard::Alphanumeric62.alphabet().clone()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl Hash for Alphabet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("base", &self.base())
            .field("map", &self.to_string())
            .finish()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = AlphabetError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}

impl From<Standard> for Alphabet {
    fn from(standard: Standard) -> Self {
        standard.alphabet().clone()
    }
}
