//! Values exchanged with the codec.

use std::fmt;

/// A number to encode, or the result of a decode.
///
/// Native decodes produce [`Value::Int`]; extended decodes produce
/// [`Value::Text`] holding decimal digits. In the [`Converter`](crate::Converter)
/// a `Text` value may also hold an encoded string waiting to be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize), serde(untagged))]
pub enum Value {
    Int(u64),
    Text(String),
}

impl Value {
    /// Returns the integer if this is [`Value::Int`].
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Returns the text if this is [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Int(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(u64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(62).to_string(), "62");
        assert_eq!(Value::from("h31").to_string(), "h31");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(99u32).as_int(), Some(99));
        assert_eq!(Value::from(99u64).as_text(), None);
        assert_eq!(Value::from("ABC").as_text(), Some("ABC"));
        assert_eq!(Value::from(String::from("ABC")).as_int(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_untagged() {
        assert_eq!(serde_json::to_string(&Value::Int(62)).unwrap(), "62");
        assert_eq!(
            serde_json::to_string(&Value::from("10")).unwrap(),
            r#""10""#
        );

        assert_eq!(
            serde_json::from_str::<Value>("255").unwrap(),
            Value::Int(255)
        );
        assert_eq!(
            serde_json::from_str::<Value>(r#""9223372036854775808""#).unwrap(),
            Value::from("9223372036854775808")
        );
        assert!(serde_json::from_str::<Value>("-1").is_err());
    }
}
