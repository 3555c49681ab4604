//! Captured parameter values.

use std::fmt;

/// A single captured value.
///
/// The set is deliberately closed: booleans, characters, integers, floats
/// and borrowed string slices. Integers are widened to 64 bits and `f32` to
/// `f64`, so capture is a move or a cheap widening, never an allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A boolean.
    Bool(bool),
    /// A character.
    Char(char),
    /// Any unsigned integer, widened.
    U64(u64),
    /// Any signed integer, widened.
    I64(i64),
    /// Any float, widened.
    F64(f64),
    /// Borrowed string data.
    Str(&'a str),
}

impl<'a> Value<'a> {
    /// The boolean inside, if this is [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The character inside, if this is [`Value::Char`].
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer inside, if this is [`Value::U64`].
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U64(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer inside, if this is [`Value::I64`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(value) => Some(*value),
            _ => None,
        }
    }

    /// The float inside, if this is [`Value::F64`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(value) => Some(*value),
            _ => None,
        }
    }

    /// The string slice inside, if this is [`Value::Str`].
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }
}

/// Formats exactly as the underlying value would, so rendered templates and
/// structured consumers print identically.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Char(value) => write!(f, "{value}"),
            Value::U64(value) => write!(f, "{value}"),
            Value::I64(value) => write!(f, "{value}"),
            Value::F64(value) => write!(f, "{value}"),
            Value::Str(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value<'_> {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<u8> for Value<'_> {
    fn from(value: u8) -> Self {
        Value::U64(u64::from(value))
    }
}

impl From<u16> for Value<'_> {
    fn from(value: u16) -> Self {
        Value::U64(u64::from(value))
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::U64(u64::from(value))
    }
}

impl From<u64> for Value<'_> {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

impl From<usize> for Value<'_> {
    fn from(value: usize) -> Self {
        Value::U64(value as u64)
    }
}

impl From<i8> for Value<'_> {
    fn from(value: i8) -> Self {
        Value::I64(i64::from(value))
    }
}

impl From<i16> for Value<'_> {
    fn from(value: i16) -> Self {
        Value::I64(i64::from(value))
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::I64(i64::from(value))
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<isize> for Value<'_> {
    fn from(value: isize) -> Self {
        Value::I64(value as i64)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::F64(f64::from(value))
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn integers_widen_without_changing_their_text() {
        assert_eq!(Value::from(443u16), Value::U64(443));
        assert_eq!(Value::from(-7i8), Value::I64(-7));
        assert_eq!(Value::from(1usize), Value::U64(1));
        assert_eq!(Value::from(443u16).to_string(), "443");
    }

    #[test]
    fn accessors_match_their_variant_only() {
        let value = Value::from("microsoft.com");
        assert_eq!(value.as_str(), Some("microsoft.com"));
        assert_eq!(value.as_u64(), None);

        let value = Value::from(true);
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn display_matches_the_underlying_value() {
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from('x').to_string(), "x");
        assert_eq!(Value::from(2.5f32).to_string(), "2.5");
        assert_eq!(Value::from("plain").to_string(), "plain");
    }

    #[test]
    fn borrowed_strings_keep_their_lifetime() {
        let owned = String::from("scoped");
        let value = Value::from(owned.as_str());
        assert_eq!(value.as_str(), Some("scoped"));
    }
}
