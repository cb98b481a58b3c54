//! Color values and shade keys.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A color token value as written in the configuration.
///
/// Any string is accepted at load time so that a bad value can be reported
/// with its field path by [`crate::validate`]. Use [`ColorValue::is_valid_hex`]
/// to check the `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the value is `#` followed by exactly six hex digits.
    pub fn is_valid_hex(&self) -> bool {
        let Some(digits) = self.0.strip_prefix('#') else {
            return false;
        };
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Index into a palette group (e.g. `"500"`). Lower numbers are lighter.
///
/// Keys may be written as strings or as non-negative integers (YAML
/// produces the latter for `500:`); both normalize to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShadeKey(String);

impl ShadeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShadeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<u64> for ShadeKey {
    fn from(key: u64) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadeKeyVisitor;

        impl Visitor<'_> for ShadeKeyVisitor {
            type Value = ShadeKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade key string or non-negative integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeKey, E> {
                Ok(ShadeKey::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeKey, E> {
                Ok(ShadeKey::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShadeKey, E> {
                u64::try_from(v)
                    .map(ShadeKey::from)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(ShadeKeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_digit_hex() {
        assert!(ColorValue::from("#2563eb").is_valid_hex());
        assert!(ColorValue::from("#ABCDEF").is_valid_hex());
        assert!(ColorValue::from("#0f766E").is_valid_hex());
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(!ColorValue::from("blue").is_valid_hex());
        assert!(!ColorValue::from("2563eb").is_valid_hex());
        assert!(!ColorValue::from("#fff").is_valid_hex());
        assert!(!ColorValue::from("#2563eb0").is_valid_hex());
        assert!(!ColorValue::from("#25g3eb").is_valid_hex());
        assert!(!ColorValue::from("").is_valid_hex());
    }

    #[test]
    fn shade_key_from_integer_matches_string() {
        assert_eq!(ShadeKey::from(500), ShadeKey::from("500"));
    }

    #[test]
    fn shade_key_deserializes_from_yaml_integer() {
        let key: ShadeKey = serde_yaml::from_str("50").unwrap();
        assert_eq!(key.as_str(), "50");
    }

    #[test]
    fn shade_key_rejects_negative_integer() {
        let result: Result<ShadeKey, _> = serde_yaml::from_str("-5");
        assert!(result.is_err());
    }
}
