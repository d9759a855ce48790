use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single cell of a record.
///
/// Serialized untagged: a JSON number, a JSON string, or `null` for a missing
/// value.
///
/// Equality and hashing are by value: `-0.0` equals `0.0`, and all `NaN`s are
/// equal to each other so that they group together when counting frequencies.
#[derive(
    Debug,
    Clone,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::IsVariant,
)]
#[serde(untagged)]
pub enum Value {
    #[from]
    #[display("{_0}")]
    Number(f64),
    #[from]
    #[display("{_0}")]
    Text(String),
    /// The absent marker.
    #[default]
    #[display("null")]
    Missing,
}

impl Value {
    /// Returns the number if this is a [`Value::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

fn number_key(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        // folds -0.0 into +0.0
        (n + 0.0).to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => number_key(*a) == number_key(*b),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Missing, Self::Missing) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Number(n) => number_key(*n).hash(state),
            Self::Text(s) => s.hash(state),
            Self::Missing => {}
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(Value::from(25), Value::Number(25.0));
        assert_eq!(Value::Number(0.0), Value::Number(-0.0));
        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_ne!(Value::Number(1.0), Value::from("1"));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let set = [
            Value::Number(0.0),
            Value::Number(-0.0),
            Value::from("a"),
            Value::from("a"),
            Value::Missing,
            Value::from(None::<f64>),
        ]
        .into_iter()
        .collect::<HashSet<_>>();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_json_representation() {
        let values: Vec<Value> = serde_json::from_str(r#"[25, "Eve", null, 1.5]"#).unwrap();
        assert_eq!(
            values,
            [
                Value::Number(25.0),
                Value::from("Eve"),
                Value::Missing,
                Value::Number(1.5)
            ]
        );
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"[25.0,"Eve",null,1.5]"#
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(35.0).to_string(), "35");
        assert_eq!(Value::from("N/A").to_string(), "N/A");
        assert_eq!(Value::Missing.to_string(), "null");
    }

    #[test]
    fn test_variant_accessors() {
        assert!(Value::Missing.is_missing());
        assert_eq!(Value::from(2.5).as_number(), Some(2.5));
        assert!(Value::from("x").is_text());
        assert_eq!(Value::from("x").as_number(), None);
    }
}
