use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

static MISSING: Value = Value::Missing;

/// An ordered sequence of records.
pub type Dataset = Vec<Record>;

/// One row of a dataset: a mapping from column name to [`Value`].
///
/// Records of a dataset usually share the same columns, but this is not
/// enforced. A column the record does not carry reads as [`Value::Missing`].
///
/// Columns keep their insertion order, which is also the key order of the
/// serialized JSON object.
///
/// # Examples
///
/// ```
/// use datalens_analyzer::{Record, Value};
///
/// let record = Record::from_iter([("name", Value::from("Eve")), ("age", Value::from(45))]);
/// assert_eq!(record.value("age"), &Value::Number(45.0));
/// assert_eq!(record.value("salary"), &Value::Missing);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the field value, or `None` if the record has no such column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Returns the field value, treating an absent column as [`Value::Missing`].
    #[must_use]
    pub fn value(&self, column: &str) -> &Value {
        self.fields.get(column).unwrap_or(&MISSING)
    }

    #[must_use]
    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert<K, V>(&mut self, column: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(column.into(), value.into())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> + '_ {
        self.fields.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_value() {
        let mut record = Record::new();
        assert_eq!(record.insert("age", 25), None);
        assert_eq!(record.insert("age", 30), Some(Value::Number(25.0)));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_get_distinguishes_absent_from_missing() {
        let record = Record::from_iter([("salary", Value::Missing)]);
        assert_eq!(record.get("salary"), Some(&Value::Missing));
        assert_eq!(record.get("age"), None);
        assert!(record.contains_column("salary"));
        assert!(!record.contains_column("age"));
    }

    #[test]
    fn test_json_object_round_trip() {
        let record: Record =
            serde_json::from_str(r#"{"name": "John", "age": 25, "bonus": null}"#).unwrap();
        assert_eq!(record.value("name"), &Value::from("John"));
        assert_eq!(record.value("bonus"), &Value::Missing);
        assert_eq!(record.columns().collect::<Vec<_>>(), ["name", "age", "bonus"]);
    }

    #[test]
    fn test_json_keeps_column_order() {
        let record = Record::from_iter([
            ("name", Value::from("John")),
            ("age", Value::from(25)),
            ("salary", Value::from(1)),
        ]);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"John","age":25.0,"salary":1.0}"#
        );
    }
}
