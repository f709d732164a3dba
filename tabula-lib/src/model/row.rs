//! Row type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::{Value, display_value};

/// A single record: an opaque mapping from column key to value.
///
/// Rows carry no identity of their own; a row is addressed by its position
/// within the current page.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tabula_lib::Row;
///
/// let row = Row::new().with("name", "Contoso").with("revenue", 1200);
/// assert_eq!(row.display("revenue"), "1200");
/// assert_eq!(row.get("name"), Some(&json!("Contoso")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Sets a field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Returns the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the display text for a key; missing and `null` are empty.
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(display_value).unwrap_or_default()
    }

    /// Iterates over all fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<serde_json::Map<String, Value>> for Row {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
