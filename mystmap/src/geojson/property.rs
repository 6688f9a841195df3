//! Feature properties.
//!
//! Property values are stored as ready-made JSON literal text. The generators
//! never inspect them; they are written verbatim into every feature.

use std::fmt;

use serde_json::Value;

use crate::error::{GenerateError, GenerateResult};

/// A JSON literal used as a property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyValue {
    literal: String,
}

impl PropertyValue {
    /// The JSON `null` literal.
    pub fn null() -> Self {
        Self {
            literal: "null".to_string(),
        }
    }

    /// Format any JSON value as its literal text.
    ///
    /// Object keys keep insertion order and numbers keep their original
    /// digits.
    pub fn from_json(value: &Value) -> Self {
        Self {
            literal: value.to_string(),
        }
    }

    /// A JSON string literal, escaped as needed.
    pub fn string(text: &str) -> Self {
        Self::from_json(&Value::String(text.to_string()))
    }

    /// Interpret command-line text: valid JSON is used as-is, anything else
    /// becomes a string.
    ///
    /// `42`, `true`, `[1,2]` and `"quoted"` keep their JSON meaning while
    /// `forest` becomes `"forest"`.
    pub fn parse_lenient(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_json(&value),
            Err(_) => Self::string(text),
        }
    }

    /// The literal text written to the document.
    pub fn as_literal(&self) -> &str {
        &self.literal
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        Self::string(text)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::from_json(&Value::from(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::from_json(&Value::Bool(value))
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::from_json(&value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// Ordered, set-once property list shared by every feature of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, PropertyValue)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a property. Names are lowercased; each name may be set once.
    pub fn set(&mut self, name: &str, value: impl Into<PropertyValue>) -> GenerateResult<()> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(GenerateError::Parameter(
                "property name must not be empty".to_string(),
            ));
        }
        if self.get(&name).is_some() {
            return Err(GenerateError::Parameter(format!(
                "property '{}' is already set",
                name
            )));
        }
        self.entries.push((name, value.into()));
        Ok(())
    }

    /// Look up a value by (case-insensitive) name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}
