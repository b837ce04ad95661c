//! Nested translation dictionaries and dotted-key resolution
//!
//! A dictionary is the parsed JSON object for one language. Keys such as
//! `"common.save"` address leaves by walking nested objects one segment at
//! a time. Any miss falls back to the caller's default, or the key itself.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::utils::errors::{FitAdminError, Result};
use super::LanguageCode;

/// Nested key-value translation table for one language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: Map<String, Value>,
}

impl Dictionary {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Build a dictionary from a parsed JSON document; the root must be an object
    pub fn from_value(language: LanguageCode, value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(FitAdminError::InvalidDictionary {
                language: language.to_string(),
                reason: format!("expected a JSON object at the root, found {}", json_type_name(&other)),
            }),
        }
    }

    /// Parse a dictionary from raw JSON text
    pub fn from_json_str(language: LanguageCode, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(language, value)
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn into_entries(self) -> Map<String, Value> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk a dotted key and return the raw value it addresses
    ///
    /// Empty keys and keys with empty segments (`"a..b"`, `".a"`, `"a."`)
    /// never match.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = segments.next().filter(|s| !s.is_empty())?;
        let mut current = self.entries.get(first)?;

        for segment in segments {
            if segment.is_empty() {
                return None;
            }
            current = current.as_object()?.get(segment)?;
        }

        Some(current)
    }

    /// Resolve a dotted key to display text
    ///
    /// Returns `default` when supplied and the key misses, otherwise the key
    /// itself. `null` leaves count as misses.
    pub fn resolve(&self, key: &str, default: Option<&str>) -> String {
        match self.lookup(key) {
            Some(value) if !value.is_null() => display_text(value),
            _ => default.unwrap_or(key).to_string(),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.lookup(key), Some(value) if !value.is_null())
    }

    /// Recursively count leaf values
    pub fn leaf_count(&self) -> usize {
        count_leaves(&self.entries)
    }
}

impl From<Map<String, Value>> for Dictionary {
    fn from(entries: Map<String, Value>) -> Self {
        Self::new(entries)
    }
}

/// Coerce a resolved value to the text shown to users
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn count_leaves(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_leaves(nested),
            _ => 1,
        })
        .sum()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
