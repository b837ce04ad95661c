//! Flat editing of a dictionary for the admin console
//!
//! The editor keeps a flattened copy of one language's dictionary so each
//! translation can be shown and changed as a single `key -> value` row,
//! then rebuilds the nested structure for export.

use serde_json::{Map, Value};
use tracing::{debug, info};
use crate::utils::errors::{FitAdminError, Result};
use super::transform::{flatten, unflatten, KEY_SEPARATOR};
use super::{Dictionary, LanguageCode, Translator};

#[derive(Debug, Clone)]
pub struct TranslationEditor {
    language: LanguageCode,
    entries: Map<String, Value>,
}

impl TranslationEditor {
    pub fn new(language: LanguageCode) -> Self {
        Self { language, entries: Map::new() }
    }

    pub fn from_dictionary(language: LanguageCode, dictionary: &Dictionary) -> Self {
        Self {
            language,
            entries: flatten(dictionary.entries()),
        }
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    /// Flattened rows in dictionary order
    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Insert or replace a row, returning the previous value
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        validate_key(key)?;
        let value = value.into();
        if value.is_object() {
            return Err(FitAdminError::InvalidKey(format!(
                "{} (nested objects must be set key by key)",
                key
            )));
        }
        debug!(language = %self.language, key = key, "Translation entry updated");
        Ok(self.entries.insert(key.to_string(), value))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Rows whose key or string value contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<(&str, &Value)> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|(key, value)| {
                key.to_lowercase().contains(&needle)
                    || value.as_str().is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    /// Keys present in `reference` but absent here
    pub fn missing_keys(&self, reference: &Dictionary) -> Vec<String> {
        flatten(reference.entries())
            .keys()
            .filter(|key| !self.entries.contains_key(key.as_str()))
            .cloned()
            .collect()
    }

    /// Keys present here but absent from `reference`
    pub fn extra_keys(&self, reference: &Dictionary) -> Vec<String> {
        let reference = flatten(reference.entries());
        self.entries
            .keys()
            .filter(|key| !reference.contains_key(key.as_str()))
            .cloned()
            .collect()
    }

    /// Fill missing rows by translating the reference language's text
    ///
    /// Non-string reference leaves are copied as-is. Returns how many rows
    /// were added.
    pub fn fill_missing(
        &mut self,
        reference: &Dictionary,
        reference_language: LanguageCode,
        translator: &dyn Translator,
    ) -> usize {
        let mut filled = 0;
        for (key, value) in flatten(reference.entries()) {
            if self.entries.contains_key(&key) {
                continue;
            }
            let translated = match &value {
                Value::String(text) => {
                    Value::String(translator.translate(text, reference_language, self.language))
                }
                other => other.clone(),
            };
            self.entries.insert(key, translated);
            filled += 1;
        }

        info!(
            language = %self.language,
            reference = %reference_language,
            filled = filled,
            "Filled missing translations"
        );
        filled
    }

    /// Rebuild the nested dictionary
    pub fn to_dictionary(&self) -> Dictionary {
        Dictionary::new(unflatten(&self.entries))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_dictionary())?)
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.split(KEY_SEPARATOR).any(str::is_empty) {
        return Err(FitAdminError::InvalidKey(key.to_string()));
    }
    Ok(())
}
