//! Conversion between nested dictionaries and flat dotted-key records
//!
//! The editing surface works on flat records (`"common.save" -> "Save"`),
//! while dictionaries are stored nested. Arrays are treated as leaves and
//! are never descended into.

use serde_json::{Map, Value};

/// Separator joining nested key segments
pub const KEY_SEPARATOR: char = '.';

/// Flatten a nested object into dotted-key leaves, preserving visit order
///
/// Empty nested objects produce no entries.
pub fn flatten(nested: &Map<String, Value>) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(nested, None, &mut flat);
    flat
}

fn flatten_into(nested: &Map<String, Value>, prefix: Option<&str>, flat: &mut Map<String, Value>) {
    for (key, value) in nested {
        let path = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, KEY_SEPARATOR, key),
            None => key.clone(),
        };

        match value {
            Value::Object(children) => flatten_into(children, Some(&path), flat),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

/// Rebuild a nested object from dotted-key leaves
///
/// A non-object value found on an intermediate path is replaced by a new
/// object node; a later leaf replaces whatever sits at its own path.
pub fn unflatten(flat: &Map<String, Value>) -> Map<String, Value> {
    let mut root = Map::new();
    for (key, value) in flat {
        let segments: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        insert_path(&mut root, &segments, value.clone());
    }
    root
}

fn insert_path(node: &mut Map<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            node.insert(last.to_string(), value);
        }
        [head, rest @ ..] => {
            let slot = node
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(children) = slot {
                insert_path(children, rest, value);
            }
        }
    }
}
