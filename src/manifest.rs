//! JSON document merging for package manifests and other mergeable files.
//!
//! Documents are plain [`serde_json::Value`]s. Object key order is preserved, so a merged
//! manifest keeps the layout of the first layer that introduced each key.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::{Map, Value};

use crate::constants::{BASELINE_VERSION, DEPENDENCY_SECTIONS};
use crate::error::Result;

/// Concatenates `a` and `b`, keeping only the first occurrence of every element.
pub fn merge_array_with_dedupe(a: &[Value], b: &[Value]) -> Vec<Value> {
    let mut merged: Vec<Value> = Vec::with_capacity(a.len() + b.len());
    for item in a.iter().chain(b) {
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}

/// Merges `source` into `target` and returns `target`.
///
/// For every key of `source`:
/// * two arrays are concatenated with [`merge_array_with_dedupe`],
/// * two objects are merged recursively,
/// * anything else is overwritten by the source value.
///
/// Nothing happens unless both documents are objects.
pub fn deep_merge<'a>(target: &'a mut Value, source: &Value) -> &'a mut Value {
    if let (Value::Object(target_map), Value::Object(source_map)) = (&mut *target, source) {
        merge_objects(target_map, source_map);
    }
    target
}

fn merge_objects(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, new_value) in source {
        match (target.get_mut(key), new_value) {
            (Some(Value::Array(old)), Value::Array(new)) => {
                *old = merge_array_with_dedupe(old, new);
            }
            (Some(old @ Value::Object(_)), Value::Object(_)) => {
                deep_merge(old, new_value);
            }
            _ => {
                target.insert(key.clone(), new_value.clone());
            }
        }
    }
}

/// Returns a copy of `manifest` whose dependency sections have their keys sorted.
///
/// Other top-level keys, and the position of the sections themselves, are left alone.
pub fn sort_dependencies(manifest: &Value) -> Value {
    let mut sorted = manifest.clone();
    if let Value::Object(sections) = &mut sorted {
        for section in DEPENDENCY_SECTIONS {
            if let Some(Value::Object(deps)) = sections.get_mut(section) {
                let mut entries: Vec<(String, Value)> = std::mem::take(deps).into_iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                *deps = entries.into_iter().collect();
            }
        }
    }
    sorted
}

/// Minimal manifest written before any layer is applied.
pub fn manifest_stub(package_name: &str) -> Value {
    serde_json::json!({
        "name": package_name,
        "version": BASELINE_VERSION,
    })
}

/// Reads and parses a JSON document.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Writes a JSON document with two-space indentation and a trailing newline.
pub fn write_document<P: AsRef<Path>>(path: P, document: &Value) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing document: {}", path.display());
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// Merges the JSON document at `incoming` into the one at `existing`, in place.
pub fn merge_document_file<P: AsRef<Path>, Q: AsRef<Path>>(existing: P, incoming: Q) -> Result<()> {
    let existing = existing.as_ref();
    let mut document = read_document(existing)?;
    let update = read_document(incoming)?;
    deep_merge(&mut document, &update);
    write_document(existing, &document)
}
