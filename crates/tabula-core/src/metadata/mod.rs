//! Keyed metadata attached to a table, its independent column, or its
//! dependent columns.
//!
//! Every entry is a [`ValueArray`]. A single value is stored as a
//! one-element array, so the same key can be read either way.

mod value;

use std::collections::BTreeMap;

pub use value::{MetaType, MetaValue, ValueArray, ValueKind};

use crate::error::{Result, TableError};

/// Ordered mapping from string keys to typed value-arrays.
///
/// Keys iterate in lexical order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataStore {
    entries: BTreeMap<String, ValueArray>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a single value under `key`, replacing any previous entry.
    pub fn set_value_for_key(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        self.entries
            .insert(key.into(), ValueArray::from(value.into()));
    }

    /// The (first) value stored under `key`.
    pub fn get_value_for_key(&self, key: &str) -> Result<&MetaValue> {
        let array = self.get_value_array_for_key(key)?;
        array.get(0).ok_or_else(|| TableError::MetaDataLengthZero {
            key: key.to_owned(),
        })
    }

    /// Store a value-array under `key`, replacing any previous entry.
    pub fn set_value_array_for_key(
        &mut self,
        key: impl Into<String>,
        values: impl Into<ValueArray>,
    ) {
        self.entries.insert(key.into(), values.into());
    }

    pub fn get_value_array_for_key(&self, key: &str) -> Result<&ValueArray> {
        self.entries
            .get(key)
            .ok_or_else(|| TableError::key_not_found(key))
    }

    pub fn upd_value_array_for_key(&mut self, key: &str) -> Result<&mut ValueArray> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| TableError::key_not_found(key))
    }

    /// Remove the entry under `key`, returning its first value.
    pub fn remove_value_for_key(&mut self, key: &str) -> Option<MetaValue> {
        self.entries
            .remove(key)
            .and_then(|a| a.values().first().cloned())
    }

    /// Remove the entry under `key`, returning the whole array.
    pub fn remove_value_array_for_key(&mut self, key: &str) -> Option<ValueArray> {
        self.entries.remove(key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Every key, each visited exactly once.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueArray)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keep only the entries for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(&str, &mut ValueArray) -> bool) {
        self.entries.retain(|k, v| f(k, v));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
