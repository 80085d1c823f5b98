//! Flat key-value stores for persisted settings.
//!
//! The store is deliberately dumb: string keys, integer or float values, and
//! typed getters that return `None` for missing keys and for values of the
//! wrong type. The TOML file store also reads integers as floats.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::error::OrbitpadError;

/// A flat, typed key-value store.
pub trait KeyValueStore {
    /// Whether any value is stored under `key`.
    fn contains(&self, key: &str) -> bool;
    /// Integer stored under `key`.
    fn get_int(&self, key: &str) -> Option<i32>;
    /// Float stored under `key`.
    fn get_float(&self, key: &str) -> Option<f32>;
    /// Store an integer, replacing any previous value.
    fn set_int(&mut self, key: &str, value: i32);
    /// Store a float, replacing any previous value.
    fn set_float(&mut self, key: &str, value: f32);
    /// Push pending writes to the backing medium.
    ///
    /// # Errors
    ///
    /// Backend-specific I/O or serialization failure.
    fn flush(&mut self) -> Result<(), OrbitpadError> {
        Ok(())
    }
}

/// A stored value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreValue {
    /// Integer value.
    Int(i32),
    /// Float value.
    Float(f32),
}

/// In-process store, mainly for hosts that persist elsewhere and for tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: FxHashMap<String, StoreValue>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<StoreValue> {
        self.values.get(key).copied()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        match self.get(key)? {
            StoreValue::Int(v) => Some(v),
            StoreValue::Float(_) => None,
        }
    }

    fn get_float(&self, key: &str) -> Option<f32> {
        match self.get(key)? {
            StoreValue::Float(v) => Some(v),
            StoreValue::Int(_) => None,
        }
    }

    fn set_int(&mut self, key: &str, value: i32) {
        let _ = self.values.insert(key.to_owned(), StoreValue::Int(value));
    }

    fn set_float(&mut self, key: &str, value: f32) {
        let _ = self.values.insert(key.to_owned(), StoreValue::Float(value));
    }
}

/// Store backed by a flat TOML table on disk.
///
/// Reads happen once at [`TomlFileStore::open`]; writes stay in memory until
/// [`KeyValueStore::flush`].
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
    table: toml::Table,
    dirty: bool,
}

impl TomlFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// I/O failure other than "not found", or a file that is not valid TOML.
    pub fn open(path: &Path) -> Result<Self, OrbitpadError> {
        let table = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                OrbitpadError::SettingsParse(format!(
                    "{}: {e}",
                    path.display()
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                toml::Table::new()
            }
            Err(e) => return Err(OrbitpadError::Io(e)),
        };
        Ok(Self {
            path: path.to_owned(),
            table,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes not yet flushed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn insert(&mut self, key: &str, value: toml::Value) {
        if self.table.get(key) != Some(&value) {
            let _ = self.table.insert(key.to_owned(), value);
            self.dirty = true;
        }
    }
}

impl KeyValueStore for TomlFileStore {
    fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        self.table
            .get(key)?
            .as_integer()
            .and_then(|v| i32::try_from(v).ok())
    }

    /// Hand-edited files may write whole numbers without a decimal point,
    /// so integers are read as floats too.
    fn get_float(&self, key: &str) -> Option<f32> {
        let value = self.table.get(key)?;
        value
            .as_float()
            .or_else(|| value.as_integer().map(|v| v as f64))
            .map(|v| v as f32)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.insert(key, toml::Value::Integer(i64::from(value)));
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.insert(key, toml::Value::Float(f64::from(value)));
    }

    fn flush(&mut self) -> Result<(), OrbitpadError> {
        if !self.dirty {
            return Ok(());
        }
        let content = toml::to_string(&self.table)
            .map_err(|e| OrbitpadError::SettingsParse(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        self.dirty = false;
        log::debug!("flushed settings store to {}", self.path.display());
        Ok(())
    }
}
