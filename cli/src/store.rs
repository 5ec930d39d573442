//! JSON-file key-value store so a CLI session survives between invocations.
//!
//! The file holds one flat JSON object of string values. It is created on the
//! first write; missing or unreadable files read as empty.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::path::{Path, PathBuf};

use client::state::storage::KeyValueStore;
use serde_json::{Map, Value};

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Map<String, Value> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => entries,
            _ => {
                tracing::debug!(path = %self.path.display(), "ignoring malformed session file");
                Map::new()
            }
        }
    }

    fn save(&self, entries: &Map<String, Value>) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(error) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), %error, "could not create session directory");
                return;
            }
        }
        let rendered = match serde_json::to_string_pretty(entries) {
            Ok(rendered) => rendered,
            Err(error) => {
                tracing::warn!(%error, "could not serialize session file");
                return;
            }
        };
        if let Err(error) = fs::write(&self.path, rendered) {
            tracing::warn!(path = %self.path.display(), %error, "could not write session file");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load()
            .get(key)
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.load();
        entries.insert(key.to_owned(), Value::String(value.to_owned()));
        self.save(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.save(&entries);
        }
    }
}
