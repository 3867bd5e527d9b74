// file: src/config/store.rs
// version: 1.1.0
// guid: d40b8a17-35c6-4f92-ae08-21c79d5e6b83

//! Key/value store backed by a plain text file
//!
//! One `key=value` pair per line, UTF-8, no quoting or escaping. The file is
//! loaded once at startup and rewritten in full on every mutation, so all
//! writers should live on a single code path.

use crate::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// In-memory configuration mirror of the config file
pub struct ConfigStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl ConfigStore {
    /// Load the store from `path`. A missing file yields an empty store;
    /// lines without a `=` separator are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut values = HashMap::new();

        match fs::read_to_string(&path) {
            Ok(content) => {
                for line in content.lines() {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match line.split_once('=') {
                        Some((key, value)) => {
                            values.insert(key.to_string(), value.to_string());
                        }
                        None => {
                            warn!("Skipping malformed config line: {}", line);
                        }
                    }
                }
                debug!("Loaded {} config entries from {}", values.len(), path.display());
            }
            Err(e) => {
                debug!("No config loaded from {}: {}", path.display(), e);
            }
        }

        Self { path, values }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a value and rewrite the file
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.values.insert(key.into(), value.into());
        self.save()
    }

    /// Remove a value and rewrite the file
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        self.save()
    }

    /// All entries, sorted by key for stable output
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }

    /// Rewrite the whole file from the in-memory map
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = String::new();
        for (key, value) in self.entries() {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }

        fs::write(&self.path, content)?;
        debug!("Saved {} config entries to {}", self.values.len(), self.path.display());
        Ok(())
    }
}
