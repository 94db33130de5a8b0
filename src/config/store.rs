//! Thread-safe configuration storage.
//!
//! A simple in-memory config container with interior mutability, plus
//! persistence back to the config file so an interactively entered API
//! key survives restarts.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    ///
    /// This is cheap because Config is Clone.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Apply an in-place mutation to the config.
    pub fn update(&self, f: impl FnOnce(&mut Config)) {
        let mut guard = self.inner.write().expect("config lock poisoned");
        f(&mut guard);
    }

    /// Persist the current config to the file it was loaded from.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.get().save_to(&self.path)
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
