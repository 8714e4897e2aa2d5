//! Thread-safe configuration storage.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::types::Config;

/// Shared config container. Command-line overrides are applied through
/// [`ConfigStore::update`] before the UI reads a snapshot with `get`.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
}

impl ConfigStore {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-memory change (e.g. a CLI override).
    pub fn update(&self, f: impl FnOnce(&mut Config)) {
        f(&mut self.inner.write());
    }
}
