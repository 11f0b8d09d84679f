//! In-memory settings store
//!
//! Non-persistent `SettingsStore` for tests and for running without a
//! database file.

use std::collections::HashMap;

use application::{error::ApplicationError, ports::SettingsStore};
use async_trait::async_trait;
use parking_lot::RwLock;

/// Settings store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
