//! Settings storage port
//!
//! A string key-value capability, shaped after browser local storage.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisted user settings
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a value; `None` if the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SettingsStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SettingsStore>();
    }
}
