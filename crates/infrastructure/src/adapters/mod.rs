//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod gemini_oracle_adapter;
mod in_memory_settings_store;

pub use gemini_oracle_adapter::{GeminiModels, GeminiOracleAdapter};
pub use in_memory_settings_store::InMemorySettingsStore;
