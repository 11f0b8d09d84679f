//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod settings_store;
mod wind_oracle_port;

#[cfg(test)]
pub use settings_store::MockSettingsStore;
pub use settings_store::SettingsStore;
#[cfg(test)]
pub use wind_oracle_port::MockWindOraclePort;
pub use wind_oracle_port::{Illustration, Narrative, WindOraclePort};
