//! Application layer - Use cases and orchestration
//!
//! Contains the wind query orchestration, the alert settings manager, the
//! query state container and the port definitions they depend on.

pub mod error;
pub mod ports;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
