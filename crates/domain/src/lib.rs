//! Domain layer for WindWatch
//!
//! Contains the wind report model, alert settings and the derived-value rules.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
