//! HTTP request handlers

pub mod health;
pub mod settings;
pub mod wind;
