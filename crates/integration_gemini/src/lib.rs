//! Google Gemini integration
//!
//! Client for the Gemini `generateContent` REST endpoint
//! (<https://ai.google.dev/api/generate-content>). Supports Google Search
//! grounding, JSON response mode and inline image output.

pub mod client;
mod error;
mod models;

pub use client::{GeminiClient, GeminiConfig, HttpGeminiClient};
pub use error::GeminiError;
pub use models::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GroundingChunk, GroundingMetadata, InlineData, Part, Tool, WebSource,
};
