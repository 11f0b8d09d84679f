//! Gemini REST wire types
//!
//! Only the subset of the `generateContent` schema this crate uses is
//! modelled. Unknown response fields are ignored.

use serde::{Deserialize, Serialize};

/// MIME type requesting a JSON-only answer
pub const JSON_MIME_TYPE: &str = "application/json";

/// Body of a `models/{model}:generateContent` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn request with one text part
    #[must_use]
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
            tools: Vec::new(),
            generation_config: None,
        }
    }

    /// Enable Google Search grounding
    #[must_use]
    pub fn with_google_search(mut self) -> Self {
        self.tools.push(Tool {
            google_search: Some(GoogleSearch {}),
        });
        self
    }

    /// Ask the model to answer with JSON only
    #[must_use]
    pub fn with_json_response(mut self) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .response_mime_type = Some(JSON_MIME_TYPE.to_string());
        self
    }
}

/// One conversation turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A piece of content: text or inline binary data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Text-only part
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// Base64-encoded binary payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Tool made available to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

/// Marker enabling Google Search grounding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Output options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

/// Response of a `generateContent` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.first_candidate()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
            .iter()
    }

    /// Concatenated text parts of the first candidate
    ///
    /// `None` if the candidate carries no text at all.
    pub fn text(&self) -> Option<String> {
        let mut texts = self.parts().filter_map(|p| p.text.as_deref()).peekable();
        texts.peek()?;
        Some(texts.collect())
    }

    /// First inline data part of the first candidate
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.parts().find_map(|p| p.inline_data.as_ref())
    }

    /// Grounding chunks of the first candidate, in response order
    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.first_candidate()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| m.grounding_chunks.as_slice())
            .unwrap_or_default()
    }
}

/// One generated answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Search grounding attached to a candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// A single grounding source; only web sources are modelled
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// Web page a grounded answer drew on
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
