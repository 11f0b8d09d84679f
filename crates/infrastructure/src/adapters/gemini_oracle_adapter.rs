//! Gemini oracle adapter - Implements WindOraclePort using integration_gemini

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{Illustration, Narrative, WindOraclePort},
    prompts,
};
use async_trait::async_trait;
use domain::{Citation, LocationQuery, WindExtraction};
use integration_gemini::{
    GeminiClient, GeminiConfig, GeminiError, GenerateContentRequest, GenerateContentResponse,
    HttpGeminiClient,
};
use tracing::{debug, instrument};

/// Model names used for the three oracle stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiModels {
    pub narrative: String,
    pub extraction: String,
    pub image: String,
}

impl From<&GeminiConfig> for GeminiModels {
    fn from(config: &GeminiConfig) -> Self {
        Self {
            narrative: config.narrative_model.clone(),
            extraction: config.extraction_model.clone(),
            image: config.image_model.clone(),
        }
    }
}

/// Adapter answering wind questions with Gemini
pub struct GeminiOracleAdapter {
    client: Arc<dyn GeminiClient>,
    models: GeminiModels,
}

impl std::fmt::Debug for GeminiOracleAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiOracleAdapter")
            .field("client", &"GeminiClient")
            .field("models", &self.models)
            .finish()
    }
}

impl GeminiOracleAdapter {
    /// Create an adapter backed by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails to initialize.
    pub fn new(config: GeminiConfig) -> Result<Self, ApplicationError> {
        let models = GeminiModels::from(&config);
        let client = HttpGeminiClient::new(config).map_err(|e| match e {
            GeminiError::AuthenticationFailed(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Internal(other.to_string()),
        })?;
        Ok(Self::with_client(Arc::new(client), models))
    }

    /// Create an adapter on top of any client
    pub fn with_client(client: Arc<dyn GeminiClient>, models: GeminiModels) -> Self {
        Self { client, models }
    }

    /// Map integration error to application error
    fn map_error(err: GeminiError) -> ApplicationError {
        ApplicationError::Oracle(err.to_string())
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApplicationError> {
        self.client
            .generate_content(model, request)
            .await
            .map_err(Self::map_error)
    }

    /// Web grounding chunks as citations, in response order
    fn citations(response: &GenerateContentResponse) -> Vec<Citation> {
        response
            .grounding_chunks()
            .iter()
            .filter_map(|chunk| chunk.web.as_ref())
            .map(|web| Citation::new(web.title.clone(), web.uri.clone()))
            .collect()
    }
}

#[async_trait]
impl WindOraclePort for GeminiOracleAdapter {
    #[instrument(skip(self), fields(model = %self.models.narrative))]
    async fn narrate(&self, query: &LocationQuery) -> Result<Narrative, ApplicationError> {
        let request =
            GenerateContentRequest::from_prompt(prompts::narrative_prompt(query)).with_google_search();
        let response = self.generate(&self.models.narrative, &request).await?;

        let text = response
            .text()
            .ok_or_else(|| ApplicationError::Oracle("Narrative response contained no text".into()))?;
        let citations = Self::citations(&response);

        debug!(text_len = text.len(), citations = citations.len(), "Narrative generated");
        Ok(Narrative::new(text, citations))
    }

    #[instrument(skip(self, narrative), fields(model = %self.models.extraction))]
    async fn extract(
        &self,
        query: &LocationQuery,
        narrative: &str,
    ) -> Result<WindExtraction, ApplicationError> {
        let request =
            GenerateContentRequest::from_prompt(prompts::extraction_prompt(query, narrative))
                .with_json_response();
        let response = self.generate(&self.models.extraction, &request).await?;

        let text = response.text().unwrap_or_default();
        let extraction = WindExtraction::from_json(text.trim())
            .map_err(|e| ApplicationError::Extraction(e.to_string()))?;

        debug!(
            speed_kmh = extraction.speed_kmh,
            beaufort = extraction.beaufort_scale,
            "Wind data extracted"
        );
        Ok(extraction)
    }

    #[instrument(skip(self, extraction), fields(model = %self.models.image))]
    async fn illustrate(
        &self,
        query: &LocationQuery,
        extraction: &WindExtraction,
    ) -> Result<Option<Illustration>, ApplicationError> {
        let request =
            GenerateContentRequest::from_prompt(prompts::illustration_prompt(query, extraction));
        let response = self.generate(&self.models.image, &request).await?;

        let image = response
            .first_inline_data()
            .map(|data| Illustration::new(data.data.clone()));
        debug!(has_image = image.is_some(), "Illustration generated");
        Ok(image)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
