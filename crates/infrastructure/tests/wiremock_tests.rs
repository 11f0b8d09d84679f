//! Integration tests for the Gemini oracle adapter
//!
//! Tests cover:
//! - The full three-stage wind query against a mock Gemini server
//! - Failure collapsing and illustration suppression
//! - Availability checks

#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{ApplicationError, WindOraclePort, WindQueryService};
use domain::LocationQuery;
use integration_gemini::GeminiConfig;
use infrastructure::GeminiOracleAdapter;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEXT_PATH: &str = "/models/gemini-3-flash-preview:generateContent";
const IMAGE_PATH: &str = "/models/gemini-2.5-flash-image:generateContent";

// ============================================================================
// Test Helpers
// ============================================================================

fn adapter_for(server: &MockServer) -> Arc<GeminiOracleAdapter> {
    let config = GeminiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    Arc::new(GeminiOracleAdapter::new(config).expect("adapter"))
}

fn query() -> LocationQuery {
    LocationQuery::new("Bratislava").expect("valid query")
}

async fn mount_narrative(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({"tools": [{"google_search": {}}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "Bratislava: 35 km/h from the northwest, gusts 50."}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://www.shmu.sk", "title": "SHMU"}},
                    {"web": {"uri": "https://www.windy.com", "title": "Windy"}}
                ]}
            }]
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_extraction(server: &MockServer, answer: &str) {
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .and(body_string_contains("35 km/h from the northwest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": answer}]}}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

const EXTRACTION: &str = r#"{
    "location": "Bratislava",
    "speedKmh": 35,
    "gustsKmh": 50,
    "direction": "Northwest",
    "directionDeg": 315,
    "description": "Fresh breeze",
    "beaufortScale": 5,
    "forecast": [{"time": "14:00", "speed": 33}, {"time": "15:00", "speed": 30}]
}"#;

// ============================================================================
// Full query
// ============================================================================

mod wind_query_tests {
    use super::*;

    #[tokio::test]
    async fn resolves_report_with_citations_and_image() {
        let server = MockServer::start().await;
        mount_narrative(&server).await;
        mount_extraction(&server, EXTRACTION).await;
        Mock::given(method("POST"))
            .and(path(IMAGE_PATH))
            .and(body_string_contains("35 km/h"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [
                    {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                ]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = WindQueryService::new(adapter_for(&server));
        let result = service.resolve(&query()).await.expect("resolved");

        assert_eq!(result.citations.len(), 2);
        assert_eq!(result.citations[0].title, "SHMU");
        assert!((result.report.speed_kmh - 35.0).abs() < f64::EPSILON);
        assert_eq!(result.report.beaufort_scale, 5);
        assert_eq!(result.report.forecast.len(), 2);
        assert_eq!(
            result.report.image_uri.as_deref(),
            Some("data:image/png;base64,iVBORw0KGgo=")
        );
    }

    #[tokio::test]
    async fn non_json_extraction_is_generic_failure() {
        let server = MockServer::start().await;
        mount_narrative(&server).await;
        mount_extraction(&server, "The wind is strong today.").await;
        Mock::given(method("POST"))
            .and(path(IMAGE_PATH))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = WindQueryService::new(adapter_for(&server));
        let err = service.resolve(&query()).await.expect_err("must fail");

        assert!(matches!(err, ApplicationError::WindDataUnavailable));
    }

    #[tokio::test]
    async fn image_failure_still_returns_report() {
        let server = MockServer::start().await;
        mount_narrative(&server).await;
        mount_extraction(&server, EXTRACTION).await;
        Mock::given(method("POST"))
            .and(path(IMAGE_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let service = WindQueryService::new(adapter_for(&server));
        let result = service.resolve(&query()).await.expect("resolved");

        assert!(result.report.image_uri.is_none());
        assert_eq!(result.citations.len(), 2);
    }

    #[tokio::test]
    async fn narrative_outage_is_generic_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TEXT_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let service = WindQueryService::new(adapter_for(&server));
        let err = service.resolve(&query()).await.expect_err("must fail");

        assert_eq!(
            err.to_string(),
            "Could not retrieve wind data. Please try again later."
        );
    }
}

// ============================================================================
// Adapter stages
// ============================================================================

mod adapter_tests {
    use super::*;

    #[tokio::test]
    async fn narrate_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TEXT_PATH))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let result = adapter_for(&server).narrate(&query()).await;
        assert!(matches!(result, Err(ApplicationError::Oracle(msg)) if msg.contains("Rate limit")));
    }

    #[tokio::test]
    async fn available_when_models_endpoint_answers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"models": []})))
            .mount(&server)
            .await;

        assert!(adapter_for(&server).is_available().await);
    }

    #[tokio::test]
    async fn unavailable_when_key_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        assert!(!adapter_for(&server).is_available().await);
    }
}
