//! Wind query handlers
//!
//! Searches run the three-stage query synchronously and answer with the
//! resulting view state. The same view is available at any time from
//! `GET /v1/wind/state`, including while a query is in flight.

use application::{QueryPhase, QuerySnapshot};
use axum::{Json, extract::State};
use domain::{Citation, ForecastPoint, GeoLocation, LocationQuery, WindMetrics, WindReport};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::Validate;

use super::settings::AlertSettingsResponse;
use crate::{
    error::ApiError,
    middleware::ValidatedJson,
    state::{AppState, QueryOutcome},
};

/// Free-text location search
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SearchRequest {
    /// Place name or coordinates
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub query: String,
}

/// Outcome of the client's device location request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationStatus {
    Granted,
    Denied,
}

/// Device location, or the fact that it is unavailable
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GeolocationRequest {
    pub status: GeolocationStatus,
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ForecastPointView {
    /// Hour label, e.g. `14:00`
    pub time: String,
    pub speed_kmh: f64,
}

impl From<&ForecastPoint> for ForecastPointView {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            time: point.time.clone(),
            speed_kmh: point.speed,
        }
    }
}

/// A wind report as shown to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WindReportView {
    pub location: String,
    pub speed_kmh: f64,
    pub gusts_kmh: Option<f64>,
    pub direction: String,
    pub direction_deg: f64,
    pub description: String,
    pub beaufort_scale: i32,
    /// RFC 3339 capture time
    pub captured_at: String,
    /// Local capture time as `HH:MM:SS`
    pub captured_time: String,
    /// PNG `data:` URI, absent when no illustration was produced
    pub image_uri: Option<String>,
    pub forecast: Vec<ForecastPointView>,
}

impl From<&WindReport> for WindReportView {
    fn from(report: &WindReport) -> Self {
        Self {
            location: report.location.clone(),
            speed_kmh: report.speed_kmh,
            gusts_kmh: report.gusts_kmh,
            direction: report.direction.clone(),
            direction_deg: report.direction_deg,
            description: report.description.clone(),
            beaufort_scale: report.beaufort_scale,
            captured_at: report.captured_at.to_rfc3339(),
            captured_time: report.captured_time_label(),
            image_uri: report.image_uri.clone(),
            forecast: report.forecast.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CitationView {
    pub title: String,
    pub uri: String,
    /// Whether `uri` points somewhere real
    pub has_link: bool,
}

impl From<&Citation> for CitationView {
    fn from(citation: &Citation) -> Self {
        Self {
            title: citation.title.clone(),
            uri: citation.uri.clone(),
            has_link: citation.has_link(),
        }
    }
}

/// Unit conversions and labels derived from the report
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WindMetricsView {
    pub speed_ms: f64,
    pub speed_knots: f64,
    /// `stable` up to 50 km/h, `unstable` above
    pub stability: String,
    pub beaufort_label: String,
}

impl From<WindMetrics> for WindMetricsView {
    fn from(metrics: WindMetrics) -> Self {
        Self {
            speed_ms: metrics.speed_ms,
            speed_knots: metrics.speed_knots,
            stability: metrics.stability.to_string(),
            beaufort_label: metrics.beaufort_label,
        }
    }
}

/// Everything the wind screen displays
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WindStateResponse {
    /// `idle`, `loading`, `loaded` or `errored`
    #[schema(value_type = String, example = "loaded")]
    pub phase: QueryPhase,
    pub loading: bool,
    /// Query of the latest search
    pub query: Option<String>,
    /// User-facing error of the latest search
    pub error: Option<String>,
    pub report: Option<WindReportView>,
    pub citations: Vec<CitationView>,
    pub metrics: Option<WindMetricsView>,
    pub alert: AlertSettingsResponse,
    /// Whether the shown report crosses the enabled alert threshold
    pub alert_active: bool,
}

impl WindStateResponse {
    /// Build the view from the current session and alert settings
    pub fn from_state(state: &AppState) -> Self {
        let QuerySnapshot {
            phase,
            query,
            report,
            citations,
            error,
        } = state.session.snapshot();

        Self {
            phase,
            loading: phase == QueryPhase::Loading,
            query: query.map(String::from),
            error,
            alert_active: state.settings_service.is_alert_active(report.as_ref()),
            metrics: report.as_ref().map(|r| WindMetrics::from_report(r).into()),
            report: report.as_ref().map(Into::into),
            citations: citations.iter().map(Into::into).collect(),
            alert: state.settings_service.current().into(),
        }
    }
}

/// Search wind conditions for a place name or coordinates
#[utoipa::path(
    post,
    path = "/v1/wind/search",
    tag = "wind",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Query finished or was superseded", body = WindStateResponse),
        (status = 400, description = "Empty query", body = crate::error::ErrorResponse),
        (status = 502, description = "Wind data could not be retrieved", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(query_len = request.query.len()))]
pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SearchRequest>,
) -> Result<Json<WindStateResponse>, ApiError> {
    let query =
        LocationQuery::new(&request.query).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    run_and_respond(&state, &query).await
}

/// Report the device location, or that it could not be obtained
#[utoipa::path(
    post,
    path = "/v1/wind/geolocation",
    tag = "wind",
    request_body = GeolocationRequest,
    responses(
        (status = 200, description = "Query finished, or location failure recorded", body = WindStateResponse),
        (status = 400, description = "Missing or invalid coordinates", body = crate::error::ErrorResponse),
        (status = 502, description = "Wind data could not be retrieved", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(status = ?request.status))]
pub async fn geolocation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GeolocationRequest>,
) -> Result<Json<WindStateResponse>, ApiError> {
    match request.status {
        GeolocationStatus::Denied => {
            info!("Device location unavailable");
            state.session.fail_geolocation();
            Ok(Json(WindStateResponse::from_state(&state)))
        },
        GeolocationStatus::Granted => {
            let (Some(latitude), Some(longitude)) = (request.latitude, request.longitude) else {
                return Err(ApiError::BadRequest(
                    "latitude and longitude are required when status is granted".to_string(),
                ));
            };
            let location = GeoLocation::new(latitude, longitude)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            run_and_respond(&state, &LocationQuery::from_coordinates(&location)).await
        },
    }
}

/// Current wind view state
#[utoipa::path(
    get,
    path = "/v1/wind/state",
    tag = "wind",
    responses(
        (status = 200, description = "Current view state", body = WindStateResponse)
    )
)]
pub async fn current_state(State(state): State<AppState>) -> Json<WindStateResponse> {
    Json(WindStateResponse::from_state(&state))
}

async fn run_and_respond(
    state: &AppState,
    query: &LocationQuery,
) -> Result<Json<WindStateResponse>, ApiError> {
    match state.run_query(query).await {
        QueryOutcome::Recorded(Err(e)) => Err(e.into()),
        QueryOutcome::Recorded(Ok(_)) | QueryOutcome::Superseded => {
            Ok(Json(WindStateResponse::from_state(state)))
        },
    }
}
