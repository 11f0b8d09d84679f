//! Alert settings handlers

use axum::{Json, extract::State};
use domain::{
    ALERT_THRESHOLD_STEP_KMH, AlertSettings, MAX_ALERT_THRESHOLD_KMH, MIN_ALERT_THRESHOLD_KMH,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Current alert settings plus the bounds of the threshold control
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertSettingsResponse {
    /// Speed at or above which the alert fires (km/h)
    pub threshold_kmh: u32,
    /// Whether alerts are switched on
    pub enabled: bool,
    pub min_kmh: u32,
    pub max_kmh: u32,
    pub step_kmh: u32,
}

impl From<AlertSettings> for AlertSettingsResponse {
    fn from(settings: AlertSettings) -> Self {
        Self {
            threshold_kmh: settings.threshold_kmh,
            enabled: settings.enabled,
            min_kmh: MIN_ALERT_THRESHOLD_KMH,
            max_kmh: MAX_ALERT_THRESHOLD_KMH,
            step_kmh: ALERT_THRESHOLD_STEP_KMH,
        }
    }
}

/// New alert threshold
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ThresholdRequest {
    /// Threshold in km/h; 10 to 150 in steps of 5
    #[validate(range(min = 10, max = 150, message = "must be between 10 and 150 km/h"))]
    pub threshold: u32,
}

/// Get the current alert settings
#[utoipa::path(
    get,
    path = "/v1/settings/alerts",
    tag = "settings",
    responses(
        (status = 200, description = "Current alert settings", body = AlertSettingsResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_alerts(State(state): State<AppState>) -> Json<AlertSettingsResponse> {
    Json(state.settings_service.current().into())
}

/// Set and persist the alert threshold
#[utoipa::path(
    put,
    path = "/v1/settings/alerts/threshold",
    tag = "settings",
    request_body = ThresholdRequest,
    responses(
        (status = 200, description = "Threshold saved", body = AlertSettingsResponse),
        (status = 400, description = "Threshold out of range or off-step", body = crate::error::ErrorResponse),
        (status = 500, description = "Settings could not be saved", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(threshold = request.threshold))]
pub async fn set_threshold(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ThresholdRequest>,
) -> Result<Json<AlertSettingsResponse>, ApiError> {
    if request.threshold % ALERT_THRESHOLD_STEP_KMH != 0 {
        return Err(ApiError::BadRequest(format!(
            "threshold must be a multiple of {ALERT_THRESHOLD_STEP_KMH} km/h"
        )));
    }

    let settings = state.settings_service.set_threshold(request.threshold).await?;
    Ok(Json(settings.into()))
}

/// Flip the alert switch and persist it
#[utoipa::path(
    post,
    path = "/v1/settings/alerts/toggle",
    tag = "settings",
    responses(
        (status = 200, description = "Alerts toggled", body = AlertSettingsResponse),
        (status = 500, description = "Settings could not be saved", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn toggle_alerts(
    State(state): State<AppState>,
) -> Result<Json<AlertSettingsResponse>, ApiError> {
    let settings = state.settings_service.toggle().await?;
    Ok(Json(settings.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_bounds_match_domain_constants() {
        let at = |threshold| ThresholdRequest { threshold }.validate();
        assert!(at(MIN_ALERT_THRESHOLD_KMH).is_ok());
        assert!(at(MAX_ALERT_THRESHOLD_KMH).is_ok());
        assert!(at(MIN_ALERT_THRESHOLD_KMH - 1).is_err());
        assert!(at(MAX_ALERT_THRESHOLD_KMH + 1).is_err());
    }

    #[test]
    fn response_carries_control_bounds() {
        let resp = AlertSettingsResponse::from(AlertSettings::new(95, false));
        assert_eq!(resp.threshold_kmh, 95);
        assert!(!resp.enabled);
        assert_eq!(resp.min_kmh, 10);
        assert_eq!(resp.max_kmh, 150);
        assert_eq!(resp.step_kmh, 5);
    }

    #[test]
    fn threshold_request_rejects_negative_json() {
        let result = serde_json::from_str::<ThresholdRequest>(r#"{"threshold": -5}"#);
        assert!(result.is_err());
    }
}
