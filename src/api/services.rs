use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{
    error::ApiError,
    models::{HealthResponse, NoticesResponse, ShipperSettingsRequest},
    state::AppState,
};
use crate::hooks::{self, TrackingSubmission};

/// Shipper settings form (GET /settings/shippers)
///
/// Lists the slots the settings page renders: every named slot plus one
/// trailing empty slot for the next shipper.
pub async fn get_shipper_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let form = hooks::settings_form(&state)?;
    Ok(Json(form))
}

/// Save shipper settings (PUT /settings/shippers)
///
/// Entries are stored verbatim. Responds with the refreshed form, which
/// already offers a slot for the next shipper.
pub async fn put_shipper_settings(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: ShipperSettingsRequest = serde_json::from_slice(&body)?;
    hooks::save_shipper_settings(&state, &request.entries)?;

    let form = hooks::settings_form(&state)?;
    Ok(Json(form))
}

/// Shipper dropdown options (GET /shippers)
pub async fn list_shippers(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let options = hooks::shipper_options(&state)?;
    Ok(Json(options))
}

/// Save order tracking (PUT /orders/{order_id}/tracking)
///
/// Returns 204 when saved or when both fields were left empty, 422 when
/// either field is malformed. A rejected save also raises the admin notice.
pub async fn put_order_tracking(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let submission: TrackingSubmission = serde_json::from_slice(&body)?;
    hooks::save_order_tracking(&state, order_id, &submission)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Order tracking display (GET /orders/{order_id}/tracking)
///
/// Used by both the order page and the confirmation email. 204 means there
/// is nothing to show: no tracking saved, or its shipper no longer exists.
pub async fn get_order_tracking(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
) -> Result<Response, ApiError> {
    let response = match hooks::order_tracking_display(&state, order_id)? {
        Some(payload) => (StatusCode::OK, Json(payload)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };

    Ok(response)
}

/// Order editor box (GET /orders/{order_id}/tracking/edit)
///
/// Always 200: the raw stored values are shown even when they no longer
/// resolve to a shipper.
pub async fn get_order_tracking_editor(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let editor = hooks::order_tracking_editor(&state, order_id)?;
    Ok(Json(editor))
}

/// Pending admin notices (GET /admin/notices)
///
/// Reading the notices clears them.
pub async fn take_notices(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notices = hooks::take_admin_notices(&state)?;
    Ok(Json(NoticesResponse { notices }))
}

/// Health check endpoint (GET /health)
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        metrics: state.metrics.snapshot(),
        store: state.store.stats()?,
    };

    Ok((StatusCode::OK, Json(response)))
}
