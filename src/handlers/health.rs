use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::models::Envelope;
use crate::startup::AppState;

/// Liveness probe. Always succeeds and echoes the configured email.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(Envelope::healthy(&state.config.official_email)),
    )
}
