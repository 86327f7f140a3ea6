use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness check
///
/// The site serves pages without email settings, so this always answers
/// 200 and reports whether the contact form can deliver.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    let submission = app.config.email.submission();
    let contact_form = if submission.public_key().is_some() && submission.route().is_some() {
        "configured"
    } else {
        "not_configured"
    };

    (
        StatusCode::OK,
        Json(json!({"status": "ready", "contact_form": contact_form})),
    )
}
