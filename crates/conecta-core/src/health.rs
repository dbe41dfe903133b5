use axum::Json;
use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};

/// Handler for `GET /healthz` — liveness check with a timestamped body,
/// so external monitors can detect stale cached responses.
pub async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Handler for `GET /readyz` — readiness check (override per service as needed).
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
