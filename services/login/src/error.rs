use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Login service domain error variants.
///
/// "Phone unrecognized" is deliberately NOT here — the request-login flow
/// reports it as a 200 outcome with a `not_found` flag so the frontend can
/// branch without treating it as a failure.
#[derive(Debug, thiserror::Error)]
pub enum LoginServiceError {
    #[error("{0} is required")]
    MissingField(&'static str),
    /// Wrong, expired, or already-consumed code, or unknown phone. The
    /// message stays generic so a guesser learns nothing about which part
    /// of the guess was wrong.
    #[error("invalid or expired code")]
    InvalidCode,
    #[error("code has no linked account")]
    OrphanCode,
    #[error("unauthorized")]
    Unauthorized,
    #[error("code delivery failed: {0}")]
    Delivery(String),
    #[error("session issuance failed: {0}")]
    Session(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl LoginServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "VALIDATION",
            Self::InvalidCode => "INVALID_CODE",
            Self::OrphanCode => "INTEGRITY",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Delivery(_) => "DELIVERY",
            Self::Session(_) => "SESSION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for LoginServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingField(_)
            | Self::InvalidCode
            | Self::OrphanCode
            | Self::Delivery(_)
            | Self::Session(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        (status, axum::Json(body)).into_response()
    }
}
