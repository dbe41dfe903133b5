use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use conecta_core::health::{healthz, readyz};
use conecta_core::middleware::request_id_layer;

use crate::handlers::{
    login_code::request_login_code, phone::update_phone, session::create_session,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Login endpoints are called from the browser before any session exists;
    // the original deployment served them CORS-open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Login code
        .route("/login/code", post(request_login_code))
        // Session
        .route("/login/session", post(create_session))
        // Account phone
        .route("/login/phone", patch(update_phone))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
