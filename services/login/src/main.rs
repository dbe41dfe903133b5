use sea_orm::Database;
use tracing::info;

use conecta_core::tracing::init_tracing;
use conecta_login::config::LoginConfig;
use conecta_login::router::build_router;
use conecta_login::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = LoginConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        http: reqwest::Client::new(),
        identity_url: config.identity_url,
        identity_service_key: config.identity_service_key,
        identity_anon_key: config.identity_anon_key,
        delivery_webhook_url: config.delivery_webhook_url,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.login_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("login service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
