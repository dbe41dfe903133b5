/// Login service configuration loaded from environment variables.
#[derive(Debug)]
pub struct LoginConfig {
    /// PostgreSQL connection URL (code store).
    pub database_url: String,
    /// Identity provider base URL (e.g. "https://auth.example.com/auth/v1").
    pub identity_url: String,
    /// Service-role key for the identity provider's admin endpoints.
    pub identity_service_key: String,
    /// Public (anon) key for the identity provider's sign-in endpoint.
    pub identity_anon_key: String,
    /// Message-dispatch webhook that generates and delivers login codes.
    pub delivery_webhook_url: String,
    /// TCP port to listen on (default 3114). Env var: `LOGIN_PORT`.
    pub login_port: u16,
}

impl LoginConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            identity_url: std::env::var("IDENTITY_URL").expect("IDENTITY_URL"),
            identity_service_key: std::env::var("IDENTITY_SERVICE_KEY")
                .expect("IDENTITY_SERVICE_KEY"),
            identity_anon_key: std::env::var("IDENTITY_ANON_KEY").expect("IDENTITY_ANON_KEY"),
            delivery_webhook_url: std::env::var("DELIVERY_WEBHOOK_URL")
                .expect("DELIVERY_WEBHOOK_URL"),
            login_port: std::env::var("LOGIN_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
        }
    }
}
