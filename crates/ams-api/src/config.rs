//! # Application Configuration
//!
//! Read once from the process environment at startup. No global mutable
//! state: the resulting [`AppConfig`] is injected into [`AppState`] and
//! shared read-only.
//!
//! [`AppState`]: crate::state::AppState

/// Application configuration.
///
/// Custom `Debug` redacts the database URL, which may embed credentials.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Postgres connection URL. `None` means in-memory mode.
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Default listen port (the legacy service's port).
    pub const DEFAULT_PORT: u16 = 8181;

    /// Build configuration from `PORT` and `DATABASE_URL`.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);
        let database_url = std::env::var("DATABASE_URL").ok();
        Self { port, database_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            database_url: None,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
