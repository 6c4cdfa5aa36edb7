//! Application settings loaded from the environment.
//!
//! All runtime knobs come from environment variables (usually via `.env`),
//! with defaults chosen so a fresh checkout runs locally without any setup:
//! port 5000, a local `SQLite` file, and the catalog seed next to the binary.
//! The two admin secrets have no defaults; when they are unset the admin
//! surface stays locked (requests fail with 401 rather than falling open).

use std::fmt;

/// Admin authentication secrets.
///
/// `token` is the bearer secret admin requests must present; `password` is
/// what the login endpoint exchanges for that token. Both are optional so a
/// public-only deployment can simply omit them.
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared bearer secret for admin routes.
    pub token: Option<String>,
    /// Password accepted by the login endpoint.
    pub password: Option<String>,
}

// Keep secrets out of logs even when the config is debug-printed.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server binds.
    pub port: u16,
    /// `SeaORM` connection string.
    pub database_url: String,
    /// Path of the TOML service catalog used for first-run seeding.
    pub catalog_path: String,
    /// Admin secrets.
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn load() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://siblore.sqlite?mode=rwc".to_string()),
            catalog_path: std::env::var("SEED_CATALOG")
                .unwrap_or_else(|_| "catalog.toml".to_string()),
            auth: AuthConfig {
                token: non_empty(std::env::var("ADMIN_TOKEN").ok()),
                password: non_empty(std::env::var("ADMIN_PASSWORD").ok()),
            },
        }
    }
}

/// Parses the `PORT` variable, falling back to 5000 on absence or garbage.
fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(5000)
}

/// Treats empty or whitespace-only secrets as unset.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|v| !v.trim().is_empty())
}
