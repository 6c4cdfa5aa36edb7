//! Admin authentication: bearer-token checks and the login exchange.
//!
//! There is a single admin identity backed by two secrets from the
//! environment: `ADMIN_PASSWORD`, which the login endpoint accepts, and
//! `ADMIN_TOKEN`, the bearer secret it hands back for subsequent requests.
//! When either secret is unset the corresponding surface stays locked, so
//! a misconfigured deployment fails closed instead of open.

use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::{header, request::Parts},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use super::AppState;
use crate::errors::Error;

/// Routes mounted under `/api/auth`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/check", get(check))
}

/// Compares a presented secret against the expected one in constant time.
///
/// On a length mismatch a dummy comparison still runs so the reply time
/// does not leak the expected secret's length.
fn constant_time_token_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Proof that the request carried a valid admin bearer token.
///
/// Admin-only handlers take this as an argument; extraction runs before the
/// handler body, so an unauthorized request is rejected without touching
/// the database. With no token configured every admin route returns 401.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let Some(expected) = state.auth.token.as_deref() else {
            return Err(Error::Authorization {
                message: "Admin access is not configured".to_string(),
            });
        };

        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| Error::Authorization {
                message: "Missing authorization header".to_string(),
            })?;

        let provided = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| Error::Authorization {
                message: "Authorization header must use the Bearer scheme".to_string(),
            })?;

        if constant_time_token_eq(provided, expected) {
            Ok(Self)
        } else {
            Err(Error::Authorization {
                message: "Invalid admin token".to_string(),
            })
        }
    }
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email shown in the admin UI; echoed back, never checked.
    pub email: String,
    /// Admin password to exchange for the bearer token.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent admin requests.
    pub token: String,
    /// The admin identity as the UI displays it.
    pub user: AdminProfile,
}

/// The single admin identity.
#[derive(Debug, Serialize)]
pub struct AdminProfile {
    /// Email the admin logged in with.
    pub email: String,
    /// Always `"admin"`.
    pub role: &'static str,
}

/// `POST /api/auth/login` (public).
///
/// Exchanges the admin password for the API bearer token. Any email is
/// accepted; only the password is verified.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Error> {
    let (Some(password), Some(token)) =
        (state.auth.password.as_deref(), state.auth.token.as_deref())
    else {
        return Err(Error::Authorization {
            message: "Admin login is not configured".to_string(),
        });
    };

    if !constant_time_token_eq(&payload.password, password) {
        return Err(Error::Authorization {
            message: "Invalid credentials".to_string(),
        });
    }

    Ok(Json(LoginResponse {
        token: token.to_string(),
        user: AdminProfile {
            email: payload.email,
            role: "admin",
        },
    }))
}

/// `GET /api/auth/check` (admin).
///
/// Succeeds only with a valid bearer token; the body confirms the role.
async fn check(_admin: AdminUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "authenticated": true,
        "user": { "role": "admin" },
    }))
}
