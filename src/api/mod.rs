//! HTTP surface of the `SibLore` backend.
//!
//! Handlers stay thin: deserialize the request, call into [`crate::core`],
//! serialize the result. Public and admin routes share paths; admin-only
//! handlers take an [`AdminUser`] argument, which rejects the request with
//! 401 before the handler body runs. Every failure is rendered as a JSON
//! envelope by the [`IntoResponse`] impl in this module.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::AuthConfig, errors::Error};

pub mod auth;
pub mod bookings;
pub mod contracts;
pub mod dashboard;
pub mod events;
pub mod products;
pub mod services;

pub use auth::AdminUser;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Live database handle.
    pub db: DatabaseConnection,
    /// Admin secrets used by [`AdminUser`] and the login endpoint.
    pub auth: AuthConfig,
}

impl AppState {
    /// Bundles a database connection and admin secrets into handler state.
    #[must_use]
    pub fn new(db: DatabaseConnection, auth: AuthConfig) -> Self {
        Self { db, auth }
    }
}

/// JSON envelope returned for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error detail payload.
    pub error: ErrorDetail,
}

/// Machine-readable code plus human-readable message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code, e.g. `VALIDATION_ERROR`.
    pub code: String,
    /// Description safe to show to API clients.
    pub message: String,
}

impl Error {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Error::Authorization { .. } => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            Error::Aggregation { .. } | Error::Database(_) | Error::Config { .. } | Error::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // 5xx details stay in the logs; clients get a generic message.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the complete application router.
///
/// CORS is wide open because the public site is served from a different
/// origin; admin routes are protected by the bearer token, not by CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth::routes())
        .nest("/api/bookings", bookings::routes())
        .nest("/api/contracts", contracts::routes())
        .nest("/api/dashboard", dashboard::routes())
        .nest("/api/services", services::routes())
        .nest("/api/events", events::routes())
        .nest("/api/products", products::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `GET /health` - liveness probe, no authentication.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "SibLore API is running",
    }))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::Result;
    use crate::test_utils::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn response_parts(err: Error) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_validation_maps_to_bad_request() {
        let (status, body) = response_parts(Error::validation("Email is required")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert_eq!(body.error.message, "Validation error: Email is required");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let err = Error::NotFound {
            entity: "booking",
            id: 7,
        };
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.code, "NOT_FOUND");
        assert_eq!(body.error.message, "booking not found: 7");
    }

    #[tokio::test]
    async fn test_authorization_maps_to_401() {
        let err = Error::Authorization {
            message: "Invalid admin token".to_string(),
        };
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error.code, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_internal_errors_hide_details() {
        let err = Error::Database(sea_orm::DbErr::Custom(
            "secret connection string leaked".to_string(),
        ));
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        assert_eq!(body.error.message, "An internal error occurred");
        assert!(!body.error.message.contains("secret"));
    }

    #[tokio::test]
    async fn test_aggregation_failure_is_internal() {
        let err = Error::Aggregation {
            source: sea_orm::DbErr::Custom("read failed".to_string()),
        };
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.message, "An internal error occurred");
    }

    #[tokio::test]
    async fn test_health_endpoint() -> Result<()> {
        let (app, _db) = setup_test_app().await?;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "SibLore API is running");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() -> Result<()> {
        let (app, _db) = setup_test_app().await?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
