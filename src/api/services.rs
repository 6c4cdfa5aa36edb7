//! `/api/services` routes.
//!
//! The catalog is public to browse; all mutations are admin-only.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};

use super::{AdminUser, AppState};
use crate::{
    core::catalog::{self, NewService, ServiceChanges},
    entities::ServiceModel,
    errors::Error,
};

/// Routes mounted under `/api/services`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", put(update).delete(remove))
}

/// `GET /api/services` (public): lists the service catalog.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<ServiceModel>>, Error> {
    catalog::list_services(&state.db).await.map(Json)
}

/// `POST /api/services` (admin): adds a service.
async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<NewService>,
) -> Result<(StatusCode, Json<ServiceModel>), Error> {
    let created = catalog::create_service(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/services/:id` (admin): partially updates a service.
async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceChanges>,
) -> Result<Json<ServiceModel>, Error> {
    catalog::update_service(&state.db, id, payload)
        .await
        .map(Json)
}

/// `DELETE /api/services/:id` (admin): removes a service.
async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, Error> {
    catalog::delete_service(&state.db, id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Service deleted successfully" }),
    ))
}
