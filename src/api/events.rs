//! `/api/events` routes.
//!
//! Events are browsable by anyone, individually and as a list; creation,
//! editing and removal are admin-only.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use super::{AdminUser, AppState};
use crate::{
    core::catalog::{self, EventChanges, NewEvent},
    entities::EventModel,
    errors::Error,
};

/// Routes mounted under `/api/events`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
}

/// `GET /api/events` (public): lists all events.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<EventModel>>, Error> {
    catalog::list_events(&state.db).await.map(Json)
}

/// `GET /api/events/:id` (public): fetches one event.
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EventModel>, Error> {
    catalog::get_event(&state.db, id).await.map(Json)
}

/// `POST /api/events` (admin): adds an event.
async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<NewEvent>,
) -> Result<(StatusCode, Json<EventModel>), Error> {
    let created = catalog::create_event(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/events/:id` (admin): partially updates an event.
async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EventChanges>,
) -> Result<Json<EventModel>, Error> {
    catalog::update_event(&state.db, id, payload).await.map(Json)
}

/// `DELETE /api/events/:id` (admin): removes an event.
async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, Error> {
    catalog::delete_event(&state.db, id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Event deleted successfully" }),
    ))
}
