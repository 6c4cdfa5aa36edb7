//! `/api/bookings` routes.
//!
//! Submission is public so site visitors can request appointments; review,
//! listing and deletion are admin-only.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
};
use serde::Deserialize;

use super::{AdminUser, AppState};
use crate::{
    core::booking::{self, BookingDecision, NewBooking},
    entities::BookingModel,
    errors::Error,
};

/// Routes mounted under `/api/bookings`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", put(update).delete(remove))
}

/// `POST /api/bookings` (public): submits a booking request.
///
/// The stored booking always starts out Pending regardless of the payload.
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> Result<(StatusCode, Json<BookingModel>), Error> {
    let created = booking::submit_booking(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/bookings` (admin): lists every booking, newest first.
async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingModel>>, Error> {
    booking::list_bookings(&state.db).await.map(Json)
}

/// Review decision payload for `PUT /api/bookings/:id`.
#[derive(Debug, Deserialize)]
struct DecisionPayload {
    status: BookingDecision,
}

/// `PUT /api/bookings/:id` (admin): approves or rejects a booking.
async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DecisionPayload>,
) -> Result<Json<BookingModel>, Error> {
    booking::decide_booking(&state.db, id, payload.status)
        .await
        .map(Json)
}

/// `DELETE /api/bookings/:id` (admin): removes a booking.
async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, Error> {
    booking::delete_booking(&state.db, id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Booking deleted successfully" }),
    ))
}
