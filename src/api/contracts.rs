//! `/api/contracts` routes.
//!
//! Clients sign contracts publicly and can retrieve their own copy by id;
//! listing and status changes are admin-only.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use super::{AdminUser, AppState};
use crate::{
    core::contract::{self, NewContract},
    entities::{ContractModel, contract::ContractStatus},
    errors::Error,
};

/// Routes mounted under `/api/contracts`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(get_one).put(update_status))
}

/// `POST /api/contracts` (public): stores a signed contract.
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewContract>,
) -> Result<(StatusCode, Json<ContractModel>), Error> {
    let created = contract::sign_contract(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/contracts` (admin): lists every contract, newest first.
async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContractModel>>, Error> {
    contract::list_contracts(&state.db).await.map(Json)
}

/// `GET /api/contracts/:id` (public): fetches one contract.
///
/// Public so a client can reopen their signed copy from an emailed link.
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContractModel>, Error> {
    contract::get_contract(&state.db, id).await.map(Json)
}

/// Status payload for `PUT /api/contracts/:id`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdate {
    status: ContractStatus,
    deposit_paid: bool,
}

/// `PUT /api/contracts/:id` (admin): moves a contract through its
/// lifecycle, updating the status and deposit flag together.
async fn update_status(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<ContractModel>, Error> {
    contract::update_contract_status(&state.db, id, payload.status, payload.deposit_paid)
        .await
        .map(Json)
}
