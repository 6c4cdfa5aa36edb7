//! `/api/products` routes.
//!
//! Shop products mirror the event surface: public reads, admin writes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use super::{AdminUser, AppState};
use crate::{
    core::catalog::{self, NewProduct, ProductChanges},
    entities::ProductModel,
    errors::Error,
};

/// Routes mounted under `/api/products`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
}

/// `GET /api/products` (public): lists all products.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductModel>>, Error> {
    catalog::list_products(&state.db).await.map(Json)
}

/// `GET /api/products/:id` (public): fetches one product.
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductModel>, Error> {
    catalog::get_product(&state.db, id).await.map(Json)
}

/// `POST /api/products` (admin): adds a product.
async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<(StatusCode, Json<ProductModel>), Error> {
    let created = catalog::create_product(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/products/:id` (admin): partially updates a product.
async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductChanges>,
) -> Result<Json<ProductModel>, Error> {
    catalog::update_product(&state.db, id, payload)
        .await
        .map(Json)
}

/// `DELETE /api/products/:id` (admin): removes a product.
async fn remove(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, Error> {
    catalog::delete_product(&state.db, id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Product deleted successfully" }),
    ))
}
