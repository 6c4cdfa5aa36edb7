//! `/api/dashboard` routes.

use axum::{Json, Router, extract::State, routing::get};

use super::{AdminUser, AppState};
use crate::{
    core::dashboard::{self, DashboardStats},
    errors::Error,
};

/// Routes mounted under `/api/dashboard`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}

/// `GET /api/dashboard/stats` (admin): the aggregated admin overview.
async fn stats(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, Error> {
    dashboard::compute_dashboard_stats(&state.db)
        .await
        .map(Json)
}
