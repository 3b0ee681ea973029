//! Home page endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::DashboardCounts, AppState};

/// Catalog counts for the home page
#[utoipa::path(
    get,
    path = "/",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog counts", body = DashboardCounts)
    )
)]
pub async fn index(State(state): State<AppState>) -> AppResult<Json<DashboardCounts>> {
    let counts = state.services.catalog.dashboard().await?;
    Ok(Json(counts))
}
