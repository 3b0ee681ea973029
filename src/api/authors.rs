//! Author endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{AuthorDetail, AuthorSummary, PageQuery, PaginatedResponse},
    AppState,
};

use super::{Path, Query};

/// List authors, 10 per page
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)")
    ),
    responses(
        (status = 200, description = "Page of authors", body = PaginatedResponse<AuthorSummary>),
        (status = 404, description = "Page out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<AuthorSummary>>> {
    let page = state.services.catalog.list_authors(query.page).await?;
    Ok(Json(page))
}

/// Get author details (with their books) by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = AuthorDetail),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AuthorDetail>> {
    let author = state.services.catalog.get_author(id).await?;
    Ok(Json(author))
}
