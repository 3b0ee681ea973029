//! Book endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{BookDetail, BookSummary, PageQuery, PaginatedResponse},
    AppState,
};

use super::{Path, Query};

/// List books, 10 per page
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)")
    ),
    responses(
        (status = 200, description = "Page of books", body = PaginatedResponse<BookSummary>),
        (status = 404, description = "Page out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<BookSummary>>> {
    let page = state.services.catalog.list_books(query.page).await?;
    Ok(Json(page))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetail),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookDetail>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}
