//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, dashboard, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Local Library API",
        version = "0.1.0",
        description = "Read-only library catalog API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        dashboard::index,
        books::list_books,
        books::get_book,
        authors::list_authors,
        authors::get_author,
    ),
    components(
        schemas(
            crate::models::DashboardCounts,
            crate::models::BookSummary,
            crate::models::BookDetail,
            crate::models::AuthorSummary,
            crate::models::AuthorDetail,
            crate::models::BookInstance,
            crate::models::LoanStatus,
            crate::models::Genre,
            crate::models::Language,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Catalog overview"),
        (name = "books", description = "Books"),
        (name = "authors", description = "Authors")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
