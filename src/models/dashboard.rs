//! Home page counts

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate counts over the whole catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardCounts {
    /// Number of books
    pub num_books: i64,
    /// Number of copies
    pub num_instances: i64,
    /// Number of copies with status Available
    pub num_instances_available: i64,
    /// Number of authors
    pub num_authors: i64,
    /// Number of genres
    pub num_genres: i64,
    /// Number of books whose title contains the highlighted word
    pub num_books_word: i64,
}
