//! Read access to the catalog, as consumed by the service layer

use async_trait::async_trait;

use super::Repository;
use crate::{
    error::AppResult,
    models::{AuthorDetail, AuthorSummary, BookDetail, BookSummary, LoanStatus},
};

/// Read-only catalog queries. Implemented by [`Repository`] over Postgres.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn ping(&self) -> AppResult<()>;

    async fn count_books(&self) -> AppResult<i64>;
    async fn count_books_with_title_containing(&self, needle: &str) -> AppResult<i64>;
    async fn count_book_instances(&self) -> AppResult<i64>;
    async fn count_book_instances_with_status(&self, status: LoanStatus) -> AppResult<i64>;
    async fn count_authors(&self) -> AppResult<i64>;
    async fn count_genres(&self) -> AppResult<i64>;

    async fn list_books(&self, limit: i64, offset: i64) -> AppResult<Vec<BookSummary>>;
    /// Fails with `NotFound` when no book has this id
    async fn get_book(&self, id: i64) -> AppResult<BookDetail>;

    async fn list_authors(&self, limit: i64, offset: i64) -> AppResult<Vec<AuthorSummary>>;
    /// Fails with `NotFound` when no author has this id
    async fn get_author(&self, id: i64) -> AppResult<AuthorDetail>;
}

#[async_trait]
impl CatalogStore for Repository {
    async fn ping(&self) -> AppResult<()> {
        Repository::ping(self).await
    }

    async fn count_books(&self) -> AppResult<i64> {
        self.books_count().await
    }

    async fn count_books_with_title_containing(&self, needle: &str) -> AppResult<i64> {
        self.books_count_title_containing(needle).await
    }

    async fn count_book_instances(&self) -> AppResult<i64> {
        self.book_instances_count().await
    }

    async fn count_book_instances_with_status(&self, status: LoanStatus) -> AppResult<i64> {
        self.book_instances_count_with_status(status).await
    }

    async fn count_authors(&self) -> AppResult<i64> {
        self.authors_count().await
    }

    async fn count_genres(&self) -> AppResult<i64> {
        self.genres_count().await
    }

    async fn list_books(&self, limit: i64, offset: i64) -> AppResult<Vec<BookSummary>> {
        self.books_list(limit, offset).await
    }

    async fn get_book(&self, id: i64) -> AppResult<BookDetail> {
        self.books_get_detail(id).await
    }

    async fn list_authors(&self, limit: i64, offset: i64) -> AppResult<Vec<AuthorSummary>> {
        self.authors_list(limit, offset).await
    }

    async fn get_author(&self, id: i64) -> AppResult<AuthorDetail> {
        self.authors_get_detail(id).await
    }
}
