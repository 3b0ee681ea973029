//! Catalog read service: home page counts, listings and details

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        AuthorDetail, AuthorSummary, BookDetail, BookSummary, DashboardCounts, LoanStatus,
        PageWindow, PaginatedResponse, PAGE_SIZE,
    },
    repository::CatalogStore,
};

/// Word highlighted on the home page
pub const HIGHLIGHTED_TITLE_WORD: &str = "mundo";

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    /// Counts over the whole catalog, recomputed on every call
    #[tracing::instrument(skip(self))]
    pub async fn dashboard(&self) -> AppResult<DashboardCounts> {
        let counts = DashboardCounts {
            num_books: self.store.count_books().await?,
            num_instances: self.store.count_book_instances().await?,
            num_instances_available: self
                .store
                .count_book_instances_with_status(LoanStatus::Available)
                .await?,
            num_authors: self.store.count_authors().await?,
            num_genres: self.store.count_genres().await?,
            num_books_word: self
                .store
                .count_books_with_title_containing(HIGHLIGHTED_TITLE_WORD)
                .await?,
        };
        tracing::debug!(?counts, "Dashboard computed");
        Ok(counts)
    }

    /// One page of books
    #[tracing::instrument(skip(self))]
    pub async fn list_books(&self, page: Option<i64>) -> AppResult<PaginatedResponse<BookSummary>> {
        let total = self.store.count_books().await?;
        let window = PageWindow::resolve(page, total, PAGE_SIZE)?;
        let items = self.store.list_books(window.limit(), window.offset()).await?;
        Ok(PaginatedResponse::new(items, total, window))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_book(&self, id: i64) -> AppResult<BookDetail> {
        self.store.get_book(id).await
    }

    /// One page of authors
    #[tracing::instrument(skip(self))]
    pub async fn list_authors(
        &self,
        page: Option<i64>,
    ) -> AppResult<PaginatedResponse<AuthorSummary>> {
        let total = self.store.count_authors().await?;
        let window = PageWindow::resolve(page, total, PAGE_SIZE)?;
        let items = self.store.list_authors(window.limit(), window.offset()).await?;
        Ok(PaginatedResponse::new(items, total, window))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_author(&self, id: i64) -> AppResult<AuthorDetail> {
        self.store.get_author(id).await
    }
}
