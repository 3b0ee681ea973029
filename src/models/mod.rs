//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod dashboard;
pub mod genre;
pub mod language;
pub mod pagination;

// Re-export commonly used types
pub use author::{Author, AuthorDetail, AuthorSummary};
pub use book::{Book, BookDetail, BookSummary};
pub use book_instance::{BookInstance, LoanStatus};
pub use dashboard::DashboardCounts;
pub use genre::Genre;
pub use language::Language;
pub use pagination::{PageQuery, PageWindow, PaginatedResponse, PAGE_SIZE};
