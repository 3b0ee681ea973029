//! Book (a title, independent of its physical copies) and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    author::AuthorSummary, book_instance::BookInstance, genre::Genre, language::Language,
};

/// Canonical path of the book detail endpoint
pub fn book_path(id: i64) -> String {
    format!("/books/{}", id)
}

/// Full book model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: Option<i64>,
    pub language_id: Option<i64>,
}

impl Book {
    pub fn detail_path(&self) -> String {
        book_path(self.id)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// Short book representation for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    /// Author display name, absent when the book has no author
    pub author: Option<String>,
    /// Path of the book detail endpoint
    pub url: String,
}

impl BookSummary {
    pub fn new(id: i64, title: String, author: Option<String>) -> Self {
        Self {
            id,
            title,
            author,
            url: book_path(id),
        }
    }
}

/// Book with its author, language, genres and copies
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDetail {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub url: String,
    pub author: Option<AuthorSummary>,
    pub language: Option<Language>,
    pub genres: Vec<Genre>,
    /// Copies ordered by due date, copies without one first
    pub copies: Vec<BookInstance>,
}

impl BookDetail {
    pub fn new(
        book: Book,
        author: Option<AuthorSummary>,
        language: Option<Language>,
        genres: Vec<Genre>,
        copies: Vec<BookInstance>,
    ) -> Self {
        let url = book.detail_path();
        Self {
            id: book.id,
            title: book.title,
            summary: book.summary,
            isbn: book.isbn,
            url,
            author,
            language,
            genres,
            copies,
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 1000))]
    pub summary: String,
    /// 13 character ISBN; only the length is checked
    #[validate(length(max = 13, message = "ISBN must be at most 13 characters"))]
    pub isbn: String,
    pub author_id: Option<i64>,
    pub language_id: Option<i64>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}
