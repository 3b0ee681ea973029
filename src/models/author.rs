//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::BookSummary;

/// Canonical path of the author detail endpoint
pub fn author_path(id: i64) -> String {
    format!("/authors/{}", id)
}

/// Full author model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    /// "Died"
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    pub fn detail_path(&self) -> String {
        author_path(self.id)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.last_name, self.first_name)
    }
}

/// Author as shown in listings and embedded in book details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorSummary {
    pub id: i64,
    /// Display name ("last, first")
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    /// Path of the author detail endpoint
    pub url: String,
}

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.to_string(),
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
            url: author.detail_path(),
        }
    }
}

/// Author details with the books attributed to them
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDetail {
    pub id: i64,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub url: String,
    pub books: Vec<BookSummary>,
}

impl AuthorDetail {
    pub fn new(author: &Author, books: Vec<BookSummary>) -> Self {
        let summary = AuthorSummary::from(author);
        Self {
            id: summary.id,
            name: summary.name,
            first_name: summary.first_name,
            last_name: summary.last_name,
            date_of_birth: summary.date_of_birth,
            date_of_death: summary.date_of_death,
            url: summary.url,
            books,
        }
    }
}

/// Create author request
#[derive(Debug, Deserialize, Validate)]
pub struct NewAuthor {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}
