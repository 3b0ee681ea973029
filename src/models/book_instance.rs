//! Book instance (one physical, lendable copy of a book) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Loan status of a copy, stored as a one-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    #[default]
    Maintenance,
    OnLoan,
    Available,
    Reserved,
}

impl LoanStatus {
    pub const ALL: [LoanStatus; 4] = [
        LoanStatus::Maintenance,
        LoanStatus::OnLoan,
        LoanStatus::Available,
        LoanStatus::Reserved,
    ];

    /// Database code for this status
    pub fn as_code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "m",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_code() == code)
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Maintenance => "Maintenance",
            LoanStatus::OnLoan => "On loan",
            LoanStatus::Available => "Available",
            LoanStatus::Reserved => "Reserved",
        };
        f.write_str(label)
    }
}

/// Copy of a book as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Option<i64>,
    pub book_title: Option<String>,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub status: LoanStatus,
    /// Human readable status
    pub status_label: String,
}

impl std::fmt::Display for BookInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.book_title {
            Some(title) => write!(f, "{} ({})", self.id, title),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Raw `book_instances` row joined with the book title
#[derive(Debug, FromRow)]
pub struct BookInstanceRow {
    pub id: Uuid,
    pub book_id: Option<i64>,
    pub book_title: Option<String>,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub status: String,
}

impl TryFrom<BookInstanceRow> for BookInstance {
    type Error = AppError;

    fn try_from(row: BookInstanceRow) -> Result<Self, Self::Error> {
        let status = LoanStatus::from_code(&row.status).ok_or_else(|| {
            AppError::Internal(format!(
                "Book instance {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;
        Ok(Self {
            id: row.id,
            book_id: row.book_id,
            book_title: row.book_title,
            imprint: row.imprint,
            due_back: row.due_back,
            status,
            status_label: status.to_string(),
        })
    }
}

/// Create book instance request
#[derive(Debug, Deserialize, Validate)]
pub struct NewBookInstance {
    pub book_id: Option<i64>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    #[serde(default)]
    pub status: LoanStatus,
}
