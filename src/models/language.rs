//! Language model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Natural language a book is written in (e.g. English, French, Japanese)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Create language request
#[derive(Debug, Deserialize, Validate)]
pub struct NewLanguage {
    #[validate(length(min = 1, max = 50, message = "Language name must be 1 to 50 characters"))]
    pub name: String,
}
