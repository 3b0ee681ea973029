//! Language domain methods on Repository

use validator::Validate;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::language::{Language, NewLanguage},
};

impl Repository {
    /// Get a language by ID, if it exists
    pub async fn languages_find(&self, id: i64) -> AppResult<Option<Language>> {
        let row = sqlx::query_as::<_, Language>("SELECT id, name FROM languages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a language
    pub async fn languages_create(&self, data: &NewLanguage) -> AppResult<Language> {
        data.validate()?;
        let row = sqlx::query_as::<_, Language>(
            "INSERT INTO languages (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a language; books written in it lose their language reference
    pub async fn languages_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Language {} not found", id)));
        }
        Ok(())
    }
}
