//! Author domain methods on Repository

use validator::Validate;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorDetail, AuthorSummary, NewAuthor},
};

const AUTHOR_COLUMNS: &str = "id, first_name, last_name, date_of_birth, date_of_death";

impl Repository {
    /// Count all authors
    pub async fn authors_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// List authors in creation order
    pub async fn authors_list(&self, limit: i64, offset: i64) -> AppResult<Vec<AuthorSummary>> {
        let query = format!(
            "SELECT {} FROM authors ORDER BY id LIMIT $1 OFFSET $2",
            AUTHOR_COLUMNS
        );
        let rows = sqlx::query_as::<_, Author>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(AuthorSummary::from).collect())
    }

    /// Get an author by ID, if it exists
    pub async fn authors_find(&self, id: i64) -> AppResult<Option<Author>> {
        let query = format!("SELECT {} FROM authors WHERE id = $1", AUTHOR_COLUMNS);
        let row = sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Get an author by ID
    pub async fn authors_get_by_id(&self, id: i64) -> AppResult<Author> {
        self.authors_find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Get an author with their books
    pub async fn authors_get_detail(&self, id: i64) -> AppResult<AuthorDetail> {
        let author = self.authors_get_by_id(id).await?;
        let books = self.books_by_author(id).await?;
        Ok(AuthorDetail::new(&author, books))
    }

    /// Create an author
    pub async fn authors_create(&self, data: &NewAuthor) -> AppResult<Author> {
        data.validate()?;
        let query = format!(
            r#"
            INSERT INTO authors (first_name, last_name, date_of_birth, date_of_death)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            AUTHOR_COLUMNS
        );
        let row = sqlx::query_as::<_, Author>(&query)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(data.date_of_birth)
            .bind(data.date_of_death)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Delete an author; their books are kept with no author
    pub async fn authors_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }
        Ok(())
    }
}
