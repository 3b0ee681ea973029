//! Genre domain methods on Repository

use validator::Validate;

use super::Repository;
use crate::{
    error::AppResult,
    models::genre::{Genre, NewGenre},
};

impl Repository {
    /// Count all genres
    pub async fn genres_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Genres of a book, by name
    pub async fn genres_for_book(&self, book_id: i64) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = $1
            ORDER BY g.name, g.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a genre
    pub async fn genres_create(&self, data: &NewGenre) -> AppResult<Genre> {
        data.validate()?;
        let row = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
