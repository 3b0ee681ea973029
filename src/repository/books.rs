//! Book domain methods on Repository

use sqlx::{postgres::PgRow, Row};
use validator::Validate;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorSummary},
        book::{Book, BookDetail, BookSummary, NewBook},
    },
};

const BOOK_COLUMNS: &str = "id, title, summary, isbn, author_id, language_id";

/// Book listing row joined with its (optional) author
const SUMMARY_SELECT: &str = r#"
    SELECT b.id, b.title,
           a.id AS author_id, a.first_name, a.last_name,
           a.date_of_birth, a.date_of_death
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
"#;

fn summary_from_row(r: &PgRow) -> BookSummary {
    let author = r.get::<Option<i64>, _>("author_id").map(|id| Author {
        id,
        first_name: r.get("first_name"),
        last_name: r.get("last_name"),
        date_of_birth: r.get("date_of_birth"),
        date_of_death: r.get("date_of_death"),
    });
    BookSummary::new(
        r.get("id"),
        r.get("title"),
        author.map(|a| a.to_string()),
    )
}

impl Repository {
    /// Count all books
    pub async fn books_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count books whose title contains `needle` (case-sensitive)
    pub async fn books_count_title_containing(&self, needle: &str) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE strpos(title, $1) > 0")
                .bind(needle)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// List books in creation order
    pub async fn books_list(&self, limit: i64, offset: i64) -> AppResult<Vec<BookSummary>> {
        let query = format!("{} ORDER BY b.id LIMIT $1 OFFSET $2", SUMMARY_SELECT);
        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(summary_from_row).collect())
    }

    /// Books attributed to an author
    pub async fn books_by_author(&self, author_id: i64) -> AppResult<Vec<BookSummary>> {
        let query = format!("{} WHERE b.author_id = $1 ORDER BY b.id", SUMMARY_SELECT);
        let rows = sqlx::query(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(summary_from_row).collect())
    }

    /// Get a book row by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        let query = format!("SELECT {} FROM books WHERE id = $1", BOOK_COLUMNS);
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Get a book with its author, language, genres and copies
    pub async fn books_get_detail(&self, id: i64) -> AppResult<BookDetail> {
        let book = self.books_get_by_id(id).await?;

        let author = match book.author_id {
            Some(author_id) => self
                .authors_find(author_id)
                .await?
                .as_ref()
                .map(AuthorSummary::from),
            None => None,
        };
        let language = match book.language_id {
            Some(language_id) => self.languages_find(language_id).await?,
            None => None,
        };
        let genres = self.genres_for_book(id).await?;
        let copies = self.book_instances_for_book(id).await?;

        Ok(BookDetail::new(book, author, language, genres, copies))
    }

    /// Create a book and attach its genres
    pub async fn books_create(&self, data: &NewBook) -> AppResult<Book> {
        data.validate()?;

        let mut tx = self.pool.begin().await?;

        let query = format!(
            r#"
            INSERT INTO books (title, summary, isbn, author_id, language_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(&data.title)
            .bind(&data.summary)
            .bind(&data.isbn)
            .bind(data.author_id)
            .bind(data.language_id)
            .fetch_one(&mut *tx)
            .await?;

        for genre_id in &data.genre_ids {
            sqlx::query(
                "INSERT INTO book_genres (book_id, genre_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(book.id)
            .bind(genre_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(book)
    }

    /// Delete a book; its copies are kept with no book
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
