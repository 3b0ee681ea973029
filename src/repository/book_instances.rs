//! Book instance (copy) domain methods on Repository

use uuid::Uuid;
use validator::Validate;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book_instance::{BookInstance, BookInstanceRow, LoanStatus, NewBookInstance},
};

/// Copies joined with their book title; default order is by due date, undated first
const INSTANCE_SELECT: &str = r#"
    SELECT bi.id, bi.book_id, b.title AS book_title, bi.imprint, bi.due_back, bi.status
    FROM book_instances bi
    LEFT JOIN books b ON b.id = bi.book_id
"#;
const INSTANCE_ORDER: &str = "ORDER BY bi.due_back ASC NULLS FIRST, bi.id";

impl Repository {
    /// Count all copies
    pub async fn book_instances_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count copies in the given status
    pub async fn book_instances_count_with_status(&self, status: LoanStatus) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = $1")
                .bind(status.as_code())
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Copies of a book, in default order
    pub async fn book_instances_for_book(&self, book_id: i64) -> AppResult<Vec<BookInstance>> {
        let query = format!("{} WHERE bi.book_id = $1 {}", INSTANCE_SELECT, INSTANCE_ORDER);
        let rows = sqlx::query_as::<_, BookInstanceRow>(&query)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(BookInstance::try_from).collect()
    }

    /// Get a copy by ID
    pub async fn book_instances_get_by_id(&self, id: Uuid) -> AppResult<BookInstance> {
        let query = format!("{} WHERE bi.id = $1", INSTANCE_SELECT);
        let row = sqlx::query_as::<_, BookInstanceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))?;
        BookInstance::try_from(row)
    }

    /// Create a copy under a freshly generated identifier
    pub async fn book_instances_create(&self, data: &NewBookInstance) -> AppResult<BookInstance> {
        data.validate()?;
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, due_back, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(data.due_back)
        .bind(data.status.as_code())
        .execute(&self.pool)
        .await?;

        self.book_instances_get_by_id(id).await
    }
}
