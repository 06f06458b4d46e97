//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, BookStatus, CreateBook, UpdateBook},
};

/// Storage access for book records.
///
/// Services depend on this trait rather than a concrete backend so tests
/// can substitute doubles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List books, optionally filtered by status
    async fn find_all(&self, status: Option<BookStatus>) -> AppResult<Vec<Book>>;

    /// Fetch a book by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Persist a new book with status `available`.
    /// A duplicate ISBN surfaces as a database unique-constraint error.
    async fn create(&self, book: &CreateBook) -> AppResult<Book>;

    /// Apply a partial update; `None` when the id is absent
    async fn update(&self, id: i32, changes: &UpdateBook) -> AppResult<Option<Book>>;

    /// Atomically move a book from one status to another.
    /// Returns `None` when the row is absent or its status is not `from`,
    /// so two concurrent transitions on the same id cannot both succeed.
    async fn set_status(
        &self,
        id: i32,
        from: BookStatus,
        to: BookStatus,
    ) -> AppResult<Option<Book>>;

    /// Delete a book only while it is available.
    /// Returns whether a row was removed.
    async fn delete_if_available(&self, id: i32) -> AppResult<bool>;
}

/// Postgres-backed implementation
#[derive(Clone)]
pub struct PgBookRepository {
    pool: Pool<Postgres>,
}

impl PgBookRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn find_all(&self, status: Option<BookStatus>) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE $1::book_status IS NULL OR status = $1 ORDER BY id",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, status)
            VALUES ($1, $2, $3, 'available')
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, changes: &UpdateBook) -> AppResult<Option<Book>> {
        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = COALESCE($2, title),
                author = COALESCE($3, author),
                isbn = COALESCE($4, isbn),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.author)
        .bind(&changes.isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn set_status(
        &self,
        id: i32,
        from: BookStatus,
        to: BookStatus,
    ) -> AppResult<Option<Book>> {
        // Compare-and-swap: the status precondition is part of the UPDATE,
        // so concurrent transitions on the same row serialize in the database.
        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_if_available(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1 AND status = 'available'")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
