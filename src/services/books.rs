//! Book catalog service
//!
//! Orchestrates validation, storage access, and the borrow/return state
//! machine. Ids arrive as raw path text and are validated here before any
//! repository call.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookListing, BookStatus, CreateBook, Statistics, UpdateBook},
    repository::BookRepository,
    validation,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BookRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// List books with statistics over the returned set.
    /// With a status filter, statistics reflect the filtered view.
    pub async fn list_books(&self, status: Option<BookStatus>) -> AppResult<BookListing> {
        let books = self.repository.find_all(status).await?;
        let statistics = Statistics::compute(&books);

        Ok(BookListing { books, statistics })
    }

    /// Get a book by id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        let id = validation::validate_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Create a new book; status defaults to available
    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        validation::validate_book_data(&data)?;
        validation::validate_isbn(&data.isbn)?;

        let created = self.repository.create(&data).await?;
        tracing::info!("Created book id={} isbn={}", created.id, created.isbn);

        Ok(created)
    }

    /// Apply a partial update to a book's bibliographic fields
    pub async fn update_book(&self, id: &str, changes: UpdateBook) -> AppResult<Book> {
        let id = validation::validate_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if let Some(ref isbn) = changes.isbn {
            validation::validate_isbn(isbn)?;
        }

        self.repository
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Borrow a book: available → borrowed
    pub async fn borrow_book(&self, id: &str) -> AppResult<Book> {
        let id = validation::validate_id(id)?;

        let book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if book.status == BookStatus::Borrowed {
            return Err(AppError::Conflict("Book is already borrowed".to_string()));
        }

        // A concurrent borrow can still win between the read and the swap;
        // the conditional update makes the loser fail instead of double-borrowing.
        self.repository
            .set_status(id, BookStatus::Available, BookStatus::Borrowed)
            .await?
            .ok_or_else(|| AppError::Conflict("Book is already borrowed".to_string()))
    }

    /// Return a book: borrowed → available
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let id = validation::validate_id(id)?;

        let book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if book.status == BookStatus::Available {
            return Err(AppError::Conflict("Book is already available".to_string()));
        }

        self.repository
            .set_status(id, BookStatus::Borrowed, BookStatus::Available)
            .await?
            .ok_or_else(|| AppError::Conflict("Book is already available".to_string()))
    }

    /// Delete a book; only allowed while it is available
    pub async fn delete_book(&self, id: &str) -> AppResult<i32> {
        let id = validation::validate_id(id)?;

        let book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if book.status == BookStatus::Borrowed {
            return Err(AppError::Conflict(
                "Cannot delete a borrowed book".to_string(),
            ));
        }

        if !self.repository.delete_if_available(id).await? {
            // Borrowed between the read and the delete
            return Err(AppError::Conflict(
                "Cannot delete a borrowed book".to_string(),
            ));
        }

        tracing::info!("Deleted book id={}", id);
        Ok(id)
    }
}
