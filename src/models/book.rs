//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book lifecycle status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "book_status", rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::Borrowed => write!(f, "borrowed"),
        }
    }
}

/// Book record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new book
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Partial update of a book's bibliographic fields.
/// Status is not updatable this way; it only moves through borrow/return.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

/// Listing query parameters
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BookQuery {
    pub status: Option<BookStatus>,
}

/// Counts over a set of books, recomputed on every listing.
/// Reflects the filtered view, not the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Statistics {
    pub total: i64,
    pub available: i64,
    pub borrowed: i64,
}

impl Statistics {
    /// Compute counts over a returned book set
    pub fn compute(books: &[Book]) -> Self {
        let available = books
            .iter()
            .filter(|b| b.status == BookStatus::Available)
            .count() as i64;
        let borrowed = books
            .iter()
            .filter(|b| b.status == BookStatus::Borrowed)
            .count() as i64;
        Self {
            total: books.len() as i64,
            available,
            borrowed,
        }
    }
}

/// Listing response: books plus statistics over the same set
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookListing {
    pub books: Vec<Book>,
    pub statistics: Statistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i32, status: BookStatus) -> Book {
        let now = Utc::now();
        Book {
            id,
            title: format!("Book {}", id),
            author: "Author".to_string(),
            isbn: format!("isbn-{}", id),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_statistics_empty() {
        let stats = Statistics::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.available, 0);
        assert_eq!(stats.borrowed, 0);
    }

    #[test]
    fn test_statistics_counts_add_up() {
        let books = vec![
            book(1, BookStatus::Available),
            book(2, BookStatus::Borrowed),
            book(3, BookStatus::Available),
        ];
        let stats = Statistics::compute(&books);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.borrowed, 1);
        assert_eq!(stats.total, stats.available + stats.borrowed);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookStatus::Available).unwrap(),
            "\"available\""
        );
        assert_eq!(
            serde_json::to_string(&BookStatus::Borrowed).unwrap(),
            "\"borrowed\""
        );
    }
}
