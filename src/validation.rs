//! Input validation for book operations
//!
//! Pure functions; every failure is an [`AppError::Validation`] and is
//! raised before any storage access.

use crate::{
    error::{AppError, AppResult},
    models::CreateBook,
};

/// Check that all required fields are present and non-empty
pub fn validate_book_data(data: &CreateBook) -> AppResult<()> {
    if data.title.trim().is_empty() || data.author.trim().is_empty() || data.isbn.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Title, author, and ISBN are required".to_string(),
        ));
    }
    Ok(())
}

/// Check that an ISBN is a non-empty string.
/// Any non-empty string is accepted; no checksum or format enforcement.
pub fn validate_isbn(isbn: &str) -> AppResult<()> {
    if isbn.trim().is_empty() {
        return Err(AppError::Validation("ISBN is required".to_string()));
    }
    Ok(())
}

/// Parse a caller-supplied id into a positive integer.
/// Strict parse: trailing garbage is rejected, not truncated.
pub fn validate_id(id: &str) -> AppResult<i32> {
    match id.trim().parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Validation("Invalid book ID".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_book(title: &str, author: &str, isbn: &str) -> CreateBook {
        CreateBook {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }

    #[test]
    fn test_book_data_complete() {
        assert!(validate_book_data(&create_book("Dune", "Herbert", "123")).is_ok());
    }

    #[test]
    fn test_book_data_missing_fields() {
        assert!(validate_book_data(&create_book("", "Herbert", "123")).is_err());
        assert!(validate_book_data(&create_book("Dune", "", "123")).is_err());
        assert!(validate_book_data(&create_book("Dune", "Herbert", "")).is_err());
        // Whitespace-only counts as missing
        assert!(validate_book_data(&create_book("   ", "Herbert", "123")).is_err());
    }

    #[test]
    fn test_isbn_any_non_empty_string() {
        assert!(validate_isbn("978-0441013593").is_ok());
        assert!(validate_isbn("not-an-isbn-at-all").is_ok());
        assert!(validate_isbn("").is_err());
        assert!(validate_isbn("   ").is_err());
    }

    #[test]
    fn test_id_positive_integers() {
        assert_eq!(validate_id("1").unwrap(), 1);
        assert_eq!(validate_id("42").unwrap(), 42);
        assert_eq!(validate_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn test_id_rejects_bad_input() {
        assert!(validate_id("0").is_err());
        assert!(validate_id("-1").is_err());
        assert!(validate_id("abc").is_err());
        assert!(validate_id("").is_err());
        // Strict parse: no prefix truncation
        assert!(validate_id("12abc").is_err());
    }
}
