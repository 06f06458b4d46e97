//! Book catalog endpoints
//!
//! Pure mapping between HTTP and the books service; no business logic.
//! Path ids are taken as raw text so the validation layer owns id parsing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, BookListing, BookQuery, CreateBook, UpdateBook},
};

/// Deletion result
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Status message
    pub message: String,
    /// Id of the deleted book
    pub id: i32,
}

/// List books with optional status filter and statistics
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    params(
        ("status" = Option<String>, Query, description = "Filter by status (available|borrowed)")
    ),
    responses(
        (status = 200, description = "Books and statistics over the returned set", body = BookListing)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<BookListing>> {
    let listing = state.services.books.list_books(query.status).await?;
    Ok(Json(listing))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Invalid book ID"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_book(&id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.books.create_book(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a book's bibliographic fields
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid book ID or ISBN"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "ISBN already exists")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.books.update_book(&id, changes).await?;
    Ok(Json(updated))
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/api/books/{id}/borrow",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book borrowed", body = Book),
        (status = 400, description = "Invalid book ID"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is already borrowed")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.borrow_book(&id).await?;
    Ok(Json(book))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/api/books/{id}/return",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 400, description = "Invalid book ID"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is already available")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.return_book(&id).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeleteResponse),
        (status = 400, description = "Invalid book ID"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is currently borrowed")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = state.services.books.delete_book(&id).await?;

    Ok(Json(DeleteResponse {
        message: "Book deleted successfully".to_string(),
        id,
    }))
}
