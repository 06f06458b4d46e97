//! Repository layer for database operations

pub mod books;

pub use books::{BookRepository, PgBookRepository};
