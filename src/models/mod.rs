//! Domain models

pub mod book;

pub use book::{Book, BookListing, BookQuery, BookStatus, CreateBook, Statistics, UpdateBook};
