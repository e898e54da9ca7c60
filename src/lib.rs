//! Bookshelf catalog queries
//!
//! Lookup and aggregation helpers over in-memory collections of books and
//! authors: find by id or name, group by color, count, and cross-reference
//! co-authors.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{CatalogError, CatalogResult};
pub use models::{Author, AuthorBookCount, AuthorRef, Book};
pub use services::queries::{
    book_counts_by_author, books_by_color, friendliest_author, get_author_by_name, get_book_by_id,
    most_co_authored_author, most_prolific_author, related_books, related_books_distinct,
    titles_by_author_name,
};
pub use services::Catalog;
