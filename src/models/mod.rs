//! Data models for the bookshelf catalog

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::{Author, AuthorBookCount};
pub use book::{AuthorRef, Book};
