//! Error types for the bookshelf catalog

use std::path::PathBuf;

use thiserror::Error;

/// Main catalog error type
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Book not found: {0}")]
    BookNotFound(i32),

    #[error("Author {author:?} references book {book_id}, which is not in the catalog")]
    DanglingBookReference { author: String, book_id: i32 },

    #[error("Author collection is empty")]
    EmptyAuthors,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CatalogError {
    /// Whether the error comes from inconsistent or missing input data
    /// rather than from the environment (files, configuration).
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            CatalogError::BookNotFound(_)
                | CatalogError::DanglingBookReference { .. }
                | CatalogError::EmptyAuthors
        )
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
