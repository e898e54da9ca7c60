//! Loading the book and author collections from JSON files

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    config::DataConfig,
    error::{CatalogError, CatalogResult},
    models::{Author, Book},
};

/// Read a JSON array of records from `path`
pub fn load_json<T: DeserializeOwned>(path: &Path) -> CatalogResult<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Load both collections named by the data configuration
pub fn load_dataset(config: &DataConfig) -> CatalogResult<(Vec<Author>, Vec<Book>)> {
    let authors = load_json::<Author>(&config.authors_path)?;
    let books = load_json::<Book>(&config.books_path)?;
    Ok((authors, books))
}
