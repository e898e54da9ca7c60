//! Catalog service: a loaded dataset with the queries bound to it

use indexmap::IndexMap;

use crate::{
    config::DataConfig,
    error::CatalogResult,
    models::{Author, AuthorBookCount, Book},
    services::{loader, queries},
};

/// Owns the book and author collections and answers queries over them
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self { authors, books }
    }

    /// Load the collections from the configured JSON files
    pub fn load(config: &DataConfig) -> CatalogResult<Self> {
        let (authors, books) = loader::load_dataset(config)?;
        tracing::info!(authors = authors.len(), books = books.len(), "Catalog loaded");
        Ok(Self::new(authors, books))
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, id: i32) -> Option<&Book> {
        queries::get_book_by_id(id, &self.books)
    }

    pub fn author(&self, name: &str) -> Option<&Author> {
        queries::get_author_by_name(name, &self.authors)
    }

    pub fn book_counts_by_author(&self) -> Vec<AuthorBookCount> {
        queries::book_counts_by_author(&self.authors)
    }

    pub fn books_by_color(&self) -> IndexMap<String, Vec<String>> {
        queries::books_by_color(&self.books)
    }

    pub fn titles_by_author_name(&self, name: &str) -> CatalogResult<Vec<String>> {
        queries::titles_by_author_name(name, &self.authors, &self.books)
    }

    pub fn most_prolific_author(&self) -> CatalogResult<&str> {
        queries::most_prolific_author(&self.authors)
    }

    pub fn related_books(&self, book_id: i32) -> CatalogResult<Vec<String>> {
        queries::related_books(book_id, &self.authors, &self.books)
    }

    pub fn related_books_distinct(&self, book_id: i32) -> CatalogResult<Vec<String>> {
        queries::related_books_distinct(book_id, &self.authors, &self.books)
    }

    pub fn friendliest_author(&self) -> CatalogResult<&str> {
        queries::friendliest_author(&self.authors)
    }

    pub fn most_co_authored_author(&self) -> CatalogResult<&str> {
        queries::most_co_authored_author(&self.authors, &self.books)
    }
}
