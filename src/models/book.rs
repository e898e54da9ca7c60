//! Book model

use serde::{Deserialize, Serialize};

/// Reference from a book to one of its authors, by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub name: String,
}

/// Book record as supplied by the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// Category label; books without one are grouped under `""`
    #[serde(default)]
    pub color: String,
    /// Authors in credited order
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
}

impl Book {
    /// Whether more than one author is credited on this book
    pub fn is_co_authored(&self) -> bool {
        self.authors.len() > 1
    }
}
