//! Author model and related types

use serde::{Deserialize, Serialize};

/// Author record as supplied by the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Ids of the books this author wrote, in listed order
    #[serde(default)]
    pub books: Vec<i32>,
}

impl Author {
    /// Case-insensitive name comparison (simple upper-case folding)
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_uppercase() == name.to_uppercase()
    }
}

/// One row of `book_counts_by_author`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBookCount {
    pub author: String,
    pub book_count: usize,
}
