//! Plain-text report of every catalog query

use std::io::{self, Write};

use serde::Serialize;

use crate::{error::CatalogResult, services::Catalog};

/// Write one labelled, pretty-printed query result.
///
/// A failed query is logged and skipped. Returns whether anything was written.
pub fn write_entry<W: Write, T: Serialize>(
    out: &mut W,
    label: &str,
    result: CatalogResult<T>,
) -> io::Result<bool> {
    match result {
        Ok(value) => {
            writeln!(out, "{}:", label)?;
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
            Ok(true)
        }
        Err(e) if e.is_data_error() => {
            tracing::warn!(query = label, error = %e, "Query failed on catalog data");
            Ok(false)
        }
        Err(e) => {
            tracing::error!(query = label, error = %e, "Query failed");
            Ok(false)
        }
    }
}

/// Run the standard set of queries against `catalog` and write each result
pub fn write_report<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    write_entry(out, "getBookById(12)", Ok(catalog.book(12)))?;
    write_entry(out, "getAuthorByName(\"J.K. Rowling\")", Ok(catalog.author("J.K. Rowling")))?;
    write_entry(out, "bookCountsByAuthor", Ok(catalog.book_counts_by_author()))?;
    write_entry(out, "booksByColor", Ok(catalog.books_by_color()))?;
    write_entry(
        out,
        "titlesByAuthorName(\"George R.R. Martin\")",
        catalog.titles_by_author_name("George R.R. Martin"),
    )?;
    write_entry(out, "mostProlificAuthor", catalog.most_prolific_author())?;
    write_entry(out, "relatedBooks(50)", catalog.related_books(50))?;
    write_entry(out, "friendliestAuthor", catalog.friendliest_author())?;
    Ok(())
}
