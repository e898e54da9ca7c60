//! Lookup and aggregation queries over the book and author collections.
//!
//! Every function here is pure: it borrows the collections it is given and
//! never mutates them. Lookups are linear scans, and the first match in
//! collection order wins.

use indexmap::IndexMap;

use crate::{
    error::{CatalogError, CatalogResult},
    models::{Author, AuthorBookCount, Book},
};

/// Find the first book with the given id
pub fn get_book_by_id(id: i32, books: &[Book]) -> Option<&Book> {
    books.iter().find(|book| book.id == id)
}

/// Find the first author whose name matches, ignoring case
pub fn get_author_by_name<'a>(name: &str, authors: &'a [Author]) -> Option<&'a Author> {
    authors.iter().find(|author| author.name_matches(name))
}

/// One entry per author, in input order, with the length of their book list
pub fn book_counts_by_author(authors: &[Author]) -> Vec<AuthorBookCount> {
    authors
        .iter()
        .map(|author| AuthorBookCount {
            author: author.name.clone(),
            book_count: author.books.len(),
        })
        .collect()
}

/// Group titles by color. Keys keep first-seen order and titles keep input order.
pub fn books_by_color(books: &[Book]) -> IndexMap<String, Vec<String>> {
    let mut colors: IndexMap<String, Vec<String>> = IndexMap::new();
    for book in books {
        colors
            .entry(book.color.clone())
            .or_default()
            .push(book.title.clone());
    }
    colors
}

/// Titles of every book written by the named author, in the author's listed order.
///
/// An unknown author yields an empty list. A listed id that has no matching
/// book is reported as [`CatalogError::DanglingBookReference`].
pub fn titles_by_author_name(
    name: &str,
    authors: &[Author],
    books: &[Book],
) -> CatalogResult<Vec<String>> {
    let Some(author) = get_author_by_name(name, authors) else {
        return Ok(Vec::new());
    };

    author
        .books
        .iter()
        .map(|&book_id| {
            get_book_by_id(book_id, books)
                .map(|book| book.title.clone())
                .ok_or_else(|| CatalogError::DanglingBookReference {
                    author: author.name.clone(),
                    book_id,
                })
        })
        .collect()
}

/// Name of the author with the most books; ties go to the earlier author
pub fn most_prolific_author(authors: &[Author]) -> CatalogResult<&str> {
    max_by_count(authors, |author| Ok(author.books.len()))
}

/// Titles by every co-author of the given book, concatenated in credited order.
///
/// A title shared by several co-authors appears once per co-author. Use
/// [`related_books_distinct`] for a deduplicated list.
pub fn related_books(
    book_id: i32,
    authors: &[Author],
    books: &[Book],
) -> CatalogResult<Vec<String>> {
    let book = get_book_by_id(book_id, books).ok_or(CatalogError::BookNotFound(book_id))?;

    let mut titles = Vec::new();
    for author in &book.authors {
        titles.extend(titles_by_author_name(&author.name, authors, books)?);
    }
    Ok(titles)
}

/// Like [`related_books`], keeping only the first occurrence of each title
pub fn related_books_distinct(
    book_id: i32,
    authors: &[Author],
    books: &[Book],
) -> CatalogResult<Vec<String>> {
    let mut titles = related_books(book_id, authors, books)?;
    let mut seen = std::collections::HashSet::new();
    titles.retain(|title| seen.insert(title.clone()));
    Ok(titles)
}

/// Alias of [`most_prolific_author`].
///
/// This counts every book an author wrote, not only co-authored ones.
/// [`most_co_authored_author`] counts co-authored books only.
pub fn friendliest_author(authors: &[Author]) -> CatalogResult<&str> {
    most_prolific_author(authors)
}

/// Name of the author credited on the most books that have more than one author
pub fn most_co_authored_author<'a>(
    authors: &'a [Author],
    books: &[Book],
) -> CatalogResult<&'a str> {
    max_by_count(authors, |author| co_authored_count(author, books))
}

fn co_authored_count(author: &Author, books: &[Book]) -> CatalogResult<usize> {
    let mut count = 0;
    for &book_id in &author.books {
        let book =
            get_book_by_id(book_id, books).ok_or_else(|| CatalogError::DanglingBookReference {
                author: author.name.clone(),
                book_id,
            })?;
        if book.is_co_authored() {
            count += 1;
        }
    }
    Ok(count)
}

/// Scan in order, keeping the first author whose count strictly exceeds the best so far
fn max_by_count<F>(authors: &[Author], mut count: F) -> CatalogResult<&str>
where
    F: FnMut(&Author) -> CatalogResult<usize>,
{
    let (first, rest) = authors.split_first().ok_or(CatalogError::EmptyAuthors)?;
    let mut best = first;
    let mut best_count = count(first)?;
    for author in rest {
        let n = count(author)?;
        if n > best_count {
            best = author;
            best_count = n;
        }
    }
    Ok(best.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthorRef;

    fn book(id: i32, title: &str, color: &str, authors: &[&str]) -> Book {
        Book {
            id,
            title: title.to_string(),
            color: color.to_string(),
            authors: authors
                .iter()
                .map(|name| AuthorRef { name: name.to_string() })
                .collect(),
        }
    }

    fn author(name: &str, books: &[i32]) -> Author {
        Author {
            name: name.to_string(),
            books: books.to_vec(),
        }
    }

    fn good_omens_fixture() -> (Vec<Author>, Vec<Book>) {
        let books = vec![
            book(46, "Good Omens", "#ffc107", &["Terry Pratchett", "Neil Gaiman"]),
            book(47, "Neverwhere", "#3f51b5", &["Neil Gaiman"]),
            book(48, "Coraline", "#3f51b5", &["Neil Gaiman"]),
            book(49, "The Color of Magic", "#ffc107", &["Terry Pratchett"]),
            book(50, "The Hogfather", "#4caf50", &["Terry Pratchett"]),
        ];
        let authors = vec![
            author("Terry Pratchett", &[46, 49, 50]),
            author("Neil Gaiman", &[46, 47, 48]),
        ];
        (authors, books)
    }

    #[test]
    fn test_get_book_by_id() {
        let (_, books) = good_omens_fixture();
        assert_eq!(get_book_by_id(47, &books).map(|b| b.title.as_str()), Some("Neverwhere"));
        assert!(get_book_by_id(1, &books).is_none());
        assert!(get_book_by_id(1, &[]).is_none());
    }

    #[test]
    fn test_get_book_by_id_first_duplicate_wins() {
        let books = vec![book(1, "First", "red", &[]), book(1, "Second", "red", &[])];
        assert_eq!(get_book_by_id(1, &books).unwrap().title, "First");
    }

    #[test]
    fn test_get_author_by_name_case_insensitive() {
        let (authors, _) = good_omens_fixture();
        assert_eq!(get_author_by_name("neil gaiman", &authors), Some(&authors[1]));
        assert_eq!(get_author_by_name("TERRY PRATCHETT", &authors), Some(&authors[0]));
        assert!(get_author_by_name("Zadie Smith", &authors).is_none());
    }

    #[test]
    fn test_book_counts_by_author() {
        let authors = vec![author("A", &[1, 2]), author("B", &[]), author("A", &[3])];
        let counts = book_counts_by_author(&authors);
        assert_eq!(
            counts,
            vec![
                AuthorBookCount { author: "A".into(), book_count: 2 },
                AuthorBookCount { author: "B".into(), book_count: 0 },
                AuthorBookCount { author: "A".into(), book_count: 1 },
            ]
        );
    }

    #[test]
    fn test_books_by_color() {
        let books = vec![
            book(1, "A", "red", &[]),
            book(2, "B", "red", &[]),
            book(3, "C", "blue", &[]),
            book(4, "D", "", &[]),
        ];
        let colors = books_by_color(&books);
        let keys: Vec<&str> = colors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["red", "blue", ""]);
        assert_eq!(colors["red"], vec!["A", "B"]);
        assert_eq!(colors["blue"], vec!["C"]);
        assert_eq!(colors[""], vec!["D"]);
        assert_eq!(colors.values().map(Vec::len).sum::<usize>(), books.len());
    }

    #[test]
    fn test_titles_by_author_name() {
        let (authors, books) = good_omens_fixture();
        assert_eq!(
            titles_by_author_name("neil GAIMAN", &authors, &books).unwrap(),
            vec!["Good Omens", "Neverwhere", "Coraline"]
        );
        assert!(titles_by_author_name("Nobody", &authors, &books).unwrap().is_empty());

        let idle = vec![author("Idle", &[])];
        assert!(titles_by_author_name("Idle", &idle, &books).unwrap().is_empty());
    }

    #[test]
    fn test_titles_by_author_name_dangling_reference() {
        let (_, books) = good_omens_fixture();
        let authors = vec![author("Ghost", &[46, 999])];
        match titles_by_author_name("ghost", &authors, &books) {
            Err(CatalogError::DanglingBookReference { author, book_id }) => {
                assert_eq!(author, "Ghost");
                assert_eq!(book_id, 999);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_most_prolific_author() {
        let authors = vec![author("A", &[1]), author("B", &[2, 3, 4]), author("C", &[5, 6])];
        assert_eq!(most_prolific_author(&authors).unwrap(), "B");

        let tied = vec![author("A", &[1, 2]), author("B", &[3, 4])];
        assert_eq!(most_prolific_author(&tied).unwrap(), "A");

        assert!(matches!(most_prolific_author(&[]), Err(CatalogError::EmptyAuthors)));
    }

    #[test]
    fn test_friendliest_author_is_alias() {
        let authors = vec![author("A", &[1]), author("B", &[2, 3])];
        assert_eq!(friendliest_author(&authors).unwrap(), most_prolific_author(&authors).unwrap());
        assert!(matches!(friendliest_author(&[]), Err(CatalogError::EmptyAuthors)));
    }

    #[test]
    fn test_related_books_single_author() {
        let books = vec![
            book(37, "The Shining Girls", "#9c27b0", &["Lauren Beukes"]),
            book(38, "Zoo City", "#9c27b0", &["Lauren Beukes"]),
        ];
        let authors = vec![author("Lauren Beukes", &[37, 38])];
        assert_eq!(
            related_books(37, &authors, &books).unwrap(),
            vec!["The Shining Girls", "Zoo City"]
        );
    }

    #[test]
    fn test_related_books_co_authored_keeps_duplicates() {
        let (authors, books) = good_omens_fixture();
        assert_eq!(
            related_books(46, &authors, &books).unwrap(),
            vec![
                "Good Omens",
                "The Color of Magic",
                "The Hogfather",
                "Good Omens",
                "Neverwhere",
                "Coraline",
            ]
        );
        assert_eq!(
            related_books_distinct(46, &authors, &books).unwrap(),
            vec!["Good Omens", "The Color of Magic", "The Hogfather", "Neverwhere", "Coraline"]
        );
    }

    #[test]
    fn test_related_books_unknown_book() {
        let (authors, books) = good_omens_fixture();
        assert!(matches!(
            related_books(404, &authors, &books),
            Err(CatalogError::BookNotFound(404))
        ));
    }

    #[test]
    fn test_most_co_authored_author() {
        let books = vec![
            book(1, "Solo", "red", &["A"]),
            book(2, "Solo Two", "red", &["A"]),
            book(3, "Duet", "blue", &["A", "B"]),
            book(4, "Trio", "blue", &["B", "C", "D"]),
        ];
        let authors = vec![author("A", &[1, 2, 3]), author("B", &[3, 4])];
        assert_eq!(most_prolific_author(&authors).unwrap(), "A");
        assert_eq!(most_co_authored_author(&authors, &books).unwrap(), "B");
        assert!(matches!(most_co_authored_author(&[], &books), Err(CatalogError::EmptyAuthors)));
    }
}
