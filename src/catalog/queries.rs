// shelf-core - Query helpers over an author and book catalog
// Copyright (C) 2025 shelf-core contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Catalog query functions
//!
//! Every query borrows the two collections and returns a derived value. None
//! of them mutate their input, so they can be called from any number of
//! threads over the same slices.
//!
//! # Query Patterns
//! - Lookups return `Option`; an absent record is never an error
//! - List queries return an empty `Vec` when their seed record is absent
//! - Joins go through ids; author names are resolved once up front
//! - Ids that point at nothing are skipped, not reported

use crate::catalog::models::*;
use crate::error::{Result, ShelfError};
use std::collections::{HashMap, HashSet};
use tracing::trace;

// ============================================================================
// INDEXES
// ============================================================================

/// Id lookup tables. The first record wins when ids repeat, same as a scan.
struct Index<'a> {
    authors: HashMap<AuthorId, &'a Author>,
    books: HashMap<BookId, &'a Book>,
}

impl<'a> Index<'a> {
    fn new(authors: &'a [Author], books: &'a [Book]) -> Self {
        let mut author_map = HashMap::with_capacity(authors.len());
        for author in authors {
            author_map.entry(author.id).or_insert(author);
        }

        let mut book_map = HashMap::with_capacity(books.len());
        for book in books {
            book_map.entry(book.id).or_insert(book);
        }

        Self {
            authors: author_map,
            books: book_map,
        }
    }

    fn author(&self, author_id: AuthorId) -> Option<&'a Author> {
        let author = self.authors.get(&author_id).copied();
        if author.is_none() {
            trace!(author_id, "skipping dangling author reference");
        }
        author
    }

    fn book(&self, book_id: BookId) -> Option<&'a Book> {
        let book = self.books.get(&book_id).copied();
        if book.is_none() {
            trace!(book_id, "skipping dangling book reference");
        }
        book
    }
}

// ============================================================================
// LOOKUPS
// ============================================================================

/// Find book by ID
pub fn find_book_by_id(book_id: BookId, books: &[Book]) -> Option<&Book> {
    books.iter().find(|book| book.id == book_id)
}

/// Find author by name (case-insensitive)
pub fn find_author_by_name<'a>(name: &str, authors: &'a [Author]) -> Option<&'a Author> {
    authors.iter().find(|author| author.has_name(name))
}

// ============================================================================
// AGGREGATIONS
// ============================================================================

/// One `(author, book count)` entry per author, in input order
pub fn book_counts_per_author(authors: &[Author]) -> Vec<AuthorBookCount> {
    authors
        .iter()
        .map(|author| AuthorBookCount {
            author: author.name.clone(),
            book_count: author.books.len(),
        })
        .collect()
}

/// Group titles by color in the order books are encountered
pub fn group_books_by_color(books: &[Book]) -> ColorGroups {
    let mut groups = ColorGroups::new();
    for book in books {
        groups.push(&book.color, &book.title);
    }
    groups
}

// ============================================================================
// RELATIONAL QUERIES
// ============================================================================

/// Titles of every book credited to the named author
///
/// Returns an empty list when no author has that name. The name is resolved
/// to author ids once; books are then matched on their `authors` ids, in book
/// order. Several authors sharing a name are treated as one.
pub fn titles_by_author(name: &str, authors: &[Author], books: &[Book]) -> Vec<String> {
    let author_ids: HashSet<AuthorId> = authors
        .iter()
        .filter(|author| author.has_name(name))
        .map(|author| author.id)
        .collect();

    if author_ids.is_empty() {
        trace!(name, "no author with this name");
        return Vec::new();
    }

    books
        .iter()
        .filter(|book| book.authors.iter().any(|id| author_ids.contains(id)))
        .map(|book| book.title.clone())
        .collect()
}

/// Name of the author with the most books
///
/// Ties keep the earliest author. An empty author list is a caller error.
pub fn most_prolific_author(authors: &[Author]) -> Result<&str> {
    let (first, rest) = authors
        .split_first()
        .ok_or(ShelfError::EmptyCollection("most_prolific_author"))?;

    let prolific = rest.iter().fold(first, |best, author| {
        if author.books.len() > best.books.len() {
            author
        } else {
            best
        }
    });

    Ok(&prolific.name)
}

/// Titles of every book sharing an author with `book_id`, the seed included
///
/// A book is related when any of its authors has the same name as one of the
/// seed book's authors. Titles are deduplicated in first-seen order. Returns
/// an empty list when the seed book does not exist.
pub fn related_books_by_book(book_id: BookId, authors: &[Author], books: &[Book]) -> Vec<String> {
    let Some(seed) = find_book_by_id(book_id, books) else {
        trace!(book_id, "no book with this id");
        return Vec::new();
    };

    let index = Index::new(authors, books);
    let seed_names: HashSet<String> = seed
        .authors
        .iter()
        .filter_map(|id| index.author(*id))
        .map(|author| author.name.to_lowercase())
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut titles = Vec::new();

    for book in books {
        let related = book
            .authors
            .iter()
            .filter_map(|id| index.author(*id))
            .any(|author| seed_names.contains(&author.name.to_lowercase()));

        if related && seen.insert(book.title.as_str()) {
            titles.push(book.title.clone());
        }
    }

    titles
}

/// Co-authorship incidents per author name, in first-seen order
///
/// For every book an author lists, each *other* author credited on that book
/// adds one. A three-author book therefore adds two to each of its authors.
/// Authors whose names match case-insensitively share one entry.
pub fn coauthorship_counts(authors: &[Author], books: &[Book]) -> Vec<CoauthorshipCount> {
    tally_coauthorships(authors, books)
        .into_iter()
        .map(|(name, count)| CoauthorshipCount {
            author: name.to_string(),
            count,
        })
        .collect()
}

/// Name of the author with the most co-authorship incidents
///
/// Ties keep the author whose name was seen first. An empty author list is a
/// caller error.
pub fn most_collaborative_author<'a>(authors: &'a [Author], books: &[Book]) -> Result<&'a str> {
    let tally = tally_coauthorships(authors, books);

    let mut best: Option<(&'a str, usize)> = None;
    for (name, count) in tally {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((name, count)),
        }
    }

    best.map(|(name, _)| name)
        .ok_or(ShelfError::EmptyCollection("most_collaborative_author"))
}

fn tally_coauthorships<'a>(authors: &'a [Author], books: &[Book]) -> Vec<(&'a str, usize)> {
    let index = Index::new(authors, books);
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut tally: Vec<(&'a str, usize)> = Vec::new();

    for author in authors {
        let slot = *slots
            .entry(author.name.to_lowercase())
            .or_insert_with(|| {
                tally.push((author.name.as_str(), 0));
                tally.len() - 1
            });

        let incidents: usize = author
            .books
            .iter()
            .filter_map(|book_id| index.book(*book_id))
            .map(|book| {
                book.authors
                    .iter()
                    .filter_map(|id| index.author(*id))
                    .filter(|coauthor| !names_match(&coauthor.name, &author.name))
                    .count()
            })
            .sum();

        tally[slot].1 += incidents;
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors() -> Vec<Author> {
        vec![
            Author::new(1, "Ada", vec![10, 11]),
            Author::new(2, "Brin", vec![11, 12, 13]),
            Author::new(3, "Cole", vec![13]),
            Author::new(4, "Dane", vec![14]),
        ]
    }

    fn books() -> Vec<Book> {
        vec![
            Book::new(10, "Alpha", "red", vec![1]),
            Book::new(11, "Beta", "blue", vec![1, 2]),
            Book::new(12, "Gamma", "red", vec![2]),
            Book::new(13, "Delta", "green", vec![2, 3]),
            Book::new(14, "Epsilon", "blue", vec![4]),
        ]
    }

    #[test]
    fn test_find_book_by_id() {
        let books = books();
        assert_eq!(find_book_by_id(12, &books).unwrap().title, "Gamma");
        assert!(find_book_by_id(99, &books).is_none());
    }

    #[test]
    fn test_find_author_by_name_ignores_case() {
        let authors = authors();
        assert_eq!(find_author_by_name("bRiN", &authors).unwrap().id, 2);
        assert!(find_author_by_name("Nobody", &authors).is_none());
    }

    #[test]
    fn test_book_counts_keep_input_order() {
        let counts = book_counts_per_author(&authors());
        let pairs: Vec<_> = counts
            .iter()
            .map(|c| (c.author.as_str(), c.book_count))
            .collect();
        assert_eq!(pairs, vec![("Ada", 2), ("Brin", 3), ("Cole", 1), ("Dane", 1)]);
    }

    #[test]
    fn test_group_books_by_color() {
        let groups = group_books_by_color(&books());
        assert_eq!(groups.colors().collect::<Vec<_>>(), vec!["red", "blue", "green"]);
        assert_eq!(groups.get("red").unwrap(), ["Alpha", "Gamma"]);
        assert_eq!(groups.get("blue").unwrap(), ["Beta", "Epsilon"]);
        assert!(group_books_by_color(&[]).is_empty());
    }

    #[test]
    fn test_titles_by_author() {
        let (authors, books) = (authors(), books());
        assert_eq!(titles_by_author("brin", &authors, &books), vec!["Beta", "Gamma", "Delta"]);
        assert!(titles_by_author("Nobody", &authors, &books).is_empty());
    }

    #[test]
    fn test_titles_by_author_follows_book_side_ids() {
        // Ada's own list omits book 12, but book 12 credits her
        let authors = vec![Author::new(1, "Ada", vec![10])];
        let books = vec![
            Book::new(10, "Alpha", "red", vec![1]),
            Book::new(12, "Gamma", "red", vec![1]),
        ];
        assert_eq!(titles_by_author("ADA", &authors, &books), vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_most_prolific_author() {
        assert_eq!(most_prolific_author(&authors()).unwrap(), "Brin");
    }

    #[test]
    fn test_most_prolific_author_tie_keeps_first() {
        let authors = vec![
            Author::new(1, "First", vec![1, 2]),
            Author::new(2, "Second", vec![3, 4]),
        ];
        assert_eq!(most_prolific_author(&authors).unwrap(), "First");

        let reversed: Vec<_> = authors.into_iter().rev().collect();
        assert_eq!(most_prolific_author(&reversed).unwrap(), "Second");
    }

    #[test]
    fn test_most_prolific_author_rejects_empty() {
        let err = most_prolific_author(&[]).unwrap_err();
        assert!(matches!(err, ShelfError::EmptyCollection("most_prolific_author")));
    }

    #[test]
    fn test_related_books_include_seed_and_coauthor_works() {
        let (authors, books) = (authors(), books());
        // Beta is by Ada and Brin, so both bibliographies come back
        assert_eq!(
            related_books_by_book(11, &authors, &books),
            vec!["Alpha", "Beta", "Gamma", "Delta"]
        );
        assert_eq!(related_books_by_book(14, &authors, &books), vec!["Epsilon"]);
        assert!(related_books_by_book(99, &authors, &books).is_empty());
    }

    #[test]
    fn test_related_books_dedupe_titles() {
        let authors = vec![Author::new(1, "Ada", vec![1, 2])];
        let books = vec![
            Book::new(1, "Reprint", "red", vec![1]),
            Book::new(2, "Reprint", "blue", vec![1]),
        ];
        assert_eq!(related_books_by_book(2, &authors, &books), vec!["Reprint"]);
    }

    #[test]
    fn test_related_books_skip_dangling_authors() {
        let authors = vec![Author::new(1, "Ada", vec![1, 2])];
        let books = vec![
            Book::new(1, "Alpha", "red", vec![1, 77]),
            Book::new(2, "Orphan", "red", vec![88]),
        ];
        assert_eq!(related_books_by_book(1, &authors, &books), vec!["Alpha"]);
        assert!(related_books_by_book(2, &authors, &books).is_empty());
    }

    #[test]
    fn test_coauthorship_counts() {
        let counts = coauthorship_counts(&authors(), &books());
        let pairs: Vec<_> = counts.iter().map(|c| (c.author.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("Ada", 1), ("Brin", 2), ("Cole", 1), ("Dane", 0)]);
    }

    #[test]
    fn test_coauthorship_counts_every_other_author_instance() {
        let authors = vec![
            Author::new(1, "Ada", vec![1]),
            Author::new(2, "Brin", vec![1]),
            Author::new(3, "Cole", vec![1]),
        ];
        let books = vec![Book::new(1, "Trio", "red", vec![1, 2, 3])];

        let counts = coauthorship_counts(&authors, &books);
        assert!(counts.iter().all(|c| c.count == 2));
    }

    #[test]
    fn test_coauthorship_counts_skip_dangling_references() {
        let authors = vec![Author::new(1, "Ada", vec![1, 404])];
        let books = vec![Book::new(1, "Alpha", "red", vec![1, 99])];

        let counts = coauthorship_counts(&authors, &books);
        assert_eq!(counts[0].count, 0);
    }

    fn same_name_authors() -> (Vec<Author>, Vec<Book>) {
        let authors = vec![
            Author::new(1, "Ada", vec![1]),
            Author::new(2, "ADA", vec![1]),
            Author::new(3, "Brin", vec![1, 2]),
        ];
        let books = vec![
            Book::new(1, "Trio", "red", vec![1, 2, 3]),
            Book::new(2, "Duo", "blue", vec![3, 2]),
            Book::new(3, "Trio", "green", vec![2]),
        ];
        (authors, books)
    }

    #[test]
    fn test_coauthorship_counts_merge_same_name_authors() {
        let (authors, books) = same_name_authors();
        let counts = coauthorship_counts(&authors, &books);

        // "ADA" folds into the first-seen "Ada" entry and never counts "Ada"
        let pairs: Vec<_> = counts.iter().map(|c| (c.author.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("Ada", 2), ("Brin", 3)]);
        assert_eq!(most_collaborative_author(&authors, &books).unwrap(), "Brin");
    }

    #[test]
    fn test_titles_by_author_merges_same_name_ids() {
        let (authors, books) = same_name_authors();
        assert_eq!(titles_by_author("ada", &authors, &books), vec!["Trio", "Duo", "Trio"]);
    }

    #[test]
    fn test_most_collaborative_author() {
        assert_eq!(most_collaborative_author(&authors(), &books()).unwrap(), "Brin");
    }

    #[test]
    fn test_most_collaborative_author_tie_keeps_first() {
        let authors = vec![
            Author::new(1, "Ada", vec![1]),
            Author::new(2, "Brin", vec![1]),
        ];
        let books = vec![Book::new(1, "Duet", "red", vec![1, 2])];
        assert_eq!(most_collaborative_author(&authors, &books).unwrap(), "Ada");
    }

    #[test]
    fn test_most_collaborative_author_rejects_empty() {
        let err = most_collaborative_author(&[], &books()).unwrap_err();
        assert!(matches!(err, ShelfError::EmptyCollection(_)));
    }
}
