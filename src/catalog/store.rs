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


//! Owned catalog of authors and books
//!
//! `Catalog` holds both collections for the lifetime of a query session and
//! offers every query as a method. It has no setters; build a new one to
//! change the data.

use crate::catalog::config::CatalogSource;
use crate::catalog::loader;
use crate::catalog::models::*;
use crate::catalog::queries;
use crate::error::Result;
use tracing::debug;

const SAMPLE_AUTHORS: &str = include_str!("../../data/authors.json");
const SAMPLE_BOOKS: &str = include_str!("../../data/books.json");

/// Read-only author and book collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    authors: Vec<Author>,
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        debug!(authors = authors.len(), books = books.len(), "catalog ready");
        Self { authors, books }
    }

    /// Decode both collections from JSON strings
    pub fn from_json_str(authors_json: &str, books_json: &str) -> Result<Self> {
        let authors = loader::parse_authors(authors_json, loader::AUTHORS_FILE)?;
        let books = loader::parse_books(books_json, loader::BOOKS_FILE)?;
        Ok(Self::new(authors, books))
    }

    /// Load `authors.json` and `books.json` from a directory
    pub fn from_dir<P: AsRef<std::path::Path>>(dir: P) -> Result<Self> {
        Self::load(&CatalogSource::directory(dir)?)
    }

    /// Sample catalog compiled into the crate
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_AUTHORS, SAMPLE_BOOKS)
    }

    pub fn load(source: &CatalogSource) -> Result<Self> {
        match source.paths() {
            None => Self::sample(),
            Some((authors_path, books_path)) => {
                let authors = loader::load_authors(&authors_path)?;
                let books = loader::load_books(&books_path)?;
                Ok(Self::new(authors, books))
            }
        }
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    // ===== Queries =====

    pub fn find_book_by_id(&self, book_id: BookId) -> Option<&Book> {
        queries::find_book_by_id(book_id, &self.books)
    }

    pub fn find_author_by_name(&self, name: &str) -> Option<&Author> {
        queries::find_author_by_name(name, &self.authors)
    }

    pub fn book_counts_per_author(&self) -> Vec<AuthorBookCount> {
        queries::book_counts_per_author(&self.authors)
    }

    pub fn group_books_by_color(&self) -> ColorGroups {
        queries::group_books_by_color(&self.books)
    }

    pub fn titles_by_author(&self, name: &str) -> Vec<String> {
        queries::titles_by_author(name, &self.authors, &self.books)
    }

    pub fn most_prolific_author(&self) -> Result<&str> {
        queries::most_prolific_author(&self.authors)
    }

    pub fn related_books_by_book(&self, book_id: BookId) -> Vec<String> {
        queries::related_books_by_book(book_id, &self.authors, &self.books)
    }

    pub fn coauthorship_counts(&self) -> Vec<CoauthorshipCount> {
        queries::coauthorship_counts(&self.authors, &self.books)
    }

    pub fn most_collaborative_author(&self) -> Result<&str> {
        queries::most_collaborative_author(&self.authors, &self.books)
    }
}
