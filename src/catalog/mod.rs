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


//! Author and book catalog
//!
//! This module holds the two record collections and the queries over them.
//!
//! # Layout
//! - `models` - Author and Book records plus query result types
//! - `queries` - Lookups, aggregations and relational queries
//! - `loader` - JSON decoding of `authors.json` / `books.json`
//! - `config` - Choosing where catalog data comes from
//! - `store` - `Catalog`, an owned pair of collections
//!
//! # Usage Example
//! ```
//! use shelf_core::catalog::{queries, Catalog};
//!
//! # fn example() -> shelf_core::error::Result<()> {
//! let catalog = Catalog::sample()?;
//!
//! let book = queries::find_book_by_id(37, catalog.books());
//! assert_eq!(book.map(|b| b.title.as_str()), Some("The Shining Girls"));
//!
//! let related = catalog.related_books_by_book(37);
//! assert_eq!(related, vec!["The Shining Girls", "Zoo City"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod loader;
pub mod models;
pub mod queries;
pub mod store;

// Re-export commonly used types
pub use config::CatalogSource;
pub use models::{
    Author, AuthorBookCount, AuthorId, Book, BookId, CoauthorshipCount, ColorGroups,
};
pub use queries::{
    book_counts_per_author, coauthorship_counts, find_author_by_name, find_book_by_id,
    group_books_by_color, most_collaborative_author, most_prolific_author,
    related_books_by_book, titles_by_author,
};
pub use store::Catalog;
