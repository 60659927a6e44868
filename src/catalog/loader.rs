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


//! JSON loading for author and book lists
//!
//! Each file holds a single JSON array of records. Records are taken as-is:
//! no id uniqueness or cross-reference checks happen here.

use crate::catalog::models::{Author, Book};
use crate::error::{Result, ShelfError};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// File name of the author list inside a data directory
pub const AUTHORS_FILE: &str = "authors.json";

/// File name of the book list inside a data directory
pub const BOOKS_FILE: &str = "books.json";

/// Decode an author list from a JSON string
pub fn parse_authors(json: &str, source_name: &str) -> Result<Vec<Author>> {
    parse_records(json, source_name)
}

/// Decode a book list from a JSON string
pub fn parse_books(json: &str, source_name: &str) -> Result<Vec<Book>> {
    parse_records(json, source_name)
}

/// Read and decode an author list file
pub fn load_authors<P: AsRef<Path>>(path: P) -> Result<Vec<Author>> {
    load_records(path.as_ref())
}

/// Read and decode a book list file
pub fn load_books<P: AsRef<Path>>(path: P) -> Result<Vec<Book>> {
    load_records(path.as_ref())
}

fn parse_records<T: DeserializeOwned>(json: &str, source_name: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|e| ShelfError::invalid_data(source_name, &e))
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(ShelfError::FileNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| {
        ShelfError::FileIoError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let records: Vec<T> = parse_records(&json, &path.display().to_string())?;
    debug!(path = %path.display(), records = records.len(), "loaded catalog file");
    Ok(records)
}
