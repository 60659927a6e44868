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


//! Where a catalog comes from
//!
//! The library never decides this on its own. Callers pick a source, or use
//! `CatalogSource::from_env()` to honour `SHELF_DATA_DIR`.

use crate::catalog::loader::{AUTHORS_FILE, BOOKS_FILE};
use crate::error::{Result, ShelfError};
use std::path::{Path, PathBuf};

/// Environment variable naming a data directory
pub const DATA_DIR_ENV: &str = "SHELF_DATA_DIR";

/// Catalog data source
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// Sample data compiled into the crate
    #[default]
    Sample,
    /// Directory holding `authors.json` and `books.json`
    Directory(PathBuf),
    /// Explicit file paths
    Files { authors: PathBuf, books: PathBuf },
}

impl CatalogSource {
    /// Directory source, rejecting blank paths
    pub fn directory<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err(ShelfError::invalid_input("data directory path is empty"));
        }
        Ok(CatalogSource::Directory(dir.to_path_buf()))
    }

    /// Read `SHELF_DATA_DIR`, falling back to the sample data when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => Self::directory(PathBuf::from(dir)),
            None => Ok(CatalogSource::Sample),
        }
    }

    /// Author and book file paths, or `None` for the sample source
    pub fn paths(&self) -> Option<(PathBuf, PathBuf)> {
        match self {
            CatalogSource::Sample => None,
            CatalogSource::Directory(dir) => Some((dir.join(AUTHORS_FILE), dir.join(BOOKS_FILE))),
            CatalogSource::Files { authors, books } => Some((authors.clone(), books.clone())),
        }
    }
}
