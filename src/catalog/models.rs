//! Catalog models for shelf-core
//!
//! Records are decoded straight from `authors.json` / `books.json`. Cross
//! references are plain ids: `Author::books` lists book ids and
//! `Book::authors` lists author ids. Nothing guarantees those ids resolve, so
//! every query treats a dangling id as "skip this one".

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Author identifier
pub type AuthorId = i64;

/// Book identifier
pub type BookId = i64;

// ============================================================================
// MAIN ENTITIES
// ============================================================================

/// Author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    /// Display name. Compared case-insensitively everywhere.
    pub name: String,
    /// Books written or co-written, in catalog order
    #[serde(default)]
    pub books: Vec<BookId>,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>, books: Vec<BookId>) -> Self {
        Self {
            id,
            name: name.into(),
            books,
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Category label
    pub color: String,
    /// One or more author ids; more than one means co-authorship
    #[serde(default)]
    pub authors: Vec<AuthorId>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        color: impl Into<String>,
        authors: Vec<AuthorId>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            color: color.into(),
            authors,
        }
    }
}

/// Compare two display names ignoring case
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

// ============================================================================
// QUERY RESULTS
// ============================================================================

/// Number of books listed on one author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBookCount {
    pub author: String,
    #[serde(rename = "bookCount")]
    pub book_count: usize,
}

/// Co-authorship incidents attributed to one author name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoauthorshipCount {
    pub author: String,
    pub count: usize,
}

/// Titles grouped by color, keys in first-seen order
///
/// Serializes as a JSON object (`{ "<color>": ["<title>", ...] }`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl ColorGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a title under `color`, creating the key on first use
    pub fn push(&mut self, color: &str, title: &str) {
        match self.groups.iter_mut().find(|(key, _)| key == color) {
            Some((_, titles)) => titles.push(title.to_string()),
            None => self
                .groups
                .push((color.to_string(), vec![title.to_string()])),
        }
    }

    pub fn get(&self, color: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(key, _)| key == color)
            .map(|(_, titles)| titles.as_slice())
    }

    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, titles)| (key.as_str(), titles.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for ColorGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (color, titles) in &self.groups {
            map.serialize_entry(color, titles)?;
        }
        map.end()
    }
}
