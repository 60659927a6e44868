//! Query helpers over an in-memory catalog of authors and books.
//!
//! Nothing runs at load time. Build a [`catalog::Catalog`] (or hold your own
//! `Vec<Author>` / `Vec<Book>`) and call the queries in [`catalog::queries`].

pub mod catalog;
pub mod error;

pub use catalog::{Author, Book, Catalog};
pub use error::{Result, ShelfError};
