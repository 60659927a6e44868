//! Error types for shelf-core
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Errors are grouped by where they arise: loading a catalog from disk, query
//! preconditions, and caller-facing lookups.
//!
//! Lookups that find nothing are not errors. `find_book_by_id` and
//! `find_author_by_name` return `Option`, and list-returning queries return an
//! empty `Vec`. Only callers that need to abort on absence (the CLI) turn a
//! `None` into `ShelfError::RecordNotFound`.

use thiserror::Error;

/// Result type alias using our ShelfError type
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Main error type for shelf-core
#[derive(Error, Debug)]
pub enum ShelfError {
    // ===== Loading Errors =====

    /// Data file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Data file exists but could not be read
    #[error("File I/O error: {0}")]
    FileIoError(String),

    /// Data file was read but could not be decoded
    #[error("Invalid data in {source_name}: {message}")]
    InvalidData {
        /// File name or label of the in-memory source
        source_name: String,
        message: String,
    },

    // ===== Query Errors =====

    /// A query that needs at least one record was handed an empty collection
    #[error("Empty collection: {0} requires at least one author")]
    EmptyCollection(&'static str),

    /// Record not found, for callers that treat absence as failure
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    // ===== Configuration Errors =====

    /// Generic input validation error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Helper methods for creating common errors
impl ShelfError {
    /// Create a RecordNotFound error with a resource name
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        ShelfError::RecordNotFound(resource.into())
    }

    /// Create an InvalidInput error with a message
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        ShelfError::InvalidInput(message.into())
    }

    /// Create an InvalidData error tagged with the source it came from
    pub fn invalid_data<S: Into<String>>(source_name: S, err: &serde_json::Error) -> Self {
        ShelfError::InvalidData {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }

    /// Check if error is a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShelfError::RecordNotFound(_))
    }

    /// Check if error happened while loading catalog data
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ShelfError::FileNotFound(_)
                | ShelfError::FileIoError(_)
                | ShelfError::InvalidData { .. }
        )
    }

    /// Get user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            ShelfError::FileNotFound(path) => {
                format!(
                    "Could not find '{}'. Set --data-dir or SHELF_DATA_DIR to a directory containing authors.json and books.json.",
                    path
                )
            }
            ShelfError::InvalidData { source_name, .. } => {
                format!("'{}' is not a valid author or book list.", source_name)
            }
            ShelfError::EmptyCollection(query) => {
                format!("Cannot run {} without any authors loaded.", query)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_errors_are_classified() {
        assert!(ShelfError::FileNotFound("authors.json".into()).is_load_error());
        assert!(ShelfError::FileIoError("denied".into()).is_load_error());
        assert!(!ShelfError::EmptyCollection("most_prolific_author").is_load_error());
        assert!(!ShelfError::not_found("book 99").is_load_error());
    }

    #[test]
    fn test_invalid_data_keeps_decoder_position() {
        let json_err = serde_json::from_str::<Vec<u8>>("[1,\n x]").unwrap_err();
        let err = ShelfError::invalid_data("books.json", &json_err);
        assert!(err.to_string().contains("books.json"));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_file_not_found_message_names_both_settings() {
        let message = ShelfError::FileNotFound("/srv/authors.json".into()).user_message();
        assert!(message.contains("--data-dir"));
        assert!(message.contains("SHELF_DATA_DIR"));
    }

    #[test]
    fn test_user_message_names_the_query() {
        let err = ShelfError::EmptyCollection("most_collaborative_author");
        assert!(err.user_message().contains("most_collaborative_author"));
        assert!(ShelfError::not_found("author 'x'").is_not_found());
    }
}
