//! Error types for the course planner
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// The main error type for course planner operations
#[derive(Error, Debug)]
pub enum Error {
    // ========== Loader Errors ==========
    #[error("Unable to open file '{path}': {source}")]
    FileOpen {
        path: String,
        source: std::io::Error,
    },

    #[error("Unable to read course data from '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    // ========== Catalog Errors ==========
    #[error("Catalog error: course '{0}' not found")]
    CourseNotFound(String),

    #[error("No course data loaded yet. Choose 'Load Data' first.")]
    NotLoaded,

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for course planner operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CourseNotFound("CS101".to_string());
        assert_eq!(err.to_string(), "Catalog error: course 'CS101' not found");

        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::FileOpen {
            path: "courses.csv".to_string(),
            source,
        };
        assert!(err.to_string().contains("courses.csv"));
    }
}
