//! Error types for wikifacts
//!
//! This module provides the error type hierarchy using `thiserror`,
//! covering the fetch collaborator and the extraction pipeline.

use thiserror::Error;

/// The main error type for wikifacts operations
#[derive(Error, Debug)]
pub enum Error {
    /// Page fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Page extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O errors from the console
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the HTTP fetch collaborator
///
/// Both failure variants mean the same thing to the user: no usable page
/// came back for this query.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("Request failed with status {0}")]
    Status(u16),

    /// Transport-level failure (DNS, TLS, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL could not be parsed
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Errors from the page-classification and extraction pipeline
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// An expected structural region is absent from the document.
    ///
    /// Fatal to the current extraction call; callers must not treat this
    /// as an empty success.
    #[error("Expected structure not found: {0}")]
    StructureNotFound(&'static str),
}

/// Result type alias for wikifacts operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = Error::Fetch(FetchError::Status(404));
        assert!(err.to_string().contains("Fetch error"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_structure_not_found_display() {
        let err = ExtractionError::StructureNotFound("div#mw-content-text");
        assert_eq!(
            err.to_string(),
            "Expected structure not found: div#mw-content-text"
        );
    }

    #[test]
    fn test_extraction_error_wraps() {
        let err: Error = ExtractionError::StructureNotFound("div#catlinks").into();
        assert!(err.to_string().contains("Extraction error"));
        assert!(err.to_string().contains("div#catlinks"));
    }
}
