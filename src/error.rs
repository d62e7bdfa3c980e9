//! Error types for the ats-report library.

use std::io;
use thiserror::Error;

/// Result type alias for ats-report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The report title has no usable characters left after sanitization.
    #[error("Report title {0:?} is empty after sanitization")]
    EmptyTitle(String),

    /// There is nothing to render.
    #[error("No renderable content: {0}")]
    EmptyContent(String),

    /// A single classified line could not be styled.
    #[error("Styling error: {0}")]
    Style(String),

    /// The layout engine could not place content on a page.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Error writing the PDF structure.
    #[error("PDF writing error: {0}")]
    Pdf(String),

    /// Error during rendering (JSON, etc.).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyTitle("!!!".to_string());
        assert_eq!(
            err.to_string(),
            "Report title \"!!!\" is empty after sanitization"
        );

        let err = Error::EmptyContent("combined report has no sections".to_string());
        assert_eq!(
            err.to_string(),
            "No renderable content: combined report has no sections"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
