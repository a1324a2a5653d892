//! Error types for the tabula library.

use thiserror::Error;

use crate::schema::FieldAccessError;

/// Main error type for conversion and export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Conversion was invoked without a source value
    #[error("Conversion source is null")]
    NullSource,

    /// Destination type cannot be produced from a temporal source
    #[error("Destination {0} is not date friendly")]
    UnsupportedDestination(String),

    /// Millisecond instant outside the representable range
    #[error("Epoch milliseconds {0} out of range")]
    MillisOutOfRange(i64),

    /// Epoch-string source that does not parse as milliseconds
    #[error("Invalid epoch-millisecond text: {0:?}")]
    InvalidMillisText(String),

    /// Document exceeds the worksheet row limit
    #[error("Document has {rows} rows, worksheet limit is {max}")]
    RowLimitExceeded { rows: usize, max: usize },

    /// Row exceeds the worksheet column limit
    #[error("Row has {cols} cells, worksheet limit is {max}")]
    ColumnLimitExceeded { cols: usize, max: usize },

    /// A record field could not be read
    #[error(transparent)]
    FieldAccess(#[from] FieldAccessError),

    /// I/O error from the byte sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tabula operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::UnsupportedDestination("bool".to_string());
        assert!(e.to_string().contains("not date friendly"));

        let e = Error::RowLimitExceeded { rows: 70_000, max: 65_536 };
        assert!(e.to_string().contains("70000"));
        assert!(e.to_string().contains("65536"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
