//! Error types for text-to-frame conversion

use thiserror::Error;

/// Errors raised while parsing a flag line or converting cell text.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Malformed flag line. The payload keeps the underlying parser
    /// rendering for diagnostics; the user-facing message is fixed.
    #[error("Invalid argument supplied. Use --help to see valid arguments.")]
    InvalidArgument {
        /// Rendered output of the argument parser.
        detail: String,
    },

    /// A data row declared more fields than the first row of the input.
    #[error("row at line {row} has {found} fields, expected {expected} from the first row")]
    TooManyColumns {
        /// 1-based physical line number of the offending row.
        row: usize,
        /// Field count declared by the first non-blank row.
        expected: usize,
        /// Field count actually found.
        found: usize,
    },

    /// Input contained no non-blank lines.
    #[error("no columns to parse from empty input")]
    EmptyInput,

    /// Failed to read from the underlying source.
    #[error("Read error: {0}")]
    ReadError(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = FrameError::InvalidArgument {
            detail: "unexpected argument '--bogus'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument supplied. Use --help to see valid arguments."
        );
    }

    #[test]
    fn test_too_many_columns_display() {
        let err = FrameError::TooManyColumns {
            row: 2,
            expected: 3,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "row at line 2 has 4 fields, expected 3 from the first row"
        );
    }

    #[test]
    fn test_empty_input_display() {
        assert_eq!(
            FrameError::EmptyInput.to_string(),
            "no columns to parse from empty input"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FrameError>();
    }
}
