//! Error types for the extraction pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while turning a byte source into metadata and tokens.
///
/// Missing `<title>`, `<meta>` or `<body>` elements are not errors; they
/// produce empty strings.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The byte source could not be read (missing file, permission denied, ...)
    #[error("error reading file {}: {source}", path.display())]
    SourceRead {
        /// Location that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The bytes are binary content rather than text
    #[error("error loading HTML: binary content (NUL byte at offset {offset})")]
    MalformedInput {
        /// Position of the first NUL byte
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_read_message_names_path() {
        let err = ExtractError::SourceRead {
            path: PathBuf::from("input/missing.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.starts_with("error reading file input/missing.html"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_malformed_input_message_names_offset() {
        let err = ExtractError::MalformedInput { offset: 12 };
        assert_eq!(
            err.to_string(),
            "error loading HTML: binary content (NUL byte at offset 12)"
        );
    }
}
