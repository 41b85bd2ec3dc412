//! Error types for document comparison operations.

use crate::document::DocumentFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by extraction and comparison.
///
/// Extraction errors are non-retryable: local file parsing has no
/// transient-failure model. They propagate unmodified to the caller,
/// which must not proceed to diffing with partial data.
#[derive(Error, Debug)]
pub enum CompareError {
    /// The file could not be parsed in its expected format
    /// (corrupt file, wrong encoding, unsupported internal structure).
    #[error("unreadable {format} document {path:?}: {reason}")]
    UnreadableDocument {
        format: DocumentFormat,
        path: PathBuf,
        reason: String,
    },

    /// Extraction succeeded but yielded zero lines of text.
    ///
    /// Comparing against an empty document is valid degenerate output
    /// (every line of the other side unmatched), so `compare_documents`
    /// does not raise this; it is returned by
    /// [`ExtractedDocument::require_text`](crate::document::ExtractedDocument::require_text)
    /// for callers that want the distinction.
    #[error("{format} document {path:?} contains no extractable text")]
    EmptyDocument {
        format: DocumentFormat,
        path: PathBuf,
    },

    /// The path's extension maps to no supported document format.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;
