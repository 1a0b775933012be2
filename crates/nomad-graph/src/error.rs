//! Error types for graph ingress and egress
//!
//! - [`ParseError`]: reading a graph out of its JSON representation
//! - [`RenderError`]: writing a collected hostname graph back out

use serde_json::error::Category;
use std::path::PathBuf;

/// Errors while reading a graph document
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The document is not well-formed JSON (or ends early)
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
        /// Reader message
        message: String,
    },

    /// Well-formed JSON that is not an object of string arrays
    #[error("unexpected graph shape at line {line}, column {column}: {message}")]
    Shape {
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
        /// Reader message
        message: String,
    },

    /// The underlying reader failed
    #[error("io error reading graph: {0}")]
    Io(#[source] std::io::Error),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        match err.classify() {
            Category::Io => Self::Io(err.into()),
            Category::Data => Self::Shape {
                line,
                column,
                message: err.to_string(),
            },
            Category::Syntax | Category::Eof => Self::Syntax {
                line,
                column,
                message: err.to_string(),
            },
        }
    }
}

/// Errors while rendering a hostname graph
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// JSON encoding failed
    #[error("failed to encode graph: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        /// Destination file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
