//! Error types for DOT conversion
//!
//! Provides error handling for:
//! - Reading and parsing the input graph (ingress)
//! - Writing the rendered document (egress)
//! - Loading converter configuration

use nomad_graph::ParseError;
use std::path::PathBuf;

/// Errors during a conversion run
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input file could not be opened or read
    #[error("io error reading {path}: {source}")]
    Read {
        /// Input file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Input file is not a graph document
    #[error("invalid graph in {path}: {source}")]
    Parse {
        /// Input file
        path: PathBuf,
        /// Reader failure
        #[source]
        source: ParseError,
    },

    /// Output file could not be created or written
    #[error("io error writing {path}: {source}")]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Input stream is not a graph document
    #[error("invalid graph: {0}")]
    ParseStream(#[from] ParseError),

    /// Output stream failed
    #[error("io error writing document: {0}")]
    WriteStream(#[source] std::io::Error),
}

impl ConvertError {
    /// Create read error for path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Attach the input path to a parse failure
    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create write error for path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Errors while loading converter configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Graph name cannot be used as a bare DOT identifier
    #[error("invalid graph name '{0}': expected letters, digits or '_', not starting with a digit")]
    InvalidGraphName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = ConvertError::read("out.json", source);
        assert_eq!(err.to_string(), "io error reading out.json: not found");
    }

    #[test]
    fn parse_error_conversion() {
        let source = nomad_graph::SiteGraph::from_json_str("[]").unwrap_err();
        let err: ConvertError = source.into();
        assert!(matches!(err, ConvertError::ParseStream(_)));
        assert!(err.to_string().starts_with("invalid graph: "));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidGraphName("1st".to_string());
        assert!(err.to_string().contains("'1st'"));
    }
}
