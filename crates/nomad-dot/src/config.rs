//! Converter configuration
//!
//! Every field has a default, so the empty configuration reproduces the
//! fixed behavior: read `out.json`, write `out.dot`, name the graph
//! `WebsiteConnections`.
//!
//! ```toml
//! input = "nomaddata.json"
//! output = "nomaddata.dot"
//! graph_name = "FranceCrawl"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default input file
pub const DEFAULT_INPUT: &str = "out.json";

/// Default output file
pub const DEFAULT_OUTPUT: &str = "out.dot";

/// Default graph name
pub const DEFAULT_GRAPH_NAME: &str = "WebsiteConnections";

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// JSON graph to read
    pub input: PathBuf,
    /// DOT file to write (overwritten)
    pub output: PathBuf,
    /// Name in the `digraph` header
    pub graph_name: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With input path
    #[inline]
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// With output path
    #[inline]
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// With graph name
    #[inline]
    #[must_use]
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    /// Parse from TOML text; missing keys take their defaults
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Toml` if it cannot be parsed
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded converter config");
        Ok(config)
    }

    /// Check the graph name is a bare DOT identifier
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidGraphName` otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_dot_identifier(&self.graph_name) {
            Ok(())
        } else {
            Err(ConfigError::InvalidGraphName(self.graph_name.clone()))
        }
    }
}

fn is_dot_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_names() {
        let config = ConverterConfig::new();
        assert_eq!(config.input, PathBuf::from("out.json"));
        assert_eq!(config.output, PathBuf::from("out.dot"));
        assert_eq!(config.graph_name, "WebsiteConnections");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ConverterConfig::from_toml_str("").unwrap(), ConverterConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = ConverterConfig::from_toml_str("graph_name = \"Crawl\"\n").unwrap();
        assert_eq!(config.graph_name, "Crawl");
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = ConverterConfig::from_toml_str("format = \"svg\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn graph_name_validation() {
        for good in ["G", "_g", "Website_Connections2"] {
            assert!(ConverterConfig::new().with_graph_name(good).validate().is_ok(), "{good}");
        }
        for bad in ["", "2nd", "my graph", "a-b", "quote\""] {
            assert!(ConverterConfig::new().with_graph_name(bad).validate().is_err(), "{bad}");
        }
    }

    #[test]
    fn builder_methods() {
        let config = ConverterConfig::new()
            .with_input("crawl.json")
            .with_output("crawl.dot");
        assert_eq!(config.input, PathBuf::from("crawl.json"));
        assert_eq!(config.output, PathBuf::from("crawl.dot"));
    }
}
