//! DOT document model
//!
//! ```text
//! digraph <name> {
//!   "<source>" -> { "<dest1>", "<dest2>" };
//! }
//! ```
//!
//! Lines are separated by `\n` and the closing brace has no trailing
//! newline. Identifiers are quoted but not escaped.

use std::fmt;

/// One source node and all of its outbound connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStatement {
    source: String,
    destinations: Vec<String>,
}

impl EdgeStatement {
    /// Create statement
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<String>, destinations: Vec<String>) -> Self {
        Self {
            source: source.into(),
            destinations,
        }
    }

    /// Source node
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Destinations in their original order
    #[inline]
    #[must_use]
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }
}

impl fmt::Display for EdgeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" -> {{ ", self.source)?;
        for (i, destination) in self.destinations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{destination}\"")?;
        }
        // an empty list renders as `{  }`
        f.write_str(" };")
    }
}

/// A complete directed-graph description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotDocument {
    name: String,
    statements: Vec<EdgeStatement>,
}

impl DotDocument {
    /// Create document
    #[must_use]
    pub fn new(name: impl Into<String>, statements: Vec<EdgeStatement>) -> Self {
        Self {
            name: name.into(),
            statements,
        }
    }

    /// Graph name used in the header
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Edge statements in output order
    #[inline]
    #[must_use]
    pub fn statements(&self) -> &[EdgeStatement] {
        &self.statements
    }

    /// Header line, without newline
    #[must_use]
    pub fn header(&self) -> String {
        format!("digraph {} {{", self.name)
    }

    /// Render to text
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DotDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for statement in &self.statements {
            writeln!(f, "  {statement}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_with_destinations() {
        let statement = EdgeStatement::new("a", vec!["b".to_string(), "c".to_string()]);
        assert_eq!(statement.to_string(), r#""a" -> { "b", "c" };"#);
    }

    #[test]
    fn statement_without_destinations() {
        let statement = EdgeStatement::new("a", Vec::new());
        assert_eq!(statement.to_string(), r#""a" -> {  };"#);
    }

    #[test]
    fn quotes_are_not_escaped() {
        let statement = EdgeStatement::new("a\"b", vec!["c".to_string()]);
        assert_eq!(statement.to_string(), r#""a"b" -> { "c" };"#);
    }

    #[test]
    fn empty_document() {
        let document = DotDocument::new("WebsiteConnections", Vec::new());
        assert_eq!(document.render(), "digraph WebsiteConnections {\n}");
    }

    #[test]
    fn statements_are_indented() {
        let document = DotDocument::new("G", vec![EdgeStatement::new("x", Vec::new())]);
        assert_eq!(document.render(), "digraph G {\n  \"x\" -> {  };\n}");
        assert_eq!(document.header(), "digraph G {");
        assert_eq!(document.name(), "G");
    }
}
