//! Site graph → DOT conversion

use crate::config::DEFAULT_GRAPH_NAME;
use crate::document::{DotDocument, EdgeStatement};
use nomad_graph::SiteGraph;

/// Formats a [`SiteGraph`] as a [`DotDocument`]
///
/// One edge statement per source node, in the graph's iteration order, with
/// destinations in their original order. Nothing is sorted, de-duplicated, or
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConverter {
    graph_name: String,
}

impl Default for GraphConverter {
    fn default() -> Self {
        Self {
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
        }
    }
}

impl GraphConverter {
    /// Create converter with the default graph name
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With graph name
    #[inline]
    #[must_use]
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    /// Graph name written in the header
    #[inline]
    #[must_use]
    pub fn graph_name(&self) -> &str {
        &self.graph_name
    }

    /// Convert graph into a document
    #[must_use]
    pub fn convert(&self, graph: &SiteGraph) -> DotDocument {
        let statements = graph
            .iter()
            .map(|(source, destinations)| EdgeStatement::new(source, destinations.to_vec()))
            .collect();
        DotDocument::new(self.graph_name.clone(), statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(json: &str) -> SiteGraph {
        SiteGraph::from_json_str(json).unwrap()
    }

    #[test]
    fn empty_graph_is_header_and_footer() {
        let document = GraphConverter::new().convert(&graph("{}"));
        assert_eq!(document.render(), "digraph WebsiteConnections {\n}");
    }

    #[test]
    fn node_without_destinations() {
        let document = GraphConverter::new().convert(&graph(r#"{"a": []}"#));
        assert_eq!(
            document.render(),
            "digraph WebsiteConnections {\n  \"a\" -> {  };\n}"
        );
    }

    #[test]
    fn destination_order_preserved() {
        let document = GraphConverter::new().convert(&graph(r#"{"a": ["c", "b", "c"]}"#));
        let rendered = document.render();
        assert!(rendered.contains(r#""a" -> { "c", "b", "c" };"#));
    }

    #[test]
    fn key_order_preserved() {
        let document = GraphConverter::new().convert(&graph(r#"{"y": ["x"], "x": ["y"]}"#));
        let sources: Vec<_> = document.statements().iter().map(EdgeStatement::source).collect();
        assert_eq!(sources, vec!["y", "x"]);
    }

    #[test]
    fn custom_graph_name() {
        let converter = GraphConverter::new().with_graph_name("Crawl");
        let document = converter.convert(&SiteGraph::new());
        assert_eq!(document.header(), "digraph Crawl {");
        assert_eq!(converter.graph_name(), "Crawl");
    }

    #[test]
    fn dangling_destinations_are_emitted_as_is() {
        let document = GraphConverter::new().convert(&graph(r#"{"a": ["nowhere"]}"#));
        assert_eq!(document.statements().len(), 1);
        assert_eq!(document.statements()[0].destinations(), ["nowhere".to_string()]);
    }
}
