//! Site graph data model
//!
//! A [`SiteGraph`] maps each source site to the ordered list of sites it
//! links to. Key order is the declaration order of the source document and
//! drives the order of anything rendered from the graph.

use crate::error::ParseError;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// Ordered mapping of site → outbound connections
///
/// Destinations that never appear as a key are allowed and left unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteGraph {
    edges: IndexMap<String, Vec<String>>,
}

impl SiteGraph {
    /// Create empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a graph from a JSON object of string arrays
    ///
    /// A repeated key keeps the position of its first occurrence and the
    /// value of its last.
    ///
    /// # Errors
    /// - `ParseError::Syntax` if the text is not JSON
    /// - `ParseError::Shape` if it is JSON of any other shape
    pub fn from_json_str(content: &str) -> Result<Self, ParseError> {
        let graph: Self = serde_json::from_str(content)?;
        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "parsed site graph"
        );
        Ok(graph)
    }

    /// Parse a graph from a reader, consuming it to the end
    ///
    /// # Errors
    /// Same as [`SiteGraph::from_json_str`], plus `ParseError::Io` when the
    /// reader fails.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let graph: Self = serde_json::from_reader(BufReader::new(reader))?;
        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "parsed site graph"
        );
        Ok(graph)
    }

    /// Set the destinations of `source`, returning the previous ones
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        destinations: Vec<String>,
    ) -> Option<Vec<String>> {
        self.edges.insert(source.into(), destinations)
    }

    /// Number of source nodes (keys)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no source nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of destinations across all sources
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Destinations of `source`, if it is a key
    #[must_use]
    pub fn destinations(&self, source: &str) -> Option<&[String]> {
        self.edges.get(source).map(Vec::as_slice)
    }

    /// Source nodes in iteration order
    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.edges.keys().map(String::as_str)
    }

    /// Entries in iteration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.edges
            .iter()
            .map(|(source, destinations)| (source.as_str(), destinations.as_slice()))
    }

    /// Destinations that are not themselves keys, each once, in first-seen order
    #[must_use]
    pub fn dangling_destinations(&self) -> Vec<&str> {
        let mut dangling: IndexSet<&str> = IndexSet::new();
        for destination in self.edges.values().flatten() {
            if !self.edges.contains_key(destination) {
                dangling.insert(destination);
            }
        }
        dangling.into_iter().collect()
    }
}

impl FromIterator<(String, Vec<String>)> for SiteGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SiteGraph {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
