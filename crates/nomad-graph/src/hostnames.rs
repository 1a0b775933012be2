//! Hostname connection collector
//!
//! [`HostnameGraph`] keeps, per source host, the set of hosts it links to.
//! It does not de-duplicate across sources and never removes anything.

use crate::error::RenderError;
use crate::graph::SiteGraph;
use crate::provider::{CliGraphProvider, GraphProvider};
use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension appended by [`HostnameGraph::render_to_file`]
pub const JSON_EXTENSION: &str = "json";

/// Thread-safe hostname → hostnames collector
///
/// Hosts and their destinations keep first-seen order, so a snapshot taken
/// with [`HostnameGraph::to_graph`] is deterministic for a given call order.
#[derive(Debug, Default)]
pub struct HostnameGraph {
    inner: RwLock<IndexMap<String, IndexSet<String>>>,
}

impl HostnameGraph {
    /// Create empty collector
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of source hosts seen so far
    #[must_use]
    pub fn host_count(&self) -> usize {
        self.inner.read().len()
    }

    /// Snapshot the collected connections as a [`SiteGraph`]
    #[must_use]
    pub fn to_graph(&self) -> SiteGraph {
        let guard = self.inner.read();
        guard
            .iter()
            .map(|(host, links)| (host.clone(), links.iter().cloned().collect()))
            .collect()
    }

    /// Encode the collected connections as indented JSON
    ///
    /// # Errors
    /// Returns `RenderError::Encode` if serialization fails.
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(&self.to_graph())?)
    }
}

impl GraphProvider for HostnameGraph {
    fn add_hostname_connection(&self, from_host: &str, to_host: &str) {
        let mut guard = self.inner.write();
        guard
            .entry(from_host.to_string())
            .or_default()
            .insert(to_host.to_string());
    }
}

impl CliGraphProvider for HostnameGraph {
    fn render_to_file(&self, stem: &Path) -> Result<PathBuf, RenderError> {
        let path = with_extension_appended(stem, JSON_EXTENSION);
        let json = self.to_json()?;

        std::fs::write(&path, json).map_err(|e| RenderError::io_error(&path, e))?;

        tracing::info!(path = %path.display(), hosts = self.host_count(), "rendered hostname graph");
        Ok(path)
    }
}

// `Path::with_extension` would replace a dotted suffix such as `data.v2`.
fn with_extension_appended(stem: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
