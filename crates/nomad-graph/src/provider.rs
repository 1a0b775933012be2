//! Graph provider traits
//!
//! A crawler reports every hostname → hostname link it discovers to a
//! [`GraphProvider`]. Providers used from the command line can also write
//! what they collected to disk.

use crate::error::RenderError;
use std::path::{Path, PathBuf};

/// Sink for discovered hostname connections
pub trait GraphProvider: Send + Sync {
    /// Record a link from `from_host` to `to_host`
    ///
    /// Must be safe to call from several crawler workers at once.
    fn add_hostname_connection(&self, from_host: &str, to_host: &str);
}

/// Provider that can render its graph to a file
pub trait CliGraphProvider: GraphProvider {
    /// Render to `stem` plus the provider's own extension
    ///
    /// `stem` is the desired file name without an extension. Returns the
    /// path actually written. Not expected to race with
    /// [`GraphProvider::add_hostname_connection`].
    ///
    /// # Errors
    /// Returns `RenderError` if encoding or writing fails.
    fn render_to_file(&self, stem: &Path) -> Result<PathBuf, RenderError>;
}
