//! Nomad Graph
//!
//! In-memory model of website connection graphs.
//!
//! # Core Types
//!
//! - [`SiteGraph`]: ordered mapping of a site to the sites it links to, as
//!   read from (and written to) the JSON interchange format
//! - [`HostnameGraph`]: thread-safe collector filled while crawling, which
//!   renders to that same JSON format
//!
//! # Interchange Format
//!
//! ```text
//! {
//!   "www.france.fr": ["www.elysee.fr", "twitter.com"],
//!   "twitter.com": []
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use nomad_graph::SiteGraph;
//!
//! let graph = SiteGraph::from_json_str(r#"{"a": ["b", "c"]}"#).unwrap();
//! assert_eq!(graph.len(), 1);
//! assert_eq!(graph.destinations("a"), Some(&["b".to_string(), "c".to_string()][..]));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod graph;
pub mod hostnames;
pub mod provider;

pub use error::{ParseError, RenderError};
pub use graph::SiteGraph;
pub use hostnames::HostnameGraph;
pub use provider::{CliGraphProvider, GraphProvider};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
