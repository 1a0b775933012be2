//! Nomad DOT
//!
//! Converts website connection graphs into Graphviz DOT documents.
//!
//! # Core Operations
//!
//! - **Ingress**: read a JSON object of site → linked sites into a `SiteGraph`
//! - **Convert**: format every entry as one edge statement (`GraphConverter`)
//! - **Egress**: write the resulting `DotDocument`
//!
//! # Architecture
//!
//! ```text
//! Reader → SiteGraph → GraphConverter → DotDocument → Writer
//!          └────────── ConversionLayer ──────────┘
//! ```
//!
//! `GraphConverter::convert` performs no I/O; the `ConversionLayer` wraps it
//! with readers and writers (or file paths).
//!
//! # Example
//!
//! ```rust
//! use nomad_dot::ConversionLayer;
//!
//! let mut out: Vec<u8> = Vec::new();
//! ConversionLayer::new()
//!     .convert_stream(&br#"{"a": ["b", "c"]}"#[..], &mut out)
//!     .unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "digraph WebsiteConnections {\n  \"a\" -> { \"b\", \"c\" };\n}"
//! );
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod converter;
pub mod document;
pub mod error;
pub mod layer;

pub use config::ConverterConfig;
pub use converter::GraphConverter;
pub use document::{DotDocument, EdgeStatement};
pub use error::{ConfigError, ConvertError};
pub use layer::{ConversionLayer, ConversionSummary};
pub use nomad_graph::SiteGraph;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for converting graphs
    pub use crate::config::ConverterConfig;
    pub use crate::converter::GraphConverter;
    pub use crate::document::{DotDocument, EdgeStatement};
    pub use crate::error::{ConfigError, ConvertError};
    pub use crate::layer::{ConversionLayer, ConversionSummary};
    pub use nomad_graph::{ParseError, SiteGraph};
}
