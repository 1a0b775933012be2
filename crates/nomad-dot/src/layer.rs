//! Conversion Layer - I/O boundary around [`GraphConverter`]
//!
//! Provides:
//! - Reader → `SiteGraph` parsing (ingress)
//! - `DotDocument` → Writer output (egress)
//! - Whole-run helpers over streams or file paths
//!
//! The input is always read and parsed in full before the output is opened,
//! so a failed parse never truncates an existing output file.

use crate::config::ConverterConfig;
use crate::converter::GraphConverter;
use crate::document::DotDocument;
use crate::error::ConvertError;
use nomad_graph::SiteGraph;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Counts describing one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Source nodes, equal to the number of edge statements written
    pub nodes: usize,
    /// Destinations across all statements
    pub edges: usize,
    /// Distinct destinations that are not source nodes
    pub dangling: usize,
}

impl ConversionSummary {
    fn of(graph: &SiteGraph) -> Self {
        Self {
            nodes: graph.len(),
            edges: graph.edge_count(),
            dangling: graph.dangling_destinations().len(),
        }
    }
}

/// Reads graphs, converts them, and writes documents
#[derive(Debug, Clone, Default)]
pub struct ConversionLayer {
    converter: GraphConverter,
}

impl ConversionLayer {
    /// Create layer with the default converter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create layer with a specific converter
    #[inline]
    #[must_use]
    pub fn with_converter(converter: GraphConverter) -> Self {
        Self { converter }
    }

    /// Create layer for a configuration (graph name only; paths are passed per call)
    #[must_use]
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::with_converter(GraphConverter::new().with_graph_name(config.graph_name.clone()))
    }

    /// The wrapped converter
    #[inline]
    #[must_use]
    pub fn converter(&self) -> &GraphConverter {
        &self.converter
    }

    /// Parse a graph from `reader`, consuming it to the end
    ///
    /// # Errors
    /// Returns `ConvertError::ParseStream` if the reader fails or its
    /// content is not a graph document.
    pub fn read_graph<R: Read>(reader: R) -> Result<SiteGraph, ConvertError> {
        Ok(SiteGraph::from_json_reader(reader)?)
    }

    /// Write `document` to `writer` and flush
    ///
    /// # Errors
    /// Returns `ConvertError::WriteStream` on any write failure.
    pub fn write_document<W: Write>(
        mut writer: W,
        document: &DotDocument,
    ) -> Result<(), ConvertError> {
        write!(writer, "{document}").map_err(ConvertError::WriteStream)?;
        writer.flush().map_err(ConvertError::WriteStream)
    }

    /// Read, convert, and write in one pass
    ///
    /// # Errors
    /// See [`ConversionLayer::read_graph`] and [`ConversionLayer::write_document`].
    pub fn convert_stream<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<ConversionSummary, ConvertError> {
        let graph = Self::read_graph(reader)?;
        let document = self.converter.convert(&graph);
        Self::write_document(writer, &document)?;
        Ok(self.summarize(&graph))
    }

    /// Convert the JSON graph at `input` into a DOT file at `output`
    ///
    /// `output` is created or truncated, and only after `input` parsed.
    ///
    /// # Errors
    /// - `ConvertError::Read` if `input` cannot be opened
    /// - `ConvertError::Parse` if `input` is not a graph document
    /// - `ConvertError::Write` if `output` cannot be created or written
    pub fn convert_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionSummary, ConvertError> {
        let (input, output) = (input.as_ref(), output.as_ref());

        let file = File::open(input).map_err(|e| ConvertError::read(input, e))?;
        let graph = SiteGraph::from_json_reader(file).map_err(|e| ConvertError::parse(input, e))?;
        tracing::debug!(path = %input.display(), nodes = graph.len(), "read input graph");

        let document = self.converter.convert(&graph);

        let file = File::create(output).map_err(|e| ConvertError::write(output, e))?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{document}").map_err(|e| ConvertError::write(output, e))?;
        writer.flush().map_err(|e| ConvertError::write(output, e))?;

        let summary = self.summarize(&graph);
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            nodes = summary.nodes,
            edges = summary.edges,
            "converted graph"
        );
        Ok(summary)
    }

    /// Run the conversion described by `config`
    ///
    /// # Errors
    /// Same as [`ConversionLayer::convert_file`].
    pub fn run(&self, config: &ConverterConfig) -> Result<ConversionSummary, ConvertError> {
        self.convert_file(&config.input, &config.output)
    }

    fn summarize(&self, graph: &SiteGraph) -> ConversionSummary {
        let summary = ConversionSummary::of(graph);
        if summary.dangling > 0 {
            tracing::debug!(
                graph = self.converter.graph_name(),
                dangling = summary.dangling,
                "destinations without outgoing statements"
            );
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn convert_stream_writes_document() {
        let mut out: Vec<u8> = Vec::new();
        let summary = ConversionLayer::new()
            .convert_stream(&br#"{"a": ["b"], "b": []}"#[..], &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "digraph WebsiteConnections {\n  \"a\" -> { \"b\" };\n  \"b\" -> {  };\n}"
        );
        assert_eq!(
            summary,
            ConversionSummary {
                nodes: 2,
                edges: 1,
                dangling: 0
            }
        );
    }

    #[test]
    fn malformed_input_writes_nothing() {
        let mut out: Vec<u8> = Vec::new();
        let err = ConversionLayer::new()
            .convert_stream(&b"{not json"[..], &mut out)
            .unwrap_err();

        assert!(matches!(err, ConvertError::ParseStream(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn write_failure_surfaces() {
        let err = ConversionLayer::new()
            .convert_stream(&b"{}"[..], FailingWriter)
            .unwrap_err();
        assert!(matches!(err, ConvertError::WriteStream(_)));
    }

    #[test]
    fn from_config_uses_graph_name() {
        let config = ConverterConfig::new().with_graph_name("Crawl");
        let layer = ConversionLayer::from_config(&config);
        assert_eq!(layer.converter().graph_name(), "Crawl");
    }

    #[test]
    fn summary_counts_dangling() {
        let mut out: Vec<u8> = Vec::new();
        let summary = ConversionLayer::new()
            .convert_stream(&br#"{"a": ["x", "y", "x"]}"#[..], &mut out)
            .unwrap();
        assert_eq!(summary.edges, 3);
        assert_eq!(summary.dangling, 2);
    }

    #[test]
    fn read_and_write_without_a_layer() {
        let graph = ConversionLayer::read_graph(&br#"{"a": ["b"]}"#[..]).unwrap();
        let document = GraphConverter::new().with_graph_name("G").convert(&graph);

        let mut out: Vec<u8> = Vec::new();
        ConversionLayer::write_document(&mut out, &document).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "digraph G {\n  \"a\" -> { \"b\" };\n}");
    }

    #[test]
    fn write_document_reports_stream_failure() {
        let document = GraphConverter::new().convert(&SiteGraph::new());
        let err = ConversionLayer::write_document(FailingWriter, &document).unwrap_err();
        assert!(matches!(err, ConvertError::WriteStream(_)));
    }
}
