//! Testing utilities for the nomad graphs workspace
//!
//! Shared fixtures, strategies, and helpers for picking DOT output apart.

#![allow(missing_docs)]

use nomad_graph::SiteGraph;
use proptest::collection::vec;
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small crawl, as written by the hostname collector.
pub const SAMPLE_JSON: &str = r#"{
  "www.france.fr": [
    "www.elysee.fr",
    "twitter.com",
    "www.instagram.com"
  ],
  "www.elysee.fr": [
    "www.france.fr"
  ],
  "twitter.com": []
}"#;

/// `SAMPLE_JSON` converted with the default graph name.
pub const SAMPLE_DOT: &str = "digraph WebsiteConnections {\n  \"www.france.fr\" -> { \"www.elysee.fr\", \"twitter.com\", \"www.instagram.com\" };\n  \"www.elysee.fr\" -> { \"www.france.fr\" };\n  \"twitter.com\" -> {  };\n}";

pub fn graph_from(entries: &[(&str, &[&str])]) -> SiteGraph {
    entries
        .iter()
        .map(|(source, destinations)| {
            (
                (*source).to_string(),
                destinations.iter().map(|d| (*d).to_string()).collect(),
            )
        })
        .collect()
}

pub fn sample_graph() -> SiteGraph {
    SiteGraph::from_json_str(SAMPLE_JSON).unwrap()
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Hostname-like identifiers; never contain quotes, commas, or braces.
pub fn hostname() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,10}(\\.[a-z]{2,4}){0,2}"
}

/// Graphs with unique keys in generated order and 0..6 destinations each.
pub fn site_graph() -> impl Strategy<Value = SiteGraph> {
    vec((hostname(), vec(hostname(), 0..6)), 0..12).prop_map(|entries| {
        let mut graph = SiteGraph::new();
        for (source, destinations) in entries {
            if graph.destinations(&source).is_none() {
                graph.insert(source, destinations);
            }
        }
        graph
    })
}

/// Edge-statement lines of a rendered document (everything between
/// header and footer).
pub fn statement_lines(dot: &str) -> Vec<&str> {
    let lines: Vec<&str> = dot.lines().collect();
    if lines.len() < 2 {
        return Vec::new();
    }
    lines[1..lines.len() - 1].to_vec()
}

/// Source and destinations of one statement line, quotes stripped.
pub fn parse_statement(line: &str) -> (String, Vec<String>) {
    let (source, rest) = line.split_once(" -> ").unwrap();
    let body = rest
        .trim_end_matches(';')
        .trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .trim();
    let destinations = if body.is_empty() {
        Vec::new()
    } else {
        body.split(", ")
            .map(|d| d.trim_matches('"').to_string())
            .collect()
    };
    (source.trim().trim_matches('"').to_string(), destinations)
}
