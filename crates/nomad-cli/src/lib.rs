//! json2dot command line
//!
//! Run without arguments, `json2dot` reads `out.json` from the working
//! directory and writes `out.dot` next to it. Flags and a TOML config file can
//! override either path and the graph name; flags win over the config file,
//! which wins over the defaults.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use nomad_dot::{ConversionLayer, ConversionSummary, ConverterConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the argument parser
#[must_use]
pub fn command() -> Command {
    Command::new("json2dot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a JSON map of website connections into a Graphviz DOT file")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_parser(value_parser!(PathBuf))
                .help("JSON graph to read [default: out.json]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf))
                .help("DOT file to write, overwritten if present [default: out.dot]"),
        )
        .arg(
            Arg::new("graph-name")
                .short('n')
                .long("graph-name")
                .help("Name in the digraph header [default: WebsiteConnections]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with input, output and graph_name keys"),
        )
}

/// Merge defaults, the optional config file, and flags into one config
///
/// # Errors
/// Fails if the config file cannot be loaded or the resulting graph name is
/// not a bare DOT identifier.
pub fn resolve_config(matches: &ArgMatches) -> anyhow::Result<ConverterConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ConverterConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ConverterConfig::default(),
    };

    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input.clone_from(input);
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output.clone_from(output);
    }
    if let Some(name) = matches.get_one::<String>("graph-name") {
        config.graph_name.clone_from(name);
    }

    config.validate()?;
    Ok(config)
}

/// Convert according to `config`
///
/// # Errors
/// Fails on any read, parse, or write error, with the paths involved.
pub fn run(config: &ConverterConfig) -> anyhow::Result<ConversionSummary> {
    tracing::debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        graph = %config.graph_name,
        "starting conversion"
    );

    let summary = ConversionLayer::from_config(config)
        .run(config)
        .with_context(|| {
            format!(
                "failed to convert {} to {}",
                config.input.display(),
                config.output.display()
            )
        })?;
    Ok(summary)
}

/// Install the stderr subscriber, honouring `RUST_LOG`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
