fn main() -> anyhow::Result<()> {
    nomad_cli::init_tracing();

    let matches = nomad_cli::command().get_matches();
    let config = nomad_cli::resolve_config(&matches)?;
    let summary = nomad_cli::run(&config)?;

    tracing::info!(
        nodes = summary.nodes,
        edges = summary.edges,
        dangling = summary.dangling,
        "wrote {}",
        config.output.display()
    );
    Ok(())
}
