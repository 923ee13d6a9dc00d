use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use flowcut::graph::{
    bisect, bisect_farthest, bisect_verified, global_min_cut, AdjacencyList, Bisection,
    CapacityGraph,
};

/// flowcut - split an undirected graph along its minimum edge cut
#[derive(Debug, Parser)]
#[command(name = "flowcut", version, about, long_about = None)]
struct Cli {
    /// Adjacency file with lines of the form `name: neighbor neighbor ...`.
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Source node name. Requires --sink.
    #[arg(long, requires = "sink")]
    source: Option<String>,

    /// Sink node name. Requires --source.
    #[arg(long, requires = "source")]
    sink: Option<String>,

    /// Retry other endpoints until a cut of this capacity is found.
    #[arg(long, conflicts_with_all = ["source", "exhaustive"])]
    expected_cut: Option<u32>,

    /// Compute the exact global minimum cut instead of using the farthest-pair heuristic.
    #[arg(long, conflicts_with = "source")]
    exhaustive: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("flowcut", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let start = Instant::now();
    let input = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let list: AdjacencyList = input
        .parse()
        .with_context(|| format!("failed to parse {}", cli.path.display()))?;
    let graph: CapacityGraph = list.to_capacity_graph()?;
    info!(
        "loaded {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let result = run(&cli, &list, &graph)?;

    let (a, b) = result.partition.sizes();
    println!(
        "{} -> {}",
        list.name(result.source).unwrap_or("?"),
        list.name(result.sink).unwrap_or("?")
    );
    println!("flow: {}", result.total_flow);
    println!("partition: {} x {} = {}", a, b, result.partition.product());

    info!("took {:.3?}", start.elapsed());
    Ok(())
}

fn run(cli: &Cli, list: &AdjacencyList, graph: &CapacityGraph) -> anyhow::Result<Bisection> {
    let result = match (&cli.source, &cli.sink) {
        (Some(source), Some(sink)) => bisect(graph, list.index_of(source)?, list.index_of(sink)?)?,
        _ if cli.exhaustive => global_min_cut(graph)?,
        _ => match cli.expected_cut {
            Some(expected) => bisect_verified(graph, expected)?,
            None => bisect_farthest(graph)?,
        },
    };
    Ok(result)
}
