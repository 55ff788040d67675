//! waygraph — convert map feature collections into navigable graph files.
//!
//! Two subcommands cover the two run modes:
//!
//! - `build`: feature collection → nodes → edges → full graph file.
//! - `relink`: existing graph file → recomputed edges → edges-only file.
//!
//! Each run picks exactly one edge strategy (`--strategy knn|threshold`);
//! `build` defaults to k-nearest, `relink` to the distance threshold, which
//! mirrors how the two output kinds are consumed downstream.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use waygraph_connect::{EdgeStrategy, build_edges};
use waygraph_extract::extract_from_path;
use waygraph_io::{GraphFile, read_graph, write_edges, write_graph};

#[cfg(test)]
mod tests;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "waygraph")]
#[command(about = "Convert map feature collections into navigable node/edge graphs")]
#[command(version)]
struct Cli {
    /// Enable debug logging (per-feature skip reasons).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract nodes from a feature collection and write a full graph file.
    Build {
        /// Feature collection to read (GeoJSON-style JSON).
        #[arg(short, long)]
        input: PathBuf,

        /// Graph file to write ({"nodes": [...], "edges": [...]}).
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        strategy: StrategyArgs,
    },

    /// Re-derive the edge set from an existing graph file's nodes and write
    /// an edges-only file.
    Relink {
        /// Graph file to read the node set from.
        #[arg(short, long)]
        input: PathBuf,

        /// Edges-only file to write ({"edges": [...]}).
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        strategy: StrategyArgs,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Connect each node to its k nearest neighbors (directed).
    Knn,
    /// Connect every pair within the distance threshold (undirected).
    Threshold,
}

#[derive(clap::Args)]
struct StrategyArgs {
    /// Edge-construction strategy.  Defaults per subcommand: `build` → knn,
    /// `relink` → threshold.
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Neighbor count for the knn strategy.
    #[arg(long, default_value_t = EdgeStrategy::DEFAULT_K)]
    k: usize,

    /// Distance cutoff in metres for the threshold strategy.
    #[arg(long = "threshold-m", default_value_t = EdgeStrategy::DEFAULT_THRESHOLD_M)]
    threshold_m: f64,
}

impl StrategyArgs {
    fn resolve(&self, default: StrategyKind) -> EdgeStrategy {
        match self.strategy.unwrap_or(default) {
            StrategyKind::Knn => EdgeStrategy::KNearest { k: self.k },
            StrategyKind::Threshold => EdgeStrategy::Threshold { max_m: self.threshold_m },
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match cli.command {
        Command::Build { input, output, strategy } => {
            run_build(&input, &output, strategy.resolve(StrategyKind::Knn))
        }
        Command::Relink { input, output, strategy } => {
            run_relink(&input, &output, strategy.resolve(StrategyKind::Threshold))
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_build(input: &Path, output: &Path, strategy: EdgeStrategy) -> Result<()> {
    // Configuration errors are fatal before any input is touched.
    strategy.validate().context("invalid configuration")?;

    let extraction = extract_from_path(input)
        .with_context(|| format!("reading feature collection {}", input.display()))?;

    let edges = build_edges(&extraction.nodes, strategy).context("building edges")?;
    let skipped = extraction.skip_count();
    let graph = GraphFile::new(extraction.nodes, edges);

    write_graph(output, &graph)
        .with_context(|| format!("writing graph file {}", output.display()))?;

    println!(
        "Generated {} nodes and {} edges ({strategy}) → {}",
        graph.nodes.len(),
        graph.edges.len(),
        output.display()
    );
    if skipped > 0 {
        println!("{skipped} features skipped (run with --verbose for reasons)");
    }
    Ok(())
}

fn run_relink(input: &Path, output: &Path, strategy: EdgeStrategy) -> Result<()> {
    strategy.validate().context("invalid configuration")?;

    let graph = read_graph(input)
        .with_context(|| format!("reading graph file {}", input.display()))?;
    graph
        .validate()
        .with_context(|| format!("validating graph file {}", input.display()))?;

    let edges = build_edges(&graph.nodes, strategy).context("building edges")?;

    write_edges(output, &edges)
        .with_context(|| format!("writing edge file {}", output.display()))?;

    println!(
        "Generated {} edges from {} nodes ({strategy}) → {}",
        edges.len(),
        graph.nodes.len(),
        output.display()
    );
    Ok(())
}
