//! CLI argument parsing for graphkit
//!
//! The graph itself is described by global flags (`--vertex`/`--count`,
//! `--edge`, `--directed`); the subcommand selects the algorithm.

pub mod output;
pub mod parse;

use clap::{ArgAction, Parser, Subcommand};

pub use output::OutputFormat;
pub use parse::EdgeSpec;
use parse::parse_edge;

/// graphkit - graph traversal, spanning trees and shortest paths
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vertex label, repeated once per vertex in index order
    #[arg(long = "vertex", global = true, action = ArgAction::Append)]
    pub vertices: Vec<String>,

    /// Number of vertices, labelled 0..N (instead of --vertex)
    #[arg(long, global = true, conflicts_with = "vertices")]
    pub count: Option<usize>,

    /// Edge between vertex indices as U:V, or U:V:WEIGHT for weighted graphs
    #[arg(long = "edge", global = true, value_parser = parse_edge, action = ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Treat edges as one-way
    #[arg(long, global = true)]
    pub directed: bool,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "human",
        env = "GRAPHKIT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Suppress error messages in human output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "graphkit_core=trace")
    #[arg(long, global = true, env = "GRAPHKIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every vertex with its outgoing edges
    Edges,

    /// Depth-first search tree
    Dfs {
        /// Start vertex index
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Breadth-first search tree
    Bfs {
        /// Start vertex index
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Minimum spanning tree (Prim's algorithm, weighted edges only)
    Mst {
        /// Root vertex index
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Shortest paths from a source (Dijkstra's algorithm, weighted edges only)
    Path {
        /// Source vertex index
        #[arg(long, default_value_t = 0)]
        source: usize,

        /// Print only the path to this vertex
        #[arg(long)]
        target: Option<usize>,
    },
}
