//! Command dispatch logic for graphkit
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::input::GraphInput;
use crate::commands::traverse::SearchKind;
use crate::commands::{input, mst, path, traverse};
use graphkit_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let labels = input::vertex_labels(cli)?;
    let graph = GraphInput::build(labels, &cli.edges, cli.directed)?;

    tracing::debug!(
        elapsed = ?start.elapsed(),
        vertices = graph.size(),
        weighted = graph.is_weighted(),
        "build_graph"
    );

    let result = match &cli.command {
        Commands::Edges => traverse::execute_edges(cli, &graph),
        Commands::Dfs { start } => traverse::execute_search(cli, &graph, SearchKind::Depth, *start),
        Commands::Bfs { start } => {
            traverse::execute_search(cli, &graph, SearchKind::Breadth, *start)
        }
        Commands::Mst { start } => mst::execute(cli, graph.weighted("mst")?, *start),
        Commands::Path { source, target } => {
            path::execute(cli, graph.weighted("path")?, *source, *target)
        }
    };

    tracing::debug!(elapsed = ?start.elapsed(), "run_command");
    result
}
