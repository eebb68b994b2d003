//! `path` command
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::traverse::labels;
use graphkit_core::error::Result;
use graphkit_core::{ShortestPathTree, WeightedGraph};

#[derive(Serialize)]
struct PathOutput<'a> {
    target: &'a str,
    /// `None` when the target is unreachable
    cost: Option<f64>,
    path: Option<Vec<&'a str>>,
}

#[derive(Serialize)]
struct AllPathsOutput<'a> {
    source: &'a str,
    paths: Vec<PathOutput<'a>>,
}

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph: &WeightedGraph<String>,
    source: usize,
    target: Option<usize>,
) -> Result<()> {
    let spt = graph.shortest_path(source)?;

    match target {
        Some(target) => print_single(cli, graph, &spt, target),
        None => print_all(cli, graph, &spt),
    }
}

fn print_single(
    cli: &Cli,
    graph: &WeightedGraph<String>,
    spt: &ShortestPathTree,
    target: usize,
) -> Result<()> {
    let path = spt.path(target)?;
    let cost = spt.cost(target)?;

    match cli.format {
        OutputFormat::Human => {
            println!("{} (cost: {})", graph.display_path(spt, target)?, cost);
        }
        OutputFormat::Json => {
            let output = PathOutput {
                target: graph.vertex(target)?,
                cost: Some(cost),
                path: Some(labels(graph, &path)),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn print_all(cli: &Cli, graph: &WeightedGraph<String>, spt: &ShortestPathTree) -> Result<()> {
    match cli.format {
        OutputFormat::Human => print!("{}", graph.display_all_paths(spt)?),
        OutputFormat::Json => {
            let mut paths = Vec::with_capacity(graph.size());
            for target in 0..graph.size() {
                let path = spt.path(target).ok();
                paths.push(PathOutput {
                    target: graph.vertex(target)?,
                    cost: path.as_ref().map(|_| spt.costs()[target]),
                    path: path.map(|p| labels(graph, &p)),
                });
            }
            let output = AllPathsOutput {
                source: graph.vertex(spt.root())?,
                paths,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
