//! `mst` command
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::traverse::labels;
use graphkit_core::error::Result;
use graphkit_core::WeightedGraph;

#[derive(Serialize)]
struct TreeEdgeOutput<'a> {
    from: &'a str,
    to: &'a str,
    weight: f64,
}

#[derive(Serialize)]
struct MstOutput<'a> {
    root: &'a str,
    total_weight: f64,
    spanned: usize,
    search_order: Vec<&'a str>,
    edges: Vec<TreeEdgeOutput<'a>>,
}

/// Execute the mst command
pub fn execute(cli: &Cli, graph: &WeightedGraph<String>, start: usize) -> Result<()> {
    let mst = graph.minimum_spanning_tree_from(start)?;

    if mst.vertices_found() < graph.size() {
        tracing::warn!(
            spanned = mst.vertices_found(),
            vertices = graph.size(),
            "graph is disconnected; tree spans the root's component only"
        );
    }

    match cli.format {
        OutputFormat::Human => {
            print!("{}", graph.display_tree(&mst)?);
            println!("Total weight: {}", mst.total_weight());
        }
        OutputFormat::Json => {
            let vertices = graph.vertices();
            let mut edges = Vec::new();
            for (parent, child) in mst.edges() {
                edges.push(TreeEdgeOutput {
                    from: &vertices[parent],
                    to: &vertices[child],
                    weight: graph.weight(parent, child)?,
                });
            }
            let output = MstOutput {
                root: graph.vertex(mst.root())?,
                total_weight: mst.total_weight(),
                spanned: mst.vertices_found(),
                search_order: labels(graph, mst.search_order()),
                edges,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
