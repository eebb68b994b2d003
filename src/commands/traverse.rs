//! `edges`, `dfs` and `bfs` commands
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::GraphInput;
use graphkit_core::error::Result;
use graphkit_core::{EdgePayload, Graph, SearchTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Depth,
    Breadth,
}

impl SearchKind {
    fn name(self) -> &'static str {
        match self {
            SearchKind::Depth => "dfs",
            SearchKind::Breadth => "bfs",
        }
    }
}

#[derive(Serialize)]
struct EdgeOutput<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
}

#[derive(Serialize)]
struct EdgesOutput<'a> {
    directed: bool,
    vertices: &'a [String],
    edges: Vec<EdgeOutput<'a>>,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    kind: &'static str,
    root: &'a str,
    search_order: Vec<&'a str>,
    tree: &'a SearchTree,
}

/// Labels for a list of vertex indices
pub fn labels<'a, W>(graph: &'a Graph<String, W>, indices: &[usize]) -> Vec<&'a str> {
    indices
        .iter()
        .filter_map(|&i| graph.vertices().get(i).map(String::as_str))
        .collect()
}

/// Execute the edges command
pub fn execute_edges(cli: &Cli, input: &GraphInput) -> Result<()> {
    match input {
        GraphInput::Unweighted(graph) => print_edges(cli, graph),
        GraphInput::Weighted(graph) => print_edges(cli, graph),
    }
}

fn print_edges<W: EdgePayload>(cli: &Cli, graph: &Graph<String, W>) -> Result<()> {
    match cli.format {
        OutputFormat::Human => print!("{}", graph.display_edges()),
        OutputFormat::Json => {
            let vertices = graph.vertices();
            let mut edges = Vec::new();
            for u in 0..graph.size() {
                for edge in graph.edges(u)? {
                    edges.push(EdgeOutput {
                        from: &vertices[edge.u],
                        to: &vertices[edge.v],
                        weight: edge.payload.weight(),
                    });
                }
            }
            let output = EdgesOutput {
                directed: graph.is_directed(),
                vertices,
                edges,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Execute the dfs/bfs commands
pub fn execute_search(cli: &Cli, input: &GraphInput, kind: SearchKind, start: usize) -> Result<()> {
    match input {
        GraphInput::Unweighted(graph) => print_search(cli, graph, kind, start),
        GraphInput::Weighted(graph) => print_search(cli, graph, kind, start),
    }
}

fn print_search<W: EdgePayload>(
    cli: &Cli,
    graph: &Graph<String, W>,
    kind: SearchKind,
    start: usize,
) -> Result<()> {
    let tree = match kind {
        SearchKind::Depth => graph.dfs(start)?,
        SearchKind::Breadth => graph.bfs(start)?,
    };
    let order = labels(graph, tree.search_order());

    match cli.format {
        OutputFormat::Human => {
            print!("{}", graph.display_tree(&tree)?);
            println!("Search order: {}", order.join(" "));
            println!(
                "Found {} of {} vertices",
                tree.vertices_found(),
                graph.size()
            );
        }
        OutputFormat::Json => {
            let output = SearchOutput {
                kind: kind.name(),
                root: graph.vertex(tree.root())?,
                search_order: order,
                tree: &tree,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
