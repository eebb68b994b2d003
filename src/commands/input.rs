//! Graph construction from command-line flags

use std::collections::HashSet;

use crate::cli::{Cli, EdgeSpec};
use graphkit_core::error::Result;
use graphkit_core::{bail_usage, UnweightedGraph, WeightedGraph};

/// The graph described on the command line.
///
/// Weighted when every `--edge` carries a weight, unweighted when none do.
#[derive(Debug)]
pub enum GraphInput {
    Unweighted(UnweightedGraph<String>),
    Weighted(WeightedGraph<String>),
}

impl GraphInput {
    pub fn build(labels: Vec<String>, edges: &[EdgeSpec], directed: bool) -> Result<Self> {
        let weighted = edges.iter().filter(|e| e.weight.is_some()).count();

        if weighted == 0 {
            let pairs: Vec<(usize, usize)> = edges.iter().map(|e| (e.u, e.v)).collect();
            return Ok(GraphInput::Unweighted(UnweightedGraph::from_edges(
                labels, &pairs, directed,
            )?));
        }

        if weighted != edges.len() {
            bail_usage!("either every --edge has a weight (U:V:WEIGHT) or none does");
        }

        let triples: Vec<(usize, usize, f64)> = edges
            .iter()
            .map(|e| (e.u, e.v, e.weight.unwrap_or_default()))
            .collect();
        Ok(GraphInput::Weighted(WeightedGraph::from_edges(
            labels, &triples, directed,
        )?))
    }

    pub fn size(&self) -> usize {
        match self {
            GraphInput::Unweighted(graph) => graph.size(),
            GraphInput::Weighted(graph) => graph.size(),
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, GraphInput::Weighted(_))
    }

    /// The weighted graph, or a usage error naming `command`
    pub fn weighted(&self, command: &str) -> Result<&WeightedGraph<String>> {
        match self {
            GraphInput::Weighted(graph) => Ok(graph),
            GraphInput::Unweighted(_) => {
                bail_usage!(format!(
                    "{command} needs weighted edges (--edge U:V:WEIGHT)"
                ))
            }
        }
    }
}

/// Upper bound on generated `0..N` labels from `--count` or edge indices
pub const MAX_VERTICES: usize = 1_000_000;

/// Vertex labels from `--vertex` or `--count`, falling back to `0..N`
/// where N covers the largest index used by an edge
pub fn vertex_labels(cli: &Cli) -> Result<Vec<String>> {
    if !cli.vertices.is_empty() {
        let mut seen = HashSet::new();
        if let Some(dup) = cli.vertices.iter().find(|label| !seen.insert(label.as_str())) {
            bail_usage!(format!("duplicate vertex label: {dup}"));
        }
        return Ok(cli.vertices.clone());
    }

    let count = match cli.count {
        Some(count) => count,
        None => match cli.edges.iter().map(|e| e.u.max(e.v)).max() {
            Some(max) => match max.checked_add(1) {
                Some(count) => count,
                None => bail_usage!(format!("vertex index {max} is too large")),
            },
            None => bail_usage!("no vertices given (use --vertex or --count)"),
        },
    };
    if count > MAX_VERTICES {
        bail_usage!(format!(
            "{count} vertices requested; at most {MAX_VERTICES} are supported"
        ));
    }

    Ok((0..count).map(|i| i.to_string()).collect())
}
