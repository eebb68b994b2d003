use crate::ensure_index;
use crate::error::Result;
use crate::graph::algos::shared::FrontierState;
use crate::graph::edge::{Edge, Weight};
use crate::graph::tree::ShortestPathTree;
use crate::trace_time;
use std::time::Instant;

/// Dijkstra's single-source shortest paths from `source`.
///
/// Same frontier expansion as Prim, but a vertex's cost is its distance
/// from the source and relaxation compares `cost[u] + weight(u, v)` with
/// `cost[v]`. Edge weights must be non-negative; this is not checked.
#[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
pub fn dijkstra<W: Weight>(adjacency: &[Vec<Edge<W>>], source: usize) -> Result<ShortestPathTree> {
    let timer = Instant::now();
    ensure_index!(source, adjacency.len());

    let mut state = FrontierState::new(adjacency.len(), source);

    while let Some(u) = state.include_next() {
        let base = state.cost[u];
        for edge in &adjacency[u] {
            state.relax(edge.v, u, base + edge.weight());
        }
    }

    let (tree, cost) = state.into_parts();
    trace_time!(timer, "dijkstra", found = tree.vertices_found());
    Ok(ShortestPathTree::new(tree, cost))
}
