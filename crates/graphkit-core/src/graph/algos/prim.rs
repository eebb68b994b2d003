use crate::ensure_index;
use crate::error::Result;
use crate::graph::algos::shared::FrontierState;
use crate::graph::edge::{Edge, Weight};
use crate::graph::tree::Mst;
use crate::trace_time;
use std::time::Instant;

/// Prim's minimum spanning tree rooted at `start`.
///
/// Grows the tree one vertex at a time, always taking the cheapest vertex
/// that can be attached (linear scan, O(V^2)). A vertex's cost is the
/// weight of the cheapest edge joining it to the tree. On a disconnected
/// graph the result only spans the component containing `start`.
#[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
pub fn prim<W: Weight>(adjacency: &[Vec<Edge<W>>], start: usize) -> Result<Mst> {
    let timer = Instant::now();
    ensure_index!(start, adjacency.len());

    let mut state = FrontierState::new(adjacency.len(), start);
    let mut total_weight = 0.0;

    while let Some(u) = state.include_next() {
        total_weight += state.cost[u];

        for edge in &adjacency[u] {
            state.relax(edge.v, u, edge.weight());
        }
    }

    let (tree, _) = state.into_parts();
    trace_time!(timer, "prim", found = tree.vertices_found());
    tracing::debug!(total_weight, spanned = tree.vertices_found(), "mst complete");
    Ok(Mst::new(tree, total_weight))
}
