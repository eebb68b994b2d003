use crate::ensure_index;
use crate::error::Result;
use crate::graph::edge::Edge;
use crate::graph::tree::SearchTree;
use crate::trace_time;
use std::time::Instant;

/// Depth-first search from `start`.
///
/// Uses an explicit stack of `(vertex, next edge)` frames so deep graphs
/// cannot exhaust the call stack, while visiting vertices in exactly the
/// pre-order a recursive search would: neighbors are tried in adjacency
/// order and a vertex's parent is the vertex it was first descended from.
#[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
pub fn dfs<W>(adjacency: &[Vec<Edge<W>>], start: usize) -> Result<SearchTree> {
    let timer = Instant::now();
    let size = adjacency.len();
    ensure_index!(start, size);

    let mut parent = vec![None; size];
    let mut visited = vec![false; size];
    let mut search_order = Vec::new();

    visited[start] = true;
    search_order.push(start);
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let u = frame.0;
        let Some(edge) = adjacency[u].get(frame.1) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        let w = edge.v;
        if !visited[w] {
            visited[w] = true;
            parent[w] = Some(u);
            search_order.push(w);
            stack.push((w, 0));
        }
    }

    trace_time!(timer, "dfs", found = search_order.len());
    Ok(SearchTree::new(start, parent, search_order))
}
