use crate::ensure_index;
use crate::error::Result;
use crate::graph::edge::Edge;
use crate::graph::tree::SearchTree;
use crate::trace_time;
use std::collections::VecDeque;
use std::time::Instant;

/// Breadth-first search from `start`.
///
/// Neighbors are marked and given a parent when enqueued, so each vertex
/// enters the queue once; the search order is the dequeue order.
#[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
pub fn bfs<W>(adjacency: &[Vec<Edge<W>>], start: usize) -> Result<SearchTree> {
    let timer = Instant::now();
    let size = adjacency.len();
    ensure_index!(start, size);

    let mut parent = vec![None; size];
    let mut visited = vec![false; size];
    let mut search_order = Vec::new();
    let mut queue = VecDeque::new();

    queue.push_back(start);
    visited[start] = true;

    while let Some(u) = queue.pop_front() {
        search_order.push(u);
        for edge in &adjacency[u] {
            let w = edge.v;
            if !visited[w] {
                queue.push_back(w);
                parent[w] = Some(u);
                visited[w] = true;
            }
        }
    }

    trace_time!(timer, "bfs", found = search_order.len());
    Ok(SearchTree::new(start, parent, search_order))
}
