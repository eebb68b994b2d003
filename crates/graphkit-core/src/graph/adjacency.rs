//! Adjacency-list storage shared by the unweighted and weighted graphs

use crate::error::Result;
use crate::{bail_invalid, ensure_index};
use crate::graph::algos;
use crate::graph::edge::{Edge, EdgePayload};
use crate::graph::tree::SearchTree;

/// Adjacency-list graph over vertex labels of type `V`.
///
/// `W` is the edge payload: `()` for [`UnweightedGraph`](super::UnweightedGraph),
/// `f64` for [`WeightedGraph`](super::WeightedGraph). Vertices are addressed
/// by their insertion index, which never changes.
#[derive(Debug, Clone)]
pub struct Graph<V, W = ()> {
    vertices: Vec<V>,
    neighbors: Vec<Vec<Edge<W>>>,
    directed: bool,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Graph::new(false)
    }
}

impl<V, W> Graph<V, W> {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Graph {
            vertices: Vec::new(),
            neighbors: Vec::new(),
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<&V> {
        ensure_index!(index, self.size());
        Ok(&self.vertices[index])
    }

    /// Outgoing edges of `index` in insertion order
    pub fn edges(&self, index: usize) -> Result<&[Edge<W>]> {
        ensure_index!(index, self.size());
        Ok(&self.neighbors[index])
    }

    /// Target indices of the outgoing edges of `index`
    pub fn neighbors(&self, index: usize) -> Result<Vec<usize>> {
        Ok(self.edges(index)?.iter().map(|e| e.v).collect())
    }

    pub fn degree(&self, index: usize) -> Result<usize> {
        Ok(self.edges(index)?.len())
    }

    /// Total number of stored edge records (mirrors included)
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Drop every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.neighbors.clear();
    }

    /// Removal is not supported; always returns `false`.
    pub fn remove_vertex(&mut self, _label: &V) -> bool {
        tracing::debug!("vertex removal is not supported");
        false
    }

    /// Removal is not supported; always returns `false`.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        tracing::debug!(u, v, "edge removal is not supported");
        false
    }

    /// Depth-first search tree rooted at `start`
    pub fn dfs(&self, start: usize) -> Result<SearchTree> {
        algos::dfs(&self.neighbors, start)
    }

    /// Breadth-first search tree rooted at `start`
    pub fn bfs(&self, start: usize) -> Result<SearchTree> {
        algos::bfs(&self.neighbors, start)
    }

    pub(crate) fn adjacency(&self) -> &[Vec<Edge<W>>] {
        &self.neighbors
    }
}

impl<V: PartialEq, W> Graph<V, W> {
    /// Index of the vertex labelled `label`, by linear scan
    pub fn index_of(&self, label: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == label)
    }

    /// Append a vertex; returns `false` and changes nothing if the label
    /// is already present.
    pub fn add_vertex(&mut self, label: V) -> bool {
        if self.vertices.contains(&label) {
            tracing::debug!(index = ?self.index_of(&label), "duplicate vertex rejected");
            return false;
        }
        self.vertices.push(label);
        self.neighbors.push(Vec::new());
        true
    }
}

impl<V, W: EdgePayload> Graph<V, W> {
    /// Insert an edge, plus its mirror when the graph is undirected.
    ///
    /// Returns `Ok(false)` when `(u, v)` is already present. Both endpoints
    /// and the weight are checked before anything is stored; a NaN or
    /// infinite weight is an `InvalidValue` error.
    pub fn insert_edge(&mut self, edge: Edge<W>) -> Result<bool> {
        ensure_index!(edge.u, self.size());
        ensure_index!(edge.v, self.size());
        ensure_finite_weight(&edge)?;

        if self.neighbors[edge.u].contains(&edge) {
            tracing::debug!(u = edge.u, v = edge.v, "duplicate edge rejected");
            return Ok(false);
        }

        self.neighbors[edge.u].push(edge);
        if !self.directed && !edge.is_self_loop() {
            self.neighbors[edge.v].push(edge.reversed());
        }
        Ok(true)
    }
}

impl<V: PartialEq, W: EdgePayload> Graph<V, W> {
    /// Build a graph from labels and edges.
    ///
    /// Every edge index is validated against the deduplicated vertex list
    /// before any edge is inserted. Duplicate edges are skipped.
    pub(crate) fn from_parts<I>(vertices: I, edges: Vec<Edge<W>>, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = Graph::new(directed);
        for label in vertices {
            graph.add_vertex(label);
        }

        let size = graph.size();
        for edge in &edges {
            ensure_index!(edge.u, size);
            ensure_index!(edge.v, size);
            ensure_finite_weight(edge)?;
        }

        let mut skipped = 0usize;
        for edge in edges {
            if !graph.insert_edge(edge)? {
                skipped += 1;
            }
        }

        tracing::debug!(
            vertices = size,
            edges = graph.edge_count(),
            skipped,
            directed,
            "graph built"
        );
        Ok(graph)
    }
}

fn ensure_finite_weight<W: EdgePayload>(edge: &Edge<W>) -> Result<()> {
    match edge.payload.weight() {
        Some(weight) if !weight.is_finite() => {
            bail_invalid!("edge weight", format!("{weight} on {edge}"))
        }
        _ => Ok(()),
    }
}
