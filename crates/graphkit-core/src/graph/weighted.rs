use crate::ensure_index;
use crate::error::{GraphError, Result};
use crate::graph::adjacency::Graph;
use crate::graph::algos;
use crate::graph::edge::{Edge, Weight, WeightedEdge};
use crate::graph::tree::{Mst, ShortestPathTree};

/// Graph whose edges carry an `f64` weight
pub type WeightedGraph<V> = Graph<V, f64>;

impl<V: PartialEq> Graph<V, f64> {
    /// Build from labels and `(u, v, weight)` triples
    pub fn from_edges<I>(vertices: I, edges: &[(usize, usize, f64)], directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let edges = edges
            .iter()
            .map(|&(u, v, weight)| Edge::weighted(u, v, weight))
            .collect();
        Graph::from_parts(vertices, edges, directed)
    }

    /// Build from labels and a list of weighted edges
    pub fn from_edge_list<I>(vertices: I, edges: Vec<WeightedEdge>, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        Graph::from_parts(vertices, edges, directed)
    }
}

impl Graph<usize, f64> {
    /// Build a weighted graph whose vertices are labelled `0..count`
    pub fn with_vertex_count(
        count: usize,
        edges: &[(usize, usize, f64)],
        directed: bool,
    ) -> Result<Self> {
        Self::from_edges(0..count, edges, directed)
    }
}

impl<V> Graph<V, f64> {
    /// Add the edge `(u, v)` with `weight`.
    ///
    /// Returns `Ok(false)` if `u` and `v` are already connected, whatever
    /// the weight of the existing edge.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<bool> {
        self.insert_edge(Edge::weighted(u, v, weight))
    }
}

impl<V, W: Weight> Graph<V, W> {
    /// Weight of the edge `(u, v)`
    pub fn weight(&self, u: usize, v: usize) -> Result<f64> {
        ensure_index!(v, self.size());
        self.edges(u)?
            .iter()
            .find(|e| e.v == v)
            .map(Edge::weight)
            .ok_or_else(|| GraphError::edge_not_found(u, v))
    }

    /// Sum of the edge weights along consecutive vertices of `path`
    pub fn path_weight(&self, path: &[usize]) -> Result<f64> {
        path.windows(2)
            .map(|pair| self.weight(pair[0], pair[1]))
            .sum()
    }

    /// Minimum spanning tree rooted at vertex 0
    pub fn minimum_spanning_tree(&self) -> Result<Mst> {
        self.minimum_spanning_tree_from(0)
    }

    /// Minimum spanning tree rooted at `start`
    pub fn minimum_spanning_tree_from(&self, start: usize) -> Result<Mst> {
        algos::prim(self.adjacency(), start)
    }

    /// Shortest paths from `source`. Weights must be non-negative.
    pub fn shortest_path(&self, source: usize) -> Result<ShortestPathTree> {
        algos::dijkstra(self.adjacency(), source)
    }
}
