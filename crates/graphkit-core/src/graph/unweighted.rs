use crate::error::Result;
use crate::graph::adjacency::Graph;
use crate::graph::edge::Edge;

/// Graph whose edges carry no weight
pub type UnweightedGraph<V> = Graph<V, ()>;

impl<V: PartialEq> Graph<V, ()> {
    /// Build from labels and `(u, v)` index pairs.
    ///
    /// In an undirected graph each pair also stores its mirror, so listing
    /// both directions is harmless: the second is skipped as a duplicate.
    pub fn from_edges<I>(vertices: I, edges: &[(usize, usize)], directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let edges = edges.iter().map(|&(u, v)| Edge::new(u, v)).collect();
        Graph::from_parts(vertices, edges, directed)
    }

    /// Build from labels and a list of edges
    pub fn from_edge_list<I>(vertices: I, edges: Vec<Edge>, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        Graph::from_parts(vertices, edges, directed)
    }
}

impl Graph<usize, ()> {
    /// Build a graph whose vertices are labelled `0..count`
    pub fn with_vertex_count(
        count: usize,
        edges: &[(usize, usize)],
        directed: bool,
    ) -> Result<Self> {
        Self::from_edges(0..count, edges, directed)
    }
}

impl<V> Graph<V, ()> {
    /// Add the edge `(u, v)`; `Ok(false)` if it already exists
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.insert_edge(Edge::new(u, v))
    }
}
