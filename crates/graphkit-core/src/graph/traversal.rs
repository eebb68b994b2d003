use crate::error::Result;
use crate::graph::adjacency::Graph;
use crate::graph::edge::{Edge, EdgePayload};
use crate::graph::tree::SearchTree;

/// Capabilities every graph variant exposes.
///
/// Lets callers work with unweighted and weighted graphs through one
/// interface; weight-specific operations stay on the concrete type.
pub trait GraphOps<V> {
    type Payload: EdgePayload;

    fn size(&self) -> usize;
    fn vertices(&self) -> &[V];
    fn vertex(&self, index: usize) -> Result<&V>;
    fn index_of(&self, label: &V) -> Option<usize>;
    fn neighbors(&self, index: usize) -> Result<Vec<usize>>;
    fn degree(&self, index: usize) -> Result<usize>;
    fn is_directed(&self) -> bool;

    fn add_vertex(&mut self, label: V) -> bool;
    fn insert_edge(&mut self, edge: Edge<Self::Payload>) -> Result<bool>;
    fn clear(&mut self);
    fn remove_vertex(&mut self, label: &V) -> bool;
    fn remove_edge(&mut self, u: usize, v: usize) -> bool;

    fn dfs(&self, start: usize) -> Result<SearchTree>;
    fn bfs(&self, start: usize) -> Result<SearchTree>;
}

impl<V: PartialEq, W: EdgePayload> GraphOps<V> for Graph<V, W> {
    type Payload = W;

    fn size(&self) -> usize {
        Graph::size(self)
    }

    fn vertices(&self) -> &[V] {
        Graph::vertices(self)
    }

    fn vertex(&self, index: usize) -> Result<&V> {
        Graph::vertex(self, index)
    }

    fn index_of(&self, label: &V) -> Option<usize> {
        Graph::index_of(self, label)
    }

    fn neighbors(&self, index: usize) -> Result<Vec<usize>> {
        Graph::neighbors(self, index)
    }

    fn degree(&self, index: usize) -> Result<usize> {
        Graph::degree(self, index)
    }

    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }

    fn add_vertex(&mut self, label: V) -> bool {
        Graph::add_vertex(self, label)
    }

    fn insert_edge(&mut self, edge: Edge<W>) -> Result<bool> {
        Graph::insert_edge(self, edge)
    }

    fn clear(&mut self) {
        Graph::clear(self)
    }

    fn remove_vertex(&mut self, label: &V) -> bool {
        Graph::remove_vertex(self, label)
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        Graph::remove_edge(self, u, v)
    }

    fn dfs(&self, start: usize) -> Result<SearchTree> {
        Graph::dfs(self, start)
    }

    fn bfs(&self, start: usize) -> Result<SearchTree> {
        Graph::bfs(self, start)
    }
}
