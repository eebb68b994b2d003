//! graphkit core library
//!
//! Adjacency-list graphs over arbitrary vertex labels, with depth-first and
//! breadth-first search, Prim's minimum spanning tree and Dijkstra's
//! single-source shortest paths.

pub mod error;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{
    Edge, EdgePayload, Graph, GraphOps, Mst, SearchTree, ShortestPathTree, UnweightedGraph,
    Weight, WeightedEdge, WeightedGraph,
};
