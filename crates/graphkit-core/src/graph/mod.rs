//! Graph model and algorithms
//!
//! - `Graph<V, W>`: adjacency lists over labels `V` with edge payload `W`
//! - `UnweightedGraph` / `WeightedGraph`: the two payload choices
//! - DFS and BFS search trees for any graph
//! - Prim's MST and Dijkstra's shortest paths for weighted graphs
//! - `GraphOps` capability trait and display adapters

pub mod adjacency;
pub mod algos;
pub mod display;
pub mod edge;
pub mod traversal;
pub mod tree;
pub mod unweighted;
pub mod weighted;

pub use adjacency::Graph;
pub use display::{AllPathsDisplay, EdgesDisplay, PathDisplay, TreeDisplay};
pub use edge::{Edge, EdgePayload, Weight, WeightedEdge};
pub use traversal::GraphOps;
pub use tree::{Mst, SearchTree, ShortestPathTree};
pub use unweighted::UnweightedGraph;
pub use weighted::WeightedGraph;
