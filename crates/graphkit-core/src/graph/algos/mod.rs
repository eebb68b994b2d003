//! Graph algorithm implementations
//!
//! All algorithms run over an adjacency slice indexed by vertex:
//! - `dfs`: Depth-first search (iterative, recursive pre-order)
//! - `bfs`: Breadth-first search
//! - `prim`: Minimum spanning tree
//! - `dijkstra`: Single-source shortest paths
//! - `shared`: Frontier state used by Prim and Dijkstra

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;
pub mod shared;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use prim::prim;
