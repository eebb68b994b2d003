//! Immutable results of traversal and spanning/shortest-path runs

use crate::ensure_index;
use crate::error::{GraphError, Result};
use serde::Serialize;
use std::ops::Deref;

/// Parent links and visitation order from one traversal.
///
/// `parent[i]` is `None` for the root and for every vertex the run never
/// reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchTree {
    root: usize,
    parent: Vec<Option<usize>>,
    search_order: Vec<usize>,
}

impl SearchTree {
    pub(crate) fn new(root: usize, parent: Vec<Option<usize>>, search_order: Vec<usize>) -> Self {
        SearchTree {
            root,
            parent,
            search_order,
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    /// Parent of `index`, `None` for the root and unreached vertices
    pub fn parent(&self, index: usize) -> Result<Option<usize>> {
        ensure_index!(index, self.parent.len());
        Ok(self.parent[index])
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// Vertex indices in the order the run reached them
    pub fn search_order(&self) -> &[usize] {
        &self.search_order
    }

    pub fn vertices_found(&self) -> usize {
        self.search_order.len()
    }

    /// Number of vertices the graph had when the tree was built
    pub fn size(&self) -> usize {
        self.parent.len()
    }

    pub fn is_reached(&self, index: usize) -> bool {
        index == self.root || self.parent.get(index).is_some_and(Option::is_some)
    }

    /// Tree edges as `(parent, child)` pairs in child index order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child)))
    }

    /// Vertex indices on the tree path from the root to `index`.
    ///
    /// Fails with `Unreachable` when `index` was never reached. The walk is
    /// bounded by the vertex count, so a malformed parent chain cannot loop.
    pub fn path(&self, index: usize) -> Result<Vec<usize>> {
        ensure_index!(index, self.parent.len());

        let unreachable = GraphError::Unreachable {
            index,
            root: self.root,
        };
        if !self.is_reached(index) {
            return Err(unreachable);
        }

        let mut path = vec![index];
        let mut current = index;
        while current != self.root {
            match self.parent[current] {
                Some(p) if path.len() <= self.parent.len() => {
                    path.push(p);
                    current = p;
                }
                _ => return Err(unreachable),
            }
        }

        path.reverse();
        Ok(path)
    }
}

/// Minimum spanning tree produced by Prim's algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mst {
    #[serde(flatten)]
    tree: SearchTree,
    total_weight: f64,
}

impl Mst {
    pub(crate) fn new(tree: SearchTree, total_weight: f64) -> Self {
        Mst { tree, total_weight }
    }

    /// Sum of the weights of all tree edges
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }
}

impl Deref for Mst {
    type Target = SearchTree;

    fn deref(&self) -> &SearchTree {
        &self.tree
    }
}

/// Single-source shortest paths produced by Dijkstra's algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathTree {
    #[serde(flatten)]
    tree: SearchTree,
    cost: Vec<f64>,
}

impl ShortestPathTree {
    pub(crate) fn new(tree: SearchTree, cost: Vec<f64>) -> Self {
        ShortestPathTree { tree, cost }
    }

    /// Distance from the root to `index`; infinite when unreached
    pub fn cost(&self, index: usize) -> Result<f64> {
        ensure_index!(index, self.cost.len());
        Ok(self.cost[index])
    }

    pub fn costs(&self) -> &[f64] {
        &self.cost
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }
}

impl Deref for ShortestPathTree {
    type Target = SearchTree;

    fn deref(&self) -> &SearchTree {
        &self.tree
    }
}
