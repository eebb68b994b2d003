//! Human-readable rendering of graphs and traversal results
//!
//! Every adapter borrows the graph's labels and a result; none of them
//! mutate anything.

use crate::ensure_index;
use crate::error::{GraphError, Result};
use crate::graph::adjacency::Graph;
use crate::graph::edge::{Edge, EdgePayload};
use crate::graph::tree::{SearchTree, ShortestPathTree};
use std::fmt;

/// One line per vertex listing its outgoing edges by label
pub struct EdgesDisplay<'a, V, W> {
    vertices: &'a [V],
    neighbors: &'a [Vec<Edge<W>>],
}

impl<V: fmt::Display, W: EdgePayload> fmt::Display for EdgesDisplay<'_, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, edges) in self.neighbors.iter().enumerate() {
            write!(f, "{} ({}):", self.vertices[u], u)?;
            for edge in edges {
                let (from, to) = (&self.vertices[edge.u], &self.vertices[edge.v]);
                match edge.payload.weight() {
                    Some(weight) => write!(f, " ({from}, {to}, {weight})")?,
                    None => write!(f, " ({from}, {to})")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Root and parent-child edges of a search tree
pub struct TreeDisplay<'a, V> {
    vertices: &'a [V],
    tree: &'a SearchTree,
}

impl<V: fmt::Display> fmt::Display for TreeDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Root is: {}", self.vertices[self.tree.root()])?;
        write!(f, "Edges:")?;
        for (parent, child) in self.tree.edges() {
            write!(f, " ({}, {})", self.vertices[parent], self.vertices[child])?;
        }
        writeln!(f)
    }
}

/// Labels along the tree path from the root to one vertex
pub struct PathDisplay<'a, V> {
    vertices: &'a [V],
    root: usize,
    target: usize,
    path: Option<Vec<usize>>,
    cost: Option<f64>,
}

impl<V: fmt::Display> fmt::Display for PathDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A path from {} to {}:",
            self.vertices[self.root], self.vertices[self.target]
        )?;
        match &self.path {
            Some(path) => {
                for &index in path {
                    write!(f, " {}", self.vertices[index])?;
                }
            }
            None => write!(f, " unreachable")?,
        }
        if let Some(cost) = self.cost {
            write!(f, " (cost: {cost})")?;
        }
        Ok(())
    }
}

/// Every shortest path from the root of a shortest-path tree, with costs
pub struct AllPathsDisplay<'a, V> {
    vertices: &'a [V],
    spt: &'a ShortestPathTree,
}

impl<V: fmt::Display> fmt::Display for AllPathsDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "All shortest paths from {} are:",
            self.vertices[self.spt.root()]
        )?;
        for (target, &cost) in self.spt.costs().iter().enumerate() {
            let line = PathDisplay {
                vertices: self.vertices,
                root: self.spt.root(),
                target,
                path: self.spt.path(target).ok(),
                cost: Some(cost),
            };
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<V, W> Graph<V, W> {
    pub fn display_edges(&self) -> EdgesDisplay<'_, V, W> {
        EdgesDisplay {
            vertices: self.vertices(),
            neighbors: self.adjacency(),
        }
    }

    pub fn display_tree<'a>(&'a self, tree: &'a SearchTree) -> Result<TreeDisplay<'a, V>> {
        self.check_tree(tree)?;
        Ok(TreeDisplay {
            vertices: self.vertices(),
            tree,
        })
    }

    /// Render the path to `index`; an unreached vertex renders as
    /// "unreachable" rather than failing
    pub fn display_path<'a>(
        &'a self,
        tree: &'a SearchTree,
        index: usize,
    ) -> Result<PathDisplay<'a, V>> {
        self.check_tree(tree)?;
        ensure_index!(index, tree.size());
        let path = match tree.path(index) {
            Ok(path) => Some(path),
            Err(GraphError::Unreachable { .. }) => None,
            Err(e) => return Err(e),
        };
        Ok(PathDisplay {
            vertices: self.vertices(),
            root: tree.root(),
            target: index,
            path,
            cost: None,
        })
    }

    pub fn display_all_paths<'a>(
        &'a self,
        spt: &'a ShortestPathTree,
    ) -> Result<AllPathsDisplay<'a, V>> {
        self.check_tree(spt)?;
        Ok(AllPathsDisplay {
            vertices: self.vertices(),
            spt,
        })
    }

    /// A tree can only be labelled by a graph at least as large as the one
    /// it was computed on
    fn check_tree(&self, tree: &SearchTree) -> Result<()> {
        if tree.size() > self.size() {
            return Err(GraphError::index_out_of_range(
                tree.size() - 1,
                self.size(),
            ));
        }
        Ok(())
    }
}
