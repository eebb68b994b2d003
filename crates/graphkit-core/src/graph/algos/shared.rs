use crate::graph::tree::SearchTree;

/// Cost and membership bookkeeping for the O(V^2) frontier expansion
/// shared by Prim's and Dijkstra's algorithms.
///
/// `cost[v]` is the best known cost of adding `v`; it means attach cost for
/// Prim and distance from the root for Dijkstra.
#[derive(Debug)]
pub struct FrontierState {
    pub root: usize,
    pub cost: Vec<f64>,
    pub parent: Vec<Option<usize>>,
    pub included: Vec<bool>,
    pub order: Vec<usize>,
}

impl FrontierState {
    pub fn new(size: usize, root: usize) -> Self {
        let mut cost = vec![f64::INFINITY; size];
        cost[root] = 0.0;
        Self {
            root,
            cost,
            parent: vec![None; size],
            included: vec![false; size],
            order: Vec::with_capacity(size),
        }
    }

    /// Pick the unincluded vertex with the smallest finite cost and include
    /// it. Vertices are scanned in increasing index order and only a
    /// strictly smaller cost replaces the current pick, so ties go to the
    /// lowest index. Returns `None` once nothing reachable is left.
    pub fn include_next(&mut self) -> Option<usize> {
        let mut next = None;
        let mut current_min = f64::INFINITY;
        for (i, &cost) in self.cost.iter().enumerate() {
            if !self.included[i] && cost < current_min {
                current_min = cost;
                next = Some(i);
            }
        }

        let u = next?;
        self.included[u] = true;
        self.order.push(u);
        Some(u)
    }

    /// Lower the cost of `v` to `cost` through `via` when it improves on
    /// the current value and `v` is still outside the frontier. A NaN cost
    /// never counts as an improvement.
    pub fn relax(&mut self, v: usize, via: usize, cost: f64) -> bool {
        if self.included[v] || cost.is_nan() || cost >= self.cost[v] {
            return false;
        }
        self.cost[v] = cost;
        self.parent[v] = Some(via);
        true
    }

    /// Finish the run, returning the tree and the final cost array
    pub fn into_parts(self) -> (SearchTree, Vec<f64>) {
        (
            SearchTree::new(self.root, self.parent, self.order),
            self.cost,
        )
    }
}
