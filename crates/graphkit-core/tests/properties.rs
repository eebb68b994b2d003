//! Structural and algorithmic properties checked against brute force

use graphkit_core::{
    Edge, GraphError, SearchTree, ShortestPathTree, UnweightedGraph, WeightedGraph,
};

const REFERENCE_EDGES: [(usize, usize, f64); 6] = [
    (0, 1, 5.0),
    (0, 3, 4.0),
    (0, 4, 3.0),
    (1, 2, 3.0),
    (2, 3, 2.0),
    (3, 4, 6.0),
];

fn reference_graph() -> WeightedGraph<usize> {
    WeightedGraph::<usize>::with_vertex_count(5, &REFERENCE_EDGES, false).unwrap()
}

/// Minimum weight over every subset of `n - 1` edges that connects all
/// vertices
fn brute_force_mst_weight(n: usize, edges: &[(usize, usize, f64)]) -> f64 {
    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }
        let chosen: Vec<_> = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, e)| *e)
            .collect();

        // union-find connectivity check
        let mut root: Vec<usize> = (0..n).collect();
        fn find(root: &mut [usize], x: usize) -> usize {
            let mut x = x;
            while root[x] != x {
                x = root[x];
            }
            x
        }
        let mut merged = 0;
        for &(u, v, _) in &chosen {
            let (a, b) = (find(&mut root, u), find(&mut root, v));
            if a != b {
                root[a] = b;
                merged += 1;
            }
        }
        if merged == n - 1 {
            best = best.min(chosen.iter().map(|e| e.2).sum());
        }
    }
    best
}

/// Cheapest simple path cost from `source` to every vertex, by exhaustive
/// search
fn brute_force_distances(graph: &WeightedGraph<usize>, source: usize) -> Vec<f64> {
    fn walk(
        graph: &WeightedGraph<usize>,
        at: usize,
        cost: f64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<f64>,
    ) {
        best[at] = best[at].min(cost);
        for edge in graph.edges(at).unwrap() {
            if !on_path[edge.v] {
                on_path[edge.v] = true;
                walk(graph, edge.v, cost + edge.weight(), on_path, best);
                on_path[edge.v] = false;
            }
        }
    }

    let mut best = vec![f64::INFINITY; graph.size()];
    let mut on_path = vec![false; graph.size()];
    on_path[source] = true;
    walk(graph, source, 0.0, &mut on_path, &mut best);
    best
}

fn assert_acyclic(tree: &SearchTree) {
    for v in 0..tree.size() {
        if tree.is_reached(v) {
            let path = tree.path(v).unwrap();
            assert_eq!(path[0], tree.root());
            assert_eq!(*path.last().unwrap(), v);
        }
    }
}

#[test]
fn test_undirected_edges_appear_once_on_each_side() {
    let graph = reference_graph();
    for &(u, v, _) in &REFERENCE_EDGES {
        let from_u = graph.neighbors(u).unwrap();
        let from_v = graph.neighbors(v).unwrap();
        assert_eq!(from_u.iter().filter(|&&n| n == v).count(), 1);
        assert_eq!(from_v.iter().filter(|&&n| n == u).count(), 1);
    }
    for i in 0..graph.size() {
        assert_eq!(graph.degree(i).unwrap(), graph.neighbors(i).unwrap().len());
    }
}

#[test]
fn test_search_trees_are_acyclic() {
    let graph = reference_graph();
    for start in 0..graph.size() {
        let dfs = graph.dfs(start).unwrap();
        let bfs = graph.bfs(start).unwrap();
        assert_acyclic(&dfs);
        assert_acyclic(&bfs);
        assert_eq!(dfs.vertices_found(), graph.size());
        assert_eq!(bfs.vertices_found(), graph.size());
    }
}

#[test]
fn test_vertices_found_below_size_when_disconnected() {
    let graph =
        UnweightedGraph::from_edges(["a", "b", "c", "d", "e"], &[(0, 1), (1, 2), (3, 4)], false)
            .unwrap();
    let tree = graph.dfs(0).unwrap();
    assert_eq!(tree.vertices_found(), 3);
    assert!(tree.vertices_found() < graph.size());
    assert_acyclic(&tree);

    let tree = graph.bfs(3).unwrap();
    assert_eq!(tree.vertices_found(), 2);
}

#[test]
fn test_prim_matches_brute_force() {
    let graph = reference_graph();
    let mst = graph.minimum_spanning_tree().unwrap();
    let expected = brute_force_mst_weight(5, &REFERENCE_EDGES);

    assert_eq!(expected, 12.0);
    assert_eq!(mst.total_weight(), expected);
    assert_eq!(mst.root(), 0);
}

#[test]
fn test_mst_total_is_sum_of_parent_edges() {
    let graph = reference_graph();
    let mst = graph.minimum_spanning_tree_from(2).unwrap();
    let sum: f64 = mst
        .edges()
        .map(|(parent, child)| graph.weight(parent, child).unwrap())
        .sum();
    assert_eq!(sum, mst.total_weight());
}

#[test]
fn test_dijkstra_matches_brute_force() {
    let graph = reference_graph();
    let spt = graph.shortest_path(0).unwrap();
    let expected = brute_force_distances(&graph, 0);

    assert_eq!(spt.costs(), expected.as_slice());
    assert_eq!(spt.cost(0).unwrap(), 0.0);
}

#[test]
fn test_dijkstra_is_repeatable() {
    let graph = reference_graph();
    let runs: Vec<ShortestPathTree> = (0..3).map(|_| graph.shortest_path(0).unwrap()).collect();
    assert!(runs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_path_weight_equals_cost() {
    let graph = reference_graph();
    for source in 0..graph.size() {
        let spt = graph.shortest_path(source).unwrap();
        for v in 0..graph.size() {
            let path = spt.path(v).unwrap();
            assert_eq!(graph.path_weight(&path).unwrap(), spt.cost(v).unwrap());
            if let Some(parent) = spt.parent(v).unwrap() {
                assert_eq!(
                    spt.cost(v).unwrap(),
                    spt.cost(parent).unwrap() + graph.weight(parent, v).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_add_edge_at_size_fails_without_change() {
    let mut graph = reference_graph();
    let before: Vec<Vec<usize>> = (0..5).map(|i| graph.neighbors(i).unwrap()).collect();

    let err = graph.add_edge(0, graph.size(), 1.0).unwrap_err();
    assert!(matches!(
        err,
        GraphError::IndexOutOfRange { index: 5, size: 5 }
    ));
    let err = graph.add_edge(graph.size(), 0, 1.0).unwrap_err();
    assert!(matches!(err, GraphError::IndexOutOfRange { .. }));

    let after: Vec<Vec<usize>> = (0..5).map(|i| graph.neighbors(i).unwrap()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_duplicate_vertex_label() {
    let mut graph = UnweightedGraph::from_edges(["a", "b"], &[(0, 1)], false).unwrap();
    assert!(graph.add_vertex("c"));
    assert_eq!(graph.size(), 3);
    assert!(!graph.add_vertex("c"));
    assert_eq!(graph.size(), 3);
}

#[test]
fn test_generic_labels() {
    #[derive(Debug, PartialEq)]
    struct City(&'static str);

    let mut graph: WeightedGraph<City> = WeightedGraph::new(false);
    graph.add_vertex(City("Seattle"));
    graph.add_vertex(City("Denver"));
    graph.insert_edge(Edge::weighted(0, 1, 1331.0)).unwrap();

    assert_eq!(graph.index_of(&City("Denver")), Some(1));
    assert_eq!(graph.shortest_path(0).unwrap().cost(1).unwrap(), 1331.0);
}

#[test]
fn test_results_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SearchTree>();
    assert_send_sync::<ShortestPathTree>();
    assert_send_sync::<graphkit_core::Mst>();

    let spt = reference_graph().shortest_path(0).unwrap();
    let handle = std::thread::spawn(move || spt.cost(2).unwrap());
    assert_eq!(handle.join().unwrap(), 6.0);
}
