//! Integration tests for the graphkit CLI
//!
//! These tests run the graphkit binary against small graphs given entirely
//! on the command line.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

/// Get a Command for graphkit
fn graphkit() -> Command {
    cargo_bin_cmd!("graphkit")
}

/// Labels a..e with the five-vertex weighted reference graph
fn reference_args() -> Vec<&'static str> {
    vec![
        "--vertex", "a", "--vertex", "b", "--vertex", "c", "--vertex", "d", "--vertex", "e",
        "--edge", "0:1:5", "--edge", "0:3:4", "--edge", "0:4:3", "--edge", "1:2:3",
        "--edge", "2:3:2", "--edge", "3:4:6",
    ]
}

/// Unweighted square 0-1-3-2-0
fn square_args() -> Vec<&'static str> {
    vec![
        "--count", "4", "--edge", "0:1", "--edge", "0:2", "--edge", "1:3", "--edge", "2:3",
    ]
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphkit"))
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("mst"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_version_flag() {
    graphkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphkit"));
}

// ============================================================================
// Edges and traversals
// ============================================================================

#[test]
fn test_edges_lists_mirrored_neighbors() {
    graphkit()
        .args(square_args())
        .arg("edges")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 (0): (0, 1) (0, 2)\n"))
        .stdout(predicate::str::contains("3 (3): (3, 1) (3, 2)\n"));
}

#[test]
fn test_edges_directed_keeps_one_direction() {
    graphkit()
        .args(square_args())
        .args(["--directed", "edges"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 (3):\n"));
}

#[test]
fn test_edges_weighted_shows_weights() {
    graphkit()
        .args(reference_args())
        .arg("edges")
        .assert()
        .success()
        .stdout(predicate::str::contains("a (0): (a, b, 5) (a, d, 4) (a, e, 3)\n"));
}

#[test]
fn test_dfs_search_order() {
    graphkit()
        .args(square_args())
        .arg("dfs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: 0"))
        .stdout(predicate::str::contains("Search order: 0 1 3 2"))
        .stdout(predicate::str::contains("Found 4 of 4 vertices"));
}

#[test]
fn test_bfs_search_order() {
    graphkit()
        .args(square_args())
        .arg("bfs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search order: 0 1 2 3"));
}

#[test]
fn test_bfs_json_output() {
    let json = stdout_json(
        graphkit()
            .args(square_args())
            .args(["--format", "json", "bfs", "--start", "3"]),
    );

    assert_eq!(json["kind"], "bfs");
    assert_eq!(json["root"], "3");
    assert_eq!(json["search_order"], serde_json::json!(["3", "1", "2", "0"]));
}

#[test]
fn test_dfs_disconnected_reports_partial_tree() {
    graphkit()
        .args(["--count", "4", "--edge", "0:1", "--edge", "2:3", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search order: 0 1"))
        .stdout(predicate::str::contains("Found 2 of 4 vertices"));
}

// ============================================================================
// Minimum spanning tree
// ============================================================================

#[test]
fn test_mst_total_weight() {
    graphkit()
        .args(reference_args())
        .arg("mst")
        .assert()
        .success()
        .stdout(predicate::str::contains("Root is: a"))
        .stdout(predicate::str::contains("Total weight: 12"));
}

#[test]
fn test_mst_json_edges() {
    let json = stdout_json(
        graphkit()
            .args(reference_args())
            .args(["--format", "json", "mst"]),
    );

    assert_eq!(json["total_weight"], 12.0);
    assert_eq!(json["spanned"], 5);
    assert_eq!(
        json["search_order"],
        serde_json::json!(["a", "e", "d", "c", "b"])
    );
    assert_eq!(json["edges"].as_array().unwrap().len(), 4);
}

#[test]
fn test_mst_same_weight_from_any_root() {
    for root in ["1", "2", "3", "4"] {
        graphkit()
            .args(reference_args())
            .args(["mst", "--start", root])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total weight: 12"));
    }
}

#[test]
fn test_mst_on_unweighted_graph_is_usage_error() {
    graphkit()
        .args(square_args())
        .arg("mst")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("weighted"));
}

// ============================================================================
// Shortest paths
// ============================================================================

#[test]
fn test_path_all_costs() {
    graphkit()
        .args(reference_args())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("All shortest paths from a are:"))
        .stdout(predicate::str::contains("A path from a to c: a d c (cost: 6)"))
        .stdout(predicate::str::contains("A path from a to b: a b (cost: 5)"));
}

#[test]
fn test_path_single_target() {
    graphkit()
        .args(reference_args())
        .args(["path", "--source", "4", "--target", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A path from e to c: e d c (cost: 8)"));
}

#[test]
fn test_path_json_marks_unreachable_as_null() {
    let json = stdout_json(graphkit().args([
        "--count", "3", "--edge", "0:1:2", "--format", "json", "path",
    ]));

    assert_eq!(json["source"], "0");
    let paths = json["paths"].as_array().unwrap();
    assert_eq!(paths[1]["cost"], 2.0);
    assert_eq!(paths[1]["path"], serde_json::json!(["0", "1"]));
    assert!(paths[2]["cost"].is_null());
    assert!(paths[2]["path"].is_null());
}

#[test]
fn test_path_unreachable_target_exit_code_3() {
    graphkit()
        .args(["--count", "3", "--edge", "0:1:2", "path", "--target", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unreachable"));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_negative_index_exit_code_2() {
    graphkit().args(["--edge=-1:0", "edges"]).assert().code(2);
}

#[test]
fn test_malformed_edge_exit_code_2() {
    graphkit().args(["--edge", "0-1", "edges"]).assert().code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    graphkit()
        .args(["--format", "invalid", "--count", "1", "edges"])
        .assert()
        .code(2);
}

#[test]
fn test_edge_out_of_range_exit_code_3() {
    graphkit()
        .args(["--count", "2", "--edge", "0:5", "edges"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no such index: 5"));
}

#[test]
fn test_start_out_of_range_exit_code_3() {
    graphkit()
        .args(square_args())
        .args(["dfs", "--start", "9"])
        .assert()
        .code(3);
}

#[test]
fn test_mixed_weights_exit_code_2() {
    graphkit()
        .args(["--count", "3", "--edge", "0:1:2", "--edge", "1:2", "edges"])
        .assert()
        .code(2);
}

#[test]
fn test_duplicate_vertex_label_exit_code_2() {
    graphkit()
        .args(["--vertex", "a", "--vertex", "a", "edges"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicate vertex label"));
}

#[test]
fn test_no_vertices_exit_code_2() {
    graphkit().arg("edges").assert().code(2);
}

#[test]
fn test_max_edge_index_exit_code_2() {
    graphkit()
        .args(["--edge", "18446744073709551615:0", "edges"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_huge_implied_vertex_count_exit_code_2() {
    graphkit()
        .args(["--edge", "4000000000:0", "edges"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at most"));
}

#[test]
fn test_huge_count_exit_code_2() {
    graphkit()
        .args(["--count", "99999999999", "dfs"])
        .assert()
        .code(2);
}

#[test]
fn test_non_finite_weight_exit_code_2() {
    graphkit()
        .args(["--count", "2", "--edge", "0:1:NaN", "path"])
        .assert()
        .code(2);
}

#[test]
fn test_json_error_envelope() {
    let output = graphkit()
        .args(["--format", "json", "--count", "2", "--edge", "0:5", "edges"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "index_out_of_range");
}

#[test]
fn test_json_envelope_on_parse_error() {
    let output = graphkit()
        .args(["--format", "json", "--edge", "x:y", "edges"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_env_format_json_envelope_on_parse_error() {
    let output = graphkit()
        .env("GRAPHKIT_FORMAT", "json")
        .args(["--edge", "0:1:inf", "edges"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_help_with_json_format_is_not_an_error() {
    graphkit()
        .args(["--format", "json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphkit"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    graphkit()
        .args(["--quiet", "--count", "2", "--edge", "0:5", "edges"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
