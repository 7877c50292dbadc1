//! Property tests for graph coverage, ordering, and determinism.
//!
//! Random DAGs are generated by letting each commit pick parents only among
//! commits with a strictly smaller index, which rules out cycles by
//! construction. The fixture writes the DAG as real loose objects so the
//! whole pipeline (refs, inflate, parse, build, sort, render) is exercised.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use proptest::prelude::*;
use tempfile::TempDir;

use topo_rs::{build_commit_graph, read_branch_heads, topo_order_output, CommitId, ReadLimits};

/// Deterministic 40-hex id for a node index.
fn node_hex(index: usize) -> String {
    format!("{index:040x}")
}

/// Writes one loose commit object under `git_dir`.
fn write_commit(git_dir: &Path, hex: &str, parents: &[String]) {
    let mut payload = Vec::new();
    payload.extend_from_slice(format!("tree {:040}\n", 0).as_bytes());
    for parent in parents {
        payload.extend_from_slice(format!("parent {parent}\n").as_bytes());
    }
    payload.extend_from_slice(b"author A U Thor <author@example.com> 1700000000 +0000\n");
    payload.extend_from_slice(b"committer A U Thor <author@example.com> 1700000000 +0000\n");
    payload.extend_from_slice(b"\nmsg\n");

    let mut object = Vec::new();
    object.extend_from_slice(format!("commit {}\0", payload.len()).as_bytes());
    object.extend_from_slice(&payload);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&object).unwrap();

    let path = git_dir.join("objects").join(&hex[..2]).join(&hex[2..]);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, encoder.finish().unwrap()).unwrap();
}

/// Materializes a parent-index DAG as an on-disk repository.
///
/// Every node with no children gets its own branch so the whole DAG is
/// reachable from the head set.
fn materialize(parents_by_node: &[Vec<usize>]) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let work_dir = tmp.path().join("repo");
    let git_dir = work_dir.join(".git");
    fs::create_dir_all(git_dir.join("objects")).unwrap();
    fs::create_dir_all(git_dir.join("refs").join("heads")).unwrap();

    let mut has_child = vec![false; parents_by_node.len()];
    for (node, parents) in parents_by_node.iter().enumerate() {
        let parent_hex: Vec<String> = parents.iter().map(|&p| node_hex(p)).collect();
        write_commit(&git_dir, &node_hex(node), &parent_hex);
        for &parent in parents {
            has_child[parent] = true;
        }
    }

    for (node, &parented) in has_child.iter().enumerate() {
        if !parented {
            let ref_path = git_dir
                .join("refs")
                .join("heads")
                .join(format!("tip-{node}"));
            fs::write(ref_path, format!("{}\n", node_hex(node))).unwrap();
        }
    }

    (tmp, work_dir)
}

/// Strategy: for each node index, a set of parent indices smaller than it.
fn dag_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..24).prop_flat_map(|n| {
        let nodes: Vec<_> = (0..n)
            .map(|i| {
                if i == 0 {
                    Just(Vec::new()).boxed()
                } else {
                    prop::collection::hash_set(0..i, 0..=i.min(3))
                        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
                        .boxed()
                }
            })
            .collect();
        nodes
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_reachable_commit_appears_exactly_once(parents in dag_strategy()) {
        let (_tmp, work_dir) = materialize(&parents);
        let git_dir = work_dir.join(".git");
        let limits = ReadLimits::default();

        let heads = read_branch_heads(&git_dir, &limits).unwrap();
        let graph = build_commit_graph(&git_dir, &heads, &limits).unwrap();
        let order = topo_rs::topo_order(&graph);

        prop_assert_eq!(order.len(), parents.len());
        let unique: HashSet<_> = order.iter().collect();
        prop_assert_eq!(unique.len(), parents.len());
    }

    #[test]
    fn children_always_precede_parents(parents in dag_strategy()) {
        let (_tmp, work_dir) = materialize(&parents);
        let git_dir = work_dir.join(".git");
        let limits = ReadLimits::default();

        let heads = read_branch_heads(&git_dir, &limits).unwrap();
        let graph = build_commit_graph(&git_dir, &heads, &limits).unwrap();
        let order = topo_rs::topo_order(&graph);

        let position = |hex: &str| {
            let id = CommitId::from_hex(hex.as_bytes()).unwrap();
            order.iter().position(|&o| o == id).unwrap()
        };

        for (node, node_parents) in parents.iter().enumerate() {
            for &parent in node_parents {
                prop_assert!(
                    position(&node_hex(node)) < position(&node_hex(parent)),
                    "commit {} must precede its parent {}",
                    node_hex(node),
                    node_hex(parent)
                );
            }
        }
    }

    #[test]
    fn rendered_output_is_stable_across_runs(parents in dag_strategy()) {
        let (_tmp, work_dir) = materialize(&parents);
        let limits = ReadLimits::default();

        let first = topo_order_output(&work_dir, &limits).unwrap();
        let second = topo_order_output(&work_dir, &limits).unwrap();
        prop_assert_eq!(first, second);
    }
}
