//! Deterministic topological ordering of the commit graph.
//!
//! Kahn's algorithm keyed on **children** count rather than parent count:
//! the output lists each commit before its parents (descendants first),
//! matching the order a log reader expects.
//!
//! # Determinism
//! The frontier is a min-heap over commit ids, so whenever several commits
//! are simultaneously ready the smallest id is emitted first. Ties are
//! therefore always broken in ascending-hash order, and repeated runs over
//! the same repository produce identical output.
//!
//! # Guarantees
//! - Every discovered commit appears exactly once.
//! - For every parent/child edge, the child precedes the parent.
//! - Termination with full coverage follows from acyclicity of commit
//!   history; a shortfall would be an internal invariant violation, not a
//!   user-facing error.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::commit_id::CommitId;
use super::graph::CommitGraph;

/// Orders the graph so every commit precedes all of its parents.
#[must_use]
pub fn topo_order(graph: &CommitGraph) -> Vec<CommitId> {
    let mut remaining_children: HashMap<CommitId, usize> =
        HashMap::with_capacity(graph.len());
    let mut frontier: BinaryHeap<Reverse<CommitId>> = BinaryHeap::new();

    for &id in graph.discovered() {
        let children = graph.node(&id).map_or(0, |node| node.children.len());
        remaining_children.insert(id, children);
        if children == 0 {
            frontier.push(Reverse(id));
        }
    }

    let mut order = Vec::with_capacity(graph.len());

    while let Some(Reverse(current)) = frontier.pop() {
        order.push(current);

        let Some(node) = graph.node(&current) else {
            continue;
        };
        for parent in &node.parents {
            if let Some(count) = remaining_children.get_mut(parent) {
                *count -= 1;
                if *count == 0 {
                    frontier.push(Reverse(*parent));
                }
            }
        }
    }

    debug_assert_eq!(order.len(), graph.len(), "frontier drained early");
    order
}
