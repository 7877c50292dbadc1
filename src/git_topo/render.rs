//! Text serialization of the topological ordering.
//!
//! One line per commit, normally just its hex id. When the sequence jumps to
//! a commit that is not a parent of the previously emitted one (a lineage
//! break), two sticky annotations record the edges that the flat layout
//! would otherwise lose:
//!
//! ```text
//! <previous commit's parents, space-joined>=
//!
//! =<current commit's children, space-joined>
//! <current commit id>
//! ```
//!
//! A reader can reconstruct the complete edge set from the bare lines plus
//! these annotations. Commits that head one or more branches carry the
//! lexicographically sorted branch names after the id.
//!
//! # Determinism
//! Adjacency sets iterate in ascending id order and branch-name lists are
//! pre-sorted, so rendering the same graph always yields identical bytes.

use std::collections::BTreeMap;

use super::commit_id::CommitId;
use super::graph::CommitGraph;

/// Renders the ordered commits as newline-joined text.
///
/// `branch_heads` maps head ids to their sorted branch-name lists, as
/// produced by [`super::refs::group_branch_heads`]. The returned string has
/// no trailing newline.
#[must_use]
pub fn render(
    graph: &CommitGraph,
    order: &[CommitId],
    branch_heads: &BTreeMap<CommitId, Vec<String>>,
) -> String {
    let mut entries: Vec<String> = Vec::with_capacity(order.len());
    let mut prev: Option<CommitId> = None;

    for &current in order {
        let mut entry = String::new();

        if let Some(prev_id) = prev {
            let continuous = graph
                .node(&current)
                .is_some_and(|node| node.children.contains(&prev_id));

            if !continuous {
                // Sticky end: the previous commit's parents, closing its
                // segment. Sticky start: the current commit's children,
                // opening the next one.
                entry.push_str(&join_ids(graph, &prev_id, EdgeSet::Parents));
                entry.push_str("=\n\n=");
                entry.push_str(&join_ids(graph, &current, EdgeSet::Children));
                entry.push('\n');
            }
        }

        entry.push_str(&current.to_hex());

        if let Some(names) = branch_heads.get(&current) {
            entry.push(' ');
            entry.push_str(&names.join(" "));
        }

        entries.push(entry);
        prev = Some(current);
    }

    entries.join("\n")
}

enum EdgeSet {
    Parents,
    Children,
}

fn join_ids(graph: &CommitGraph, id: &CommitId, which: EdgeSet) -> String {
    let Some(node) = graph.node(id) else {
        return String::new();
    };
    let set = match which {
        EdgeSet::Parents => &node.parents,
        EdgeSet::Children => &node.children,
    };
    set.iter()
        .map(CommitId::to_hex)
        .collect::<Vec<_>>()
        .join(" ")
}
