//! Commit graph construction.
//!
//! Builds the full ancestor DAG of a set of branch heads with an iterative
//! depth-first traversal. The explicit stack keeps long linear histories from
//! hitting recursion depth limits.
//!
//! # Algorithm
//! 1. Seed the node table with one node per distinct head id
//! 2. Pop an id from the stack; skip if already visited
//! 3. Record it in discovery order and read its parents from the object store
//! 4. Resolve or create each parent node, record both adjacency directions,
//!    and push the parent
//! 5. Repeat until the stack drains
//!
//! # Invariants
//! - One node per id; two branches sharing a head collapse onto one node.
//! - Adjacency is stored as id sets, never as embedded node references.
//! - Every discovered node is reachable from some head via parent edges.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use super::commit_id::CommitId;
use super::errors::ObjectReadError;
use super::limits::ReadLimits;
use super::loose::read_commit_parents;

/// Adjacency record for one commit.
///
/// `BTreeSet` keeps both edge sets in ascending id order, which the
/// serializer relies on for deterministic sticky annotations.
#[derive(Debug, Clone, Default)]
pub struct CommitNode {
    /// Ids of this commit's parents.
    pub parents: BTreeSet<CommitId>,
    /// Ids of commits that list this commit as a parent.
    pub children: BTreeSet<CommitId>,
}

/// The ancestor DAG of all branch heads, deduplicated by id.
#[derive(Debug, Default)]
pub struct CommitGraph {
    nodes: HashMap<CommitId, CommitNode>,
    discovered: Vec<CommitId>,
}

impl CommitGraph {
    /// Returns the adjacency record for `id`, if discovered.
    #[inline]
    #[must_use]
    pub fn node(&self, id: &CommitId) -> Option<&CommitNode> {
        self.nodes.get(id)
    }

    /// Returns all discovered ids in traversal order.
    #[inline]
    #[must_use]
    pub fn discovered(&self) -> &[CommitId] {
        &self.discovered
    }

    /// Returns the number of discovered commits.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    /// Returns true if no commits were discovered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }
}

/// Builds the ancestor DAG for the given branch heads.
///
/// Duplicate head ids are collapsed before traversal. The returned graph
/// contains every ancestor of every head exactly once, with complete
/// bidirectional adjacency.
///
/// # Errors
/// Propagates the first `ObjectReadError` from the object store; the graph
/// is abandoned at that point and no output is produced.
pub fn build_commit_graph(
    git_dir: &Path,
    heads: &[(String, CommitId)],
    limits: &ReadLimits,
) -> Result<CommitGraph, ObjectReadError> {
    let mut nodes: HashMap<CommitId, CommitNode> = HashMap::new();
    let mut stack: Vec<CommitId> = Vec::new();

    for (_, id) in heads {
        if !nodes.contains_key(id) {
            nodes.insert(*id, CommitNode::default());
            stack.push(*id);
        }
    }

    let mut visited: HashSet<CommitId> = HashSet::with_capacity(stack.len());
    let mut discovered: Vec<CommitId> = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        discovered.push(current);

        for parent in read_commit_parents(git_dir, current, limits)? {
            nodes.entry(parent).or_default().children.insert(current);
            nodes.entry(current).or_default().parents.insert(parent);
            stack.push(parent);
        }
    }

    Ok(CommitGraph { nodes, discovered })
}
