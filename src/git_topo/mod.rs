//! Commit ancestry reconstruction and topological ordering.
//!
//! Reads a repository's loose object store directly (no packfile support)
//! and emits a deterministic, descendant-first ordering of every commit
//! reachable from a local branch head.
//!
//! Stage order: repository discovery → branch ref enumeration → graph
//! construction (one loose object read per newly discovered commit) →
//! topological sort → text rendering.
//!
//! # Invariants
//! - Read-only: no repository state is ever modified.
//! - Deterministic: identical repository state yields identical output.
//! - All file reads are bounded by explicit limits.

pub mod commit_id;
pub mod errors;
pub mod graph;
pub mod limits;
pub mod loose;
pub mod refs;
pub mod render;
pub mod repo;
pub mod runner;
pub mod topo;

pub use commit_id::CommitId;
pub use errors::{DiscoverError, ObjectReadError, RefReadError, TopoOrderError};
pub use graph::{build_commit_graph, CommitGraph, CommitNode};
pub use limits::ReadLimits;
pub use loose::read_commit_parents;
pub use refs::{group_branch_heads, read_branch_heads};
pub use render::render;
pub use repo::discover;
pub use runner::topo_order_output;
pub use topo::topo_order;
