//! Deterministic topological ordering of Git commit history.
//!
//! ## Scope
//! This crate reconstructs the commit ancestry DAG of a local repository by
//! reading its loose object store directly (zlib inflation plus commit
//! header parsing, no packfile decoding) and renders a compact,
//! round-trippable text listing in which every commit precedes its parents.
//!
//! ## Key invariants
//! - Read-only and single-shot: one call builds the whole graph from
//!   scratch and nothing is persisted.
//! - Deterministic: ties in the topological order are broken in
//!   ascending-hash order, and all rendered lists have a fixed order, so
//!   repeated runs over an unchanged repository are byte-identical.
//! - No implicit process state: the `.git` path is threaded explicitly
//!   through every filesystem-touching stage.
//!
//! ## Pipeline
//! `start dir -> discover -> read refs -> build graph -> topo sort -> render`
//!
//! ## Notable entry points
//! - [`git_topo::topo_order_output`]: the full pipeline in one call.
//! - [`git_topo::build_commit_graph`] / [`git_topo::topo_order`] /
//!   [`git_topo::render`]: the individual stages, for callers that want to
//!   inspect the graph.

pub mod git_topo;

pub use git_topo::{
    build_commit_graph, discover, group_branch_heads, read_branch_heads, read_commit_parents,
    render, topo_order, topo_order_output, CommitGraph, CommitId, CommitNode, DiscoverError,
    ObjectReadError, ReadLimits, RefReadError, TopoOrderError,
};
