//! End-to-end pipeline: discover, read refs, build, sort, render.
//!
//! One call performs one read-only pass over the repository and returns the
//! finished text. Nothing is written anywhere and no process-wide state is
//! touched; the `.git` path is threaded explicitly through every stage, so
//! the pipeline is safe to embed in library callers.

use std::path::Path;

use super::errors::TopoOrderError;
use super::graph::build_commit_graph;
use super::limits::ReadLimits;
use super::refs::{group_branch_heads, read_branch_heads};
use super::render::render;
use super::repo::discover;
use super::topo::topo_order;

/// Produces the topologically ordered commit listing for the repository
/// governing `start`.
///
/// Returns the rendered text (no trailing newline). A repository with no
/// branches yields an empty string.
///
/// # Errors
/// The first failing stage aborts the run; no partial output is returned.
pub fn topo_order_output(start: &Path, limits: &ReadLimits) -> Result<String, TopoOrderError> {
    let git_dir = discover(start)?;
    let heads = read_branch_heads(&git_dir, limits)?;
    let branch_heads = group_branch_heads(&heads);

    let graph = build_commit_graph(&git_dir, &heads, limits)?;
    let order = topo_order(&graph);

    Ok(render(&graph, &order, &branch_heads))
}
