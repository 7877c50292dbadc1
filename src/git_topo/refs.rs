//! Branch ref enumeration.
//!
//! Reads every leaf file under `refs/heads`. Branch names may contain `/`,
//! which Git materializes as nested directories; the walk uses an explicit
//! directory stack (no recursion) and joins directory segments with `/` to
//! reconstruct the full branch name.
//!
//! # Determinism
//! Directory entries are sorted by name before visiting and the final list
//! is sorted by branch name, so repeated runs over the same repository
//! enumerate heads in the same order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::commit_id::CommitId;
use super::errors::RefReadError;
use super::limits::ReadLimits;

/// Enumerates local branch heads as `(branch name, head commit id)` pairs.
///
/// A missing or empty `refs/heads` directory yields an empty list (a freshly
/// initialized repository has no branches yet).
///
/// # Errors
/// - `RefReadError::Io` for directory or file read failures
/// - `RefReadError::MalformedRef` when a leaf file does not hold a
///   40-character hex id, exceeds the size limit, or has a non-UTF-8 name
pub fn read_branch_heads(
    git_dir: &Path,
    limits: &ReadLimits,
) -> Result<Vec<(String, CommitId)>, RefReadError> {
    let heads_dir = git_dir.join("refs").join("heads");
    if !heads_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    let mut pending = vec![(heads_dir, String::new())];

    while let Some((dir, prefix)) = pending.pop() {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir)? {
            entries.push(entry?);
        }
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                return Err(RefReadError::MalformedRef {
                    branch: file_name.to_string_lossy().into_owned(),
                    detail: "ref name is not valid UTF-8",
                });
            };

            let branch = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}/{name}")
            };

            if entry.file_type()?.is_dir() {
                pending.push((entry.path(), branch));
            } else {
                let id = read_head_id(&entry.path(), &branch, limits)?;
                out.push((branch, id));
            }
        }
    }

    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}

/// Groups branch heads by commit id, with branch names sorted per id.
///
/// Two branches whose ref files hold the same id collapse onto one entry;
/// the serializer renders all of their names on that commit's line.
#[must_use]
pub fn group_branch_heads(heads: &[(String, CommitId)]) -> BTreeMap<CommitId, Vec<String>> {
    let mut grouped: BTreeMap<CommitId, Vec<String>> = BTreeMap::new();
    for (branch, id) in heads {
        grouped.entry(*id).or_default().push(branch.clone());
    }
    for names in grouped.values_mut() {
        names.sort();
    }
    grouped
}

/// Reads and validates the commit id stored in one ref leaf file.
fn read_head_id(
    path: &Path,
    branch: &str,
    limits: &ReadLimits,
) -> Result<CommitId, RefReadError> {
    let len = fs::metadata(path)?.len();
    if len > limits.max_ref_file_bytes {
        return Err(RefReadError::MalformedRef {
            branch: branch.to_string(),
            detail: "ref file exceeds size limit",
        });
    }

    let raw = fs::read(path)?;
    let trimmed = trim_ascii_whitespace(&raw);

    CommitId::from_hex(trimmed).ok_or_else(|| RefReadError::MalformedRef {
        branch: branch.to_string(),
        detail: "ref file does not hold a 40-character hex commit id",
    })
}

fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}
