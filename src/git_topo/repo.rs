//! Repository discovery.
//!
//! Walks upward from a starting directory until a `.git` directory is found.
//! The walk accumulates a path value instead of changing the process working
//! directory, so discovery is safe to call from library code and has no
//! process-wide side effects.
//!
//! # Failure Modes
//! - `NotARepository` when the filesystem root is reached without finding
//!   a `.git` directory.
//! - I/O errors only from canonicalizing the starting directory; the walk
//!   itself just probes paths.

use std::path::{Path, PathBuf};

use super::errors::DiscoverError;

/// Finds the `.git` directory governing `start`.
///
/// Returns the absolute path of the `.git` directory. The starting directory
/// is canonicalized first so `..` components and symlinks cannot skew the
/// upward walk.
///
/// # Errors
/// - `DiscoverError::NotARepository` if no ancestor contains `.git`
/// - `DiscoverError::Io` if `start` cannot be canonicalized
pub fn discover(start: &Path) -> Result<PathBuf, DiscoverError> {
    let mut dir = start.canonicalize()?;

    loop {
        let candidate = dir.join(".git");
        if candidate.is_dir() {
            return Ok(candidate);
        }

        if !dir.pop() {
            return Err(DiscoverError::NotARepository);
        }
    }
}
