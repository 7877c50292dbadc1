//! Error types for the topological ordering stages.
//!
//! Errors are stage-specific to keep diagnostics precise: repository
//! discovery, ref reading, and object reading each have their own enum.
//! All enums are `#[non_exhaustive]` so variants can be added without
//! breaking callers.
//!
//! Every failure here is fatal for the run. There are no retries and no
//! partial output; `main` prints the `Display` rendering to stderr and
//! exits non-zero.

use std::fmt;
use std::io;

use super::commit_id::CommitId;

/// Errors from repository discovery.
#[derive(Debug)]
#[non_exhaustive]
pub enum DiscoverError {
    /// No `.git` directory found walking up to the filesystem root.
    NotARepository,
    /// I/O error while resolving the starting directory.
    Io(io::Error),
}

impl fmt::Display for DiscoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotARepository => write!(f, "not inside a Git repository"),
            Self::Io(err) => write!(f, "repository discovery I/O error: {err}"),
        }
    }
}

impl std::error::Error for DiscoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DiscoverError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Errors from branch ref enumeration.
#[derive(Debug)]
#[non_exhaustive]
pub enum RefReadError {
    /// I/O error while walking `refs/heads`.
    Io(io::Error),
    /// A ref file does not hold a 40-character hex commit id.
    MalformedRef { branch: String, detail: &'static str },
}

impl fmt::Display for RefReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "ref read I/O error: {err}"),
            Self::MalformedRef { branch, detail } => {
                write!(f, "malformed ref for branch {branch}: {detail}")
            }
        }
    }
}

impl std::error::Error for RefReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RefReadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Errors from loose object reading and commit parsing.
#[derive(Debug)]
#[non_exhaustive]
pub enum ObjectReadError {
    /// Expected loose object file is absent. The repository most likely
    /// stores its objects in packfiles, which this tool does not decode.
    UnsupportedStorage { id: CommitId, source: io::Error },
    /// I/O error reading an object file that does exist.
    Io(io::Error),
    /// Zlib inflation failed (truncated or corrupt object file).
    Inflate { id: CommitId, detail: String },
    /// The decompressed object lacks the expected commit structure.
    Malformed { id: CommitId, detail: String },
}

impl fmt::Display for ObjectReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedStorage { id, source } => write!(
                f,
                "object {id} not found; this repository may be using packfiles, \
                 which is not supported: {source}"
            ),
            Self::Io(err) => write!(f, "object read I/O error: {err}"),
            Self::Inflate { id, detail } => {
                write!(f, "object {id} failed to decompress: {detail}")
            }
            Self::Malformed { id, detail } => {
                write!(f, "object {id} is malformed: {detail}")
            }
        }
    }
}

impl std::error::Error for ObjectReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedStorage { source, .. } => Some(source),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ObjectReadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Umbrella error for the full discover-to-render pipeline.
#[derive(Debug)]
#[non_exhaustive]
pub enum TopoOrderError {
    /// Repository discovery failed.
    Discover(DiscoverError),
    /// Branch ref enumeration failed.
    Refs(RefReadError),
    /// Object reading or parsing failed during graph construction.
    Object(ObjectReadError),
}

impl fmt::Display for TopoOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discover(err) => fmt::Display::fmt(err, f),
            Self::Refs(err) => fmt::Display::fmt(err, f),
            Self::Object(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for TopoOrderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Discover(err) => Some(err),
            Self::Refs(err) => Some(err),
            Self::Object(err) => Some(err),
        }
    }
}

impl From<DiscoverError> for TopoOrderError {
    fn from(err: DiscoverError) -> Self {
        Self::Discover(err)
    }
}

impl From<RefReadError> for TopoOrderError {
    fn from(err: RefReadError) -> Self {
        Self::Refs(err)
    }
}

impl From<ObjectReadError> for TopoOrderError {
    fn from(err: ObjectReadError) -> Self {
        Self::Object(err)
    }
}
