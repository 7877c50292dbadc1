//! Loose object reading and commit header parsing.
//!
//! A loose commit lives at `objects/<first 2 hex chars>/<remaining 38>`,
//! zlib-compressed. The decompressed bytes are `commit <size>\0` followed by
//! the commit payload:
//!
//! ```text
//! tree <hex-oid>\n
//! parent <hex-oid>\n   (zero or more)
//! author <name> <email> <timestamp> <tz>\n
//! ...further metadata, blank line, free-form message
//! ```
//!
//! Parsing stops at the `author` line. The message body may legitimately
//! contain the word `parent`, so nothing past `author` is ever scanned.
//!
//! # Failure Modes
//! - A missing object file means the repository keeps its objects in
//!   packfiles; that storage layout is unsupported and fatal.
//! - Structural violations (wrong object kind, bad hex, missing `author`,
//!   size mismatch, truncation) are reported as malformed objects.
//!
//! # Complexity
//! Parsing is O(header size); the message body is never examined.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use flate2::read::ZlibDecoder;
use memchr::memchr;

use super::commit_id::CommitId;
use super::errors::ObjectReadError;
use super::limits::ReadLimits;

/// Computes the loose object path for `id` under `git_dir`.
#[must_use]
pub fn object_path(git_dir: &Path, id: &CommitId) -> PathBuf {
    let hex = id.to_hex();
    git_dir.join("objects").join(&hex[..2]).join(&hex[2..])
}

/// Reads one loose commit object and returns its parent ids in encounter
/// order (empty for a root commit).
///
/// # Errors
/// - `ObjectReadError::UnsupportedStorage` if the object file is absent
/// - `ObjectReadError::Inflate` if zlib decompression fails
/// - `ObjectReadError::Malformed` for structural violations or exceeded
///   limits
pub fn read_commit_parents(
    git_dir: &Path,
    id: CommitId,
    limits: &ReadLimits,
) -> Result<Vec<CommitId>, ObjectReadError> {
    let path = object_path(git_dir, &id);

    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(ObjectReadError::UnsupportedStorage { id, source });
        }
        Err(err) => return Err(ObjectReadError::Io(err)),
    };

    if metadata.len() > limits.max_object_file_bytes {
        return Err(ObjectReadError::Malformed {
            id,
            detail: format!(
                "object file is {} bytes (limit: {})",
                metadata.len(),
                limits.max_object_file_bytes
            ),
        });
    }

    let raw = match fs::read(&path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(ObjectReadError::UnsupportedStorage { id, source });
        }
        Err(err) => return Err(ObjectReadError::Io(err)),
    };

    let inflated = inflate(&raw, id, limits)?;
    let payload = strip_loose_header(&inflated, id)?;

    parse_parent_ids(payload, limits)
        .map_err(|detail| ObjectReadError::Malformed { id, detail })
}

/// Decompresses a loose object with a cap on the inflated size.
fn inflate(raw: &[u8], id: CommitId, limits: &ReadLimits) -> Result<Vec<u8>, ObjectReadError> {
    let cap = limits.max_inflated_bytes as u64;
    let mut inflated = Vec::new();
    let mut decoder = ZlibDecoder::new(raw).take(cap.saturating_add(1));

    decoder
        .read_to_end(&mut inflated)
        .map_err(|err| ObjectReadError::Inflate {
            id,
            detail: err.to_string(),
        })?;

    if inflated.len() as u64 > cap {
        return Err(ObjectReadError::Malformed {
            id,
            detail: format!("inflated size exceeds cap ({cap} bytes)"),
        });
    }

    Ok(inflated)
}

/// Validates the `commit <size>\0` header and returns the payload after it.
fn strip_loose_header(bytes: &[u8], id: CommitId) -> Result<&[u8], ObjectReadError> {
    let malformed = |detail: String| ObjectReadError::Malformed { id, detail };

    let nul = memchr(0, bytes)
        .ok_or_else(|| malformed("missing object header terminator".to_string()))?;

    let header = &bytes[..nul];
    let mut parts = header.split(|&b| b == b' ');
    let kind = parts
        .next()
        .ok_or_else(|| malformed("missing object kind".to_string()))?;
    let size_bytes = parts
        .next()
        .ok_or_else(|| malformed("missing object size".to_string()))?;
    if parts.next().is_some() {
        return Err(malformed("invalid object header".to_string()));
    }

    if kind != b"commit" {
        return Err(malformed(format!(
            "object kind is {:?}, not a commit",
            String::from_utf8_lossy(kind)
        )));
    }

    let size = parse_decimal(size_bytes)
        .ok_or_else(|| malformed("invalid object size in loose header".to_string()))?;

    let payload = &bytes[nul + 1..];
    if payload.len() as u64 != size {
        return Err(malformed(format!(
            "object size mismatch: header={size}, payload={}",
            payload.len()
        )));
    }

    Ok(payload)
}

/// Parses the commit header region: a `tree` line, zero or more `parent`
/// lines in encounter order, terminated by the `author` line.
fn parse_parent_ids(payload: &[u8], limits: &ReadLimits) -> Result<Vec<CommitId>, String> {
    let mut pos = 0;

    // "tree <hex>\n"
    if !payload.starts_with(b"tree ") {
        return Err("missing tree header".to_string());
    }
    pos += b"tree ".len();
    let tree_hex = payload
        .get(pos..pos + CommitId::HEX_LEN)
        .ok_or_else(|| "tree header truncated".to_string())?;
    if CommitId::from_hex(tree_hex).is_none() {
        return Err("invalid hex in tree header".to_string());
    }
    pos += CommitId::HEX_LEN;
    if payload.get(pos) != Some(&b'\n') {
        return Err("tree header missing newline".to_string());
    }
    pos += 1;

    // "parent <hex>\n" repeated
    let mut parents = Vec::new();
    while payload[pos..].starts_with(b"parent ") {
        if parents.len() >= limits.max_parents {
            return Err(format!("too many parents (limit: {})", limits.max_parents));
        }
        pos += b"parent ".len();
        let hex = payload
            .get(pos..pos + CommitId::HEX_LEN)
            .ok_or_else(|| "parent header truncated".to_string())?;
        let parent = CommitId::from_hex(hex)
            .ok_or_else(|| "invalid hex in parent header".to_string())?;
        pos += CommitId::HEX_LEN;
        if payload.get(pos) != Some(&b'\n') {
            return Err("parent header missing newline".to_string());
        }
        pos += 1;
        parents.push(parent);
    }

    // The author line ends the parent list region. Everything after it,
    // including a message that mentions "parent", is never scanned.
    if !payload[pos..].starts_with(b"author ") {
        return Err("missing author header".to_string());
    }

    Ok(parents)
}

fn parse_decimal(bytes: &[u8]) -> Option<u64> {
    if bytes.is_empty() {
        return None;
    }

    let mut out = 0u64;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        out = out.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
    }
    Some(out)
}
