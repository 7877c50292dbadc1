//! Fixed-size commit identifiers.
//!
//! A `CommitId` is the 20-byte SHA-1 object id behind the 40-character hex
//! strings found in ref files and commit headers. Storing raw bytes keeps the
//! type `Copy`, zero-heap, and cheap to hash.
//!
//! # Ordering Semantics
//! `Ord` compares the raw bytes lexicographically, which is identical to
//! comparing the lowercase hex renderings. The topological sorter relies on
//! this to break ties in ascending-hash order.

use std::fmt;

/// 20-byte SHA-1 commit object id.
///
/// # Invariants
/// - Always exactly 20 bytes; constructed only from valid 40-char hex input
///   or trusted raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommitId([u8; 20]);

impl CommitId {
    /// Raw byte length of an id.
    pub const RAW_LEN: usize = 20;
    /// Hex string length of an id.
    pub const HEX_LEN: usize = 40;

    /// Creates an id from raw bytes.
    #[inline]
    #[must_use]
    pub const fn from_raw(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parses a 40-character hex id.
    ///
    /// Accepts upper- and lowercase hex digits; anything else (including a
    /// wrong length) returns `None`.
    #[must_use]
    pub fn from_hex(hex: &[u8]) -> Option<Self> {
        if hex.len() != Self::HEX_LEN {
            return None;
        }

        let mut raw = [0u8; Self::RAW_LEN];
        for (i, out) in raw.iter_mut().enumerate() {
            let hi = hex_nibble(hex[2 * i])?;
            let lo = hex_nibble(hex[2 * i + 1])?;
            *out = (hi << 4) | lo;
        }
        Some(Self(raw))
    }

    /// Returns the raw bytes.
    #[inline]
    #[must_use]
    pub const fn as_raw(&self) -> &[u8; 20] {
        &self.0
    }

    /// Renders the id as a lowercase 40-character hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(Self::HEX_LEN);
        for &byte in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut out, "{byte:02x}");
        }
        out
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitId({})", self.to_hex())
    }
}

#[inline]
fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
