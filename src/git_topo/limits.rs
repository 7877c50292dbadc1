//! Explicit read and parse limits.
//!
//! All file reads are bounded before any bytes are touched, so a corrupt or
//! hostile repository cannot make the tool allocate unbounded memory. The
//! defaults are generous for real repositories; violations surface as
//! malformed-input errors, never as panics.

/// Bounds applied while reading refs and loose objects.
#[derive(Debug, Clone, Copy)]
pub struct ReadLimits {
    /// Maximum bytes to read from a single ref file.
    pub max_ref_file_bytes: u64,
    /// Maximum on-disk size of a loose object file.
    pub max_object_file_bytes: u64,
    /// Maximum decompressed size of a loose object.
    pub max_inflated_bytes: usize,
    /// Maximum parents per commit (well above real octopus merges).
    pub max_parents: usize,
}

impl Default for ReadLimits {
    fn default() -> Self {
        Self {
            max_ref_file_bytes: 4096,
            max_object_file_bytes: 64 * 1024 * 1024,
            max_inflated_bytes: 64 * 1024 * 1024,
            max_parents: 256,
        }
    }
}
