//! Integration tests for topo-rs.
//!
//! Run with: `cargo test --test integration`

mod topo_output;
