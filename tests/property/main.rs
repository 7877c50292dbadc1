//! Property tests for topo-rs.
//!
//! Run with: `cargo test --test property`

mod topo_properties;
