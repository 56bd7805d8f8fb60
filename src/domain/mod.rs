//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and payload construction
//! - `wire.rs` — Raw serde structs matching the API's JSON
//! - `client.rs` — Sub-client with HTTP methods

pub mod ip_asset;
