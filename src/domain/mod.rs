//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Request payloads with their argument checks
//! - `client.rs` — Sub-client with one method per endpoint

pub mod category;
pub mod contact;
pub mod scenario;
