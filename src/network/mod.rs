//! Network identification
//!
//! Maps chain identifiers to human-readable network names.

pub mod resolver;

pub use resolver::{NetworkInfo, NetworkName, parse_chain_id, resolve};
