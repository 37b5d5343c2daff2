//! Error handling
//!
//! Defines error types and handling for the wallet session.

pub mod types;

pub use types::*;
