//! Utility functions
//!
//! Shared helpers for input validation.

pub mod validation;

pub use validation::parse_eth_address;
