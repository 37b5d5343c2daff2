//! Wallet session management
//!
//! Owns connection, chain and balance state, reacts to provider events,
//! and exposes the commands the view layer calls.

mod events;
pub mod state;
pub mod wallet;

pub use state::SessionState;
pub use wallet::{DISCONNECTED_NOTICE, NO_WALLET_NOTICE, UNSUPPORTED_NETWORK_NOTICE, WalletSession};
