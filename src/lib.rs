//! Wallet session library
//!
//! Models a browser-wallet session: connecting to an injected EIP-1193
//! provider, tracking the active chain, resolving the network name, and
//! fetching address balances. The provider is injected at construction,
//! so any `WalletProvider` implementation (including the simulated one)
//! can back a session.

pub mod config;
pub mod error;
pub mod network;
pub mod provider;
pub mod session;
pub mod units;
pub mod utils;

pub use config::SessionConfig;
pub use network::{NetworkInfo, NetworkName, parse_chain_id, resolve};
pub use provider::{ProviderEvent, ProviderRequest, SimulatedProvider, WalletProvider};
pub use session::{SessionState, WalletSession};
