//! Wallet provider interface
//!
//! The injected wallet (e.g. a browser extension) is an external
//! collaborator; the session talks to it only through the `WalletProvider`
//! trait. A handle is injected at session construction so tests can
//! substitute the simulated provider.

pub mod simulated;
pub mod types;

pub use simulated::SimulatedProvider;
pub use types::{ProviderEvent, ProviderRequest};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::error::ProviderError;

/// EIP-1193 style wallet provider surface.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Submit a request and await the provider's response.
    async fn request(&self, request: ProviderRequest) -> Result<Value, ProviderError>;

    /// Subscribe to provider events.
    ///
    /// Dropping the receiver unsubscribes; the session holds it only for
    /// the lifetime of its event-forwarding task.
    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;
}
