//! Module `wallet`
//!
//! The `WalletSession` state machine: commands invoked by the view layer,
//! chain-sync against the provider, and the event-forwarding task that
//! subscribes to provider events for the session's lifetime.
//!
//! Every command recovers its own failures into the status message; no
//! error propagates past the session boundary, and the session stays
//! usable after any failure.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;

use crate::config::SessionConfig;
use crate::error::{ProviderError, SessionError};
use crate::provider::{ProviderEvent, ProviderRequest, WalletProvider};
use crate::session::events::{apply_chain, apply_event, mark_disconnected};
use crate::session::state::SessionState;
use crate::units::{format_wei_as_ether, parse_wei};
use crate::utils::parse_eth_address;

/// Status message when no injected wallet is available.
pub const NO_WALLET_NOTICE: &str = "No Ethereum wallet detected";
/// Status message after a disconnect.
pub const DISCONNECTED_NOTICE: &str = "Disconnected";
/// Status message when the active chain is not a supported network.
pub const UNSUPPORTED_NETWORK_NOTICE: &str =
    "Please connect to Sepolia Testnet or Ethereum Mainnet.";

/// Tracks one wallet connection across commands and provider events.
pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    state: Arc<Mutex<SessionState>>,
    config: SessionConfig,
    forwarder: Option<JoinHandle<()>>,
}

impl WalletSession {
    /// Create a session around an injected provider handle.
    pub fn new(provider: Arc<dyn WalletProvider>, config: SessionConfig) -> Self {
        Self {
            provider: Some(provider),
            state: Arc::new(Mutex::new(SessionState::default())),
            config,
            forwarder: None,
        }
    }

    /// Create a session with no provider, as when no wallet is injected.
    ///
    /// Every command on a detached session is a no-op that records the
    /// "no wallet detected" notice.
    pub fn detached(config: SessionConfig) -> Self {
        Self {
            provider: None,
            state: Arc::new(Mutex::new(SessionState::default())),
            config,
            forwarder: None,
        }
    }

    /// Subscribe to provider events and spawn the forwarding task.
    ///
    /// Returns early when the session has no provider; nothing is acquired
    /// on that path, so there is nothing to release either.
    pub fn start(&mut self) {
        let Some(provider) = self.provider.clone() else {
            warn!("no wallet provider injected; session commands will be inert");
            return;
        };
        let mut events = provider.subscribe();
        let state = Arc::clone(&self.state);
        self.forwarder = Some(tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => apply_event(&state, event).await,
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        warn!("dropped {} provider events", missed);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }));
    }

    /// Release the event subscription. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.forwarder.take() {
            task.abort();
            info!("wallet session event subscription released");
        }
    }

    /// Read-only snapshot of the current session state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Apply a single provider event.
    ///
    /// The forwarding task uses the same path; hosts that own their event
    /// loop can deliver events directly instead of calling `start()`.
    pub async fn apply_event(&self, event: ProviderEvent) {
        apply_event(&self.state, event).await;
    }

    /// Request account access and record the first granted account, then
    /// run chain-sync and, if a query address is pending, a balance fetch.
    pub async fn connect(&self) {
        let Some(provider) = self.provider.clone() else {
            self.note_no_provider().await;
            return;
        };
        if let Err(e) = self.try_connect(&provider).await {
            warn!("wallet connect failed: {}", e);
            self.state.lock().await.set_status(e.to_string());
        }
    }

    /// Drop the connection and all state derived from it.
    pub async fn disconnect(&self) {
        let mut state = self.state.lock().await;
        mark_disconnected(&mut state);
        info!("wallet session disconnected");
    }

    /// Store the address for the next balance lookup.
    pub async fn set_query_address(&self, address: impl Into<String>) {
        self.state.lock().await.set_query_address(address.into());
    }

    /// Fetch the balance of the pending query address at the configured
    /// block tag and record it as a whole-ether decimal string.
    pub async fn fetch_balance(&self) {
        let query = self.state.lock().await.query_address().to_string();
        if query.is_empty() {
            let mut state = self.state.lock().await;
            state.set_status(SessionError::EmptyQueryAddress.to_string());
            return;
        }
        let Some(provider) = self.provider.clone() else {
            self.note_no_provider().await;
            return;
        };
        match self.try_fetch_balance(&provider, &query).await {
            Ok(ether) => {
                info!("balance of {} is {} ETH", query, ether);
                self.state.lock().await.set_balance(Some(ether));
            }
            Err(e @ SessionError::InvalidAddress(_)) => {
                warn!("rejected balance query: {}", e);
                self.state.lock().await.set_status(e.to_string());
            }
            Err(e) => {
                warn!("balance fetch failed: {}", e);
                self.state
                    .lock()
                    .await
                    .set_status(format!("Error fetching balance: {}", e));
            }
        }
    }

    async fn try_connect(&self, provider: &Arc<dyn WalletProvider>) -> Result<(), SessionError> {
        let value = provider.request(ProviderRequest::RequestAccounts).await?;
        let accounts: Vec<String> = serde_json::from_value(value)
            .map_err(|e| ProviderError::MalformedResponse(format!("account list: {}", e)))?;
        let first = accounts
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::RequestFailed("provider returned no accounts".to_string()))?
            .to_lowercase();
        info!("wallet connected as {}", first);
        self.state.lock().await.set_connected_address(Some(first));

        if let Err(e) = self.sync_chain(provider).await {
            warn!("chain sync failed: {}", e);
            self.state
                .lock()
                .await
                .set_status(format!("Error fetching chainId: {}", e));
        }

        let pending = !self.state.lock().await.query_address().is_empty();
        if pending {
            self.fetch_balance().await;
        }
        Ok(())
    }

    async fn sync_chain(&self, provider: &Arc<dyn WalletProvider>) -> Result<(), SessionError> {
        let value = provider.request(ProviderRequest::ChainId).await?;
        let raw = value.as_str().ok_or_else(|| {
            ProviderError::MalformedResponse(format!("chain id is not a string: {}", value))
        })?;
        let chain_id = crate::network::parse_chain_id(raw)?;
        let mut state = self.state.lock().await;
        apply_chain(&mut state, chain_id, false);
        Ok(())
    }

    async fn try_fetch_balance(
        &self,
        provider: &Arc<dyn WalletProvider>,
        query: &str,
    ) -> Result<String, SessionError> {
        let address = parse_eth_address(query)?;
        let value = provider
            .request(ProviderRequest::GetBalance {
                address: address.to_string(),
                block_tag: self.config.block_tag.clone(),
            })
            .await?;
        let raw = value.as_str().ok_or_else(|| {
            ProviderError::MalformedResponse(format!("balance is not a string: {}", value))
        })?;
        let wei = parse_wei(raw)?;
        Ok(format_wei_as_ether(wei))
    }

    async fn note_no_provider(&self) {
        warn!("command ignored: {}", NO_WALLET_NOTICE);
        self.state
            .lock()
            .await
            .set_status(ProviderError::Unavailable.to_string());
    }
}

impl Drop for WalletSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
