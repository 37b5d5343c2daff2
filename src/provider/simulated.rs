//! Simulated wallet provider
//!
//! An in-memory `WalletProvider` backed by a mutable account/chain/balance
//! table. Drives the demo binary and the integration tests; events are
//! fired on demand the way an injected wallet would fire them.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use serde_json::{Value, json};
use tokio::sync::{Mutex, broadcast};

use crate::error::ProviderError;
use crate::provider::types::{ProviderEvent, ProviderRequest};
use crate::provider::WalletProvider;

struct ProviderTable {
    accounts: Vec<String>,
    chain_id: u64,
    /// Wei balances keyed by lowercase address
    balances: HashMap<String, u128>,
    deny_account_access: bool,
    fail_requests: bool,
}

/// In-memory wallet provider for tests and the demo binary.
pub struct SimulatedProvider {
    table: Mutex<ProviderTable>,
    events: broadcast::Sender<ProviderEvent>,
}

impl SimulatedProvider {
    pub fn new(chain_id: u64, event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity);
        Self {
            table: Mutex::new(ProviderTable {
                accounts: Vec::new(),
                chain_id,
                balances: HashMap::new(),
                deny_account_access: false,
                fail_requests: false,
            }),
            events,
        }
    }

    /// Expose an account to the session.
    pub async fn add_account(&self, address: &str) {
        let mut table = self.table.lock().await;
        table.accounts.push(address.to_lowercase());
    }

    /// Seed the wei balance of an address.
    pub async fn set_balance(&self, address: &str, wei: u128) {
        let mut table = self.table.lock().await;
        table.balances.insert(address.to_lowercase(), wei);
    }

    /// Switch the active chain and fire the matching `chainChanged` event.
    pub async fn set_chain(&self, chain_id: u64) {
        {
            let mut table = self.table.lock().await;
            table.chain_id = chain_id;
        }
        self.emit(ProviderEvent::ChainChanged(format!("{:#x}", chain_id)));
    }

    /// Make the next `eth_requestAccounts` behave as a user denial.
    pub async fn deny_account_access(&self, deny: bool) {
        let mut table = self.table.lock().await;
        table.deny_account_access = deny;
    }

    /// Make every request fail, as a wallet in a broken state would.
    pub async fn fail_requests(&self, fail: bool) {
        let mut table = self.table.lock().await;
        table.fail_requests = fail;
    }

    pub fn emit_connect(&self, chain_id_hex: &str) {
        self.emit(ProviderEvent::Connect {
            chain_id_hex: chain_id_hex.to_string(),
        });
    }

    pub fn emit_disconnect(&self) {
        self.emit(ProviderEvent::Disconnect);
    }

    pub fn emit_accounts_changed(&self, accounts: Vec<String>) {
        self.emit(ProviderEvent::AccountsChanged(accounts));
    }

    fn emit(&self, event: ProviderEvent) {
        debug!("simulated provider firing {:?}", event);
        // send only errors when no receiver is subscribed
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl WalletProvider for SimulatedProvider {
    async fn request(&self, request: ProviderRequest) -> Result<Value, ProviderError> {
        let table = self.table.lock().await;
        debug!("simulated provider handling {}", request.method());

        if table.fail_requests {
            return Err(ProviderError::RequestFailed(format!(
                "{} unavailable",
                request.method()
            )));
        }

        match request {
            ProviderRequest::RequestAccounts => {
                if table.deny_account_access {
                    return Err(ProviderError::UserRejected(
                        "account access denied".to_string(),
                    ));
                }
                if table.accounts.is_empty() {
                    return Err(ProviderError::RequestFailed(
                        "no accounts configured".to_string(),
                    ));
                }
                Ok(json!(table.accounts))
            }
            ProviderRequest::GetAccounts => Ok(json!(table.accounts)),
            ProviderRequest::ChainId => Ok(json!(format!("{:#x}", table.chain_id))),
            ProviderRequest::GetBalance { address, .. } => {
                let wei = table
                    .balances
                    .get(&address.to_lowercase())
                    .copied()
                    .unwrap_or(0);
                Ok(json!(format!("{:#x}", wei)))
            }
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}
