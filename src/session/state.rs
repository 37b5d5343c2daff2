//! Module `state`
//!
//! Defines the `SessionState` record owned by the wallet session. The view
//! layer only ever sees clones of it; mutation happens through the session
//! commands and provider event handlers.

use crate::network::{NetworkName, resolve};

/// Snapshot of the wallet session.
///
/// `network_name` is derived from `chain_id` and never set independently;
/// `balance` reflects the `query_address` of the last successful fetch and
/// may be stale if the query address changed afterwards.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    connected_address: Option<String>,
    chain_id: Option<u64>,
    network_name: NetworkName,
    balance: Option<String>,
    query_address: String,
    status_message: Option<String>,
}

impl SessionState {
    /// Clears the connection, dropping the address and all derived state.
    ///
    /// The query address and status message survive a disconnect.
    pub fn clear_connection(&mut self) {
        self.connected_address = None;
        self.chain_id = None;
        self.network_name = NetworkName::Unknown;
        self.balance = None;
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns whether an account is currently connected.
    pub fn is_connected(&self) -> bool {
        self.connected_address.is_some()
    }

    /// Lowercase 0x-prefixed address of the connected account, if any.
    pub fn connected_address(&self) -> Option<&str> {
        self.connected_address.as_deref()
    }

    /// Decimal chain id of the active network, if known.
    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Network name derived from the chain id.
    pub fn network_name(&self) -> NetworkName {
        self.network_name
    }

    /// Whole-ether balance string from the last successful fetch.
    pub fn balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    /// User-entered address pending a balance lookup.
    pub fn query_address(&self) -> &str {
        &self.query_address
    }

    /// Last informational or error message shown to the user.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    // --------------------
    // Setter methods
    // --------------------

    /// Sets the connected account address.
    pub fn set_connected_address(&mut self, address: Option<String>) {
        self.connected_address = address;
    }

    /// Sets the active chain id, re-deriving the network name.
    pub fn set_chain(&mut self, chain_id: u64) {
        self.chain_id = Some(chain_id);
        self.network_name = resolve(chain_id).name;
    }

    /// Sets the last fetched balance.
    pub fn set_balance(&mut self, balance: Option<String>) {
        self.balance = balance;
    }

    /// Sets the pending query address.
    pub fn set_query_address(&mut self, address: String) {
        self.query_address = address;
    }

    /// Sets the status message shown to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_unknown() {
        let state = SessionState::default();
        assert!(!state.is_connected());
        assert_eq!(state.chain_id(), None);
        assert_eq!(state.network_name(), NetworkName::Unknown);
        assert_eq!(state.balance(), None);
        assert_eq!(state.query_address(), "");
        assert_eq!(state.status_message(), None);
    }

    #[test]
    fn chain_id_drives_the_network_name() {
        let mut state = SessionState::default();
        state.set_chain(1);
        assert_eq!(state.network_name(), NetworkName::EthereumMainnet);
        state.set_chain(999);
        assert_eq!(state.network_name(), NetworkName::Unsupported);
    }

    #[test]
    fn clearing_the_connection_drops_derived_state() {
        let mut state = SessionState::default();
        state.set_connected_address(Some("0xabc".to_string()));
        state.set_chain(11155111);
        state.set_balance(Some("1.0".to_string()));
        state.set_query_address("0xdef".to_string());

        state.clear_connection();

        assert!(!state.is_connected());
        assert_eq!(state.chain_id(), None);
        assert_eq!(state.network_name(), NetworkName::Unknown);
        assert_eq!(state.balance(), None);
        // the pending query survives
        assert_eq!(state.query_address(), "0xdef");
    }
}
