//! Module `types`
//!
//! Defines the requests the session issues to the wallet provider and the
//! events the provider fires back. Requests carry the JSON-RPC method name
//! and params in the shape injected wallets expect.

use serde_json::{Value, json};

/// A request submitted to the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRequest {
    /// `eth_requestAccounts` - ask for account access (may prompt the user)
    RequestAccounts,
    /// `eth_accounts` - list accounts already exposed to this session
    GetAccounts,
    /// `eth_chainId` - read the active chain id (hex string)
    ChainId,
    /// `eth_getBalance` - balance of `address` at `block_tag`
    GetBalance { address: String, block_tag: String },
}

impl ProviderRequest {
    /// JSON-RPC method name for this request.
    pub fn method(&self) -> &'static str {
        match self {
            ProviderRequest::RequestAccounts => "eth_requestAccounts",
            ProviderRequest::GetAccounts => "eth_accounts",
            ProviderRequest::ChainId => "eth_chainId",
            ProviderRequest::GetBalance { .. } => "eth_getBalance",
        }
    }

    /// JSON-RPC params for this request.
    pub fn params(&self) -> Value {
        match self {
            ProviderRequest::GetBalance { address, block_tag } => json!([address, block_tag]),
            _ => json!([]),
        }
    }
}

/// An event fired asynchronously by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// Provider established its upstream connection
    Connect { chain_id_hex: String },
    /// Provider lost its upstream connection
    Disconnect,
    /// Active chain switched; payload is the new chain id (hex string)
    ChainChanged(String),
    /// Exposed account list changed; empty means access was revoked
    AccountsChanged(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_methods_match_the_rpc_names() {
        assert_eq!(ProviderRequest::RequestAccounts.method(), "eth_requestAccounts");
        assert_eq!(ProviderRequest::GetAccounts.method(), "eth_accounts");
        assert_eq!(ProviderRequest::ChainId.method(), "eth_chainId");
    }

    #[test]
    fn balance_request_carries_address_and_block_tag() {
        let request = ProviderRequest::GetBalance {
            address: "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".to_string(),
            block_tag: "latest".to_string(),
        };
        assert_eq!(request.method(), "eth_getBalance");
        assert_eq!(
            request.params(),
            json!(["0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266", "latest"])
        );
    }

    #[test]
    fn parameterless_requests_send_empty_params() {
        assert_eq!(ProviderRequest::ChainId.params(), json!([]));
    }
}
