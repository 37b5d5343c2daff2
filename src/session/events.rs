//! Provider event application
//!
//! Translates asynchronously delivered provider events into state
//! transitions. Events are applied in arrival order; a stale update simply
//! overwrites state (last-write-wins).

use log::{info, warn};
use tokio::sync::Mutex;

use crate::network::{parse_chain_id, resolve};
use crate::provider::ProviderEvent;
use crate::session::state::SessionState;
use crate::session::wallet::{DISCONNECTED_NOTICE, UNSUPPORTED_NETWORK_NOTICE};

pub(crate) async fn apply_event(state: &Mutex<SessionState>, event: ProviderEvent) {
    match event {
        ProviderEvent::Connect { chain_id_hex } => {
            // informational only; chain state follows via chainChanged
            info!("provider reported connect on chain {}", chain_id_hex);
        }
        ProviderEvent::Disconnect => {
            info!("provider reported disconnect");
            let mut state = state.lock().await;
            mark_disconnected(&mut state);
        }
        ProviderEvent::ChainChanged(raw) => match parse_chain_id(&raw) {
            Ok(chain_id) => {
                let mut state = state.lock().await;
                apply_chain(&mut state, chain_id, true);
            }
            Err(e) => {
                warn!("unparseable chain-changed payload {:?}: {}", raw, e);
                let mut state = state.lock().await;
                state.set_status(format!("Error fetching chainId: {}", e));
            }
        },
        ProviderEvent::AccountsChanged(accounts) => {
            let mut state = state.lock().await;
            match accounts.into_iter().next() {
                Some(first) => {
                    let first = first.to_lowercase();
                    info!("active account changed to {}", first);
                    state.set_connected_address(Some(first));
                }
                None => {
                    info!("wallet revoked account access");
                    mark_disconnected(&mut state);
                }
            }
        }
    }
}

/// Shared disconnect transition: used by the `disconnect()` command, the
/// provider `disconnect` event, and an empty `accountsChanged` list.
pub(crate) fn mark_disconnected(state: &mut SessionState) {
    state.clear_connection();
    state.set_status(DISCONNECTED_NOTICE);
}

/// Chain-sync: record the chain id, re-derive the network name, and warn
/// when the network is unsupported without blocking the connection.
/// `announce` posts the "Network changed" note on externally fired switches.
pub(crate) fn apply_chain(state: &mut SessionState, chain_id: u64, announce: bool) {
    let network = resolve(chain_id);
    state.set_chain(chain_id);
    info!("active chain is {} ({})", chain_id, network.name);
    if !network.supported {
        warn!("chain {} is not a supported network", chain_id);
        state.set_status(UNSUPPORTED_NETWORK_NOTICE);
    } else if announce {
        state.set_status(format!("Network changed to {}", network.name));
    }
}
