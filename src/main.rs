//! Wallet Session Demo - Entry Point
//!
//! Wires a simulated wallet provider into a session and walks the full
//! command surface: connect, balance lookup, a chain switch fired by the
//! provider, and disconnect. The real browser front end is out of scope;
//! this binary exists to exercise the session end to end.

use std::sync::Arc;
use std::time::Duration;

use log::info;

use wallet_session::{SessionConfig, SimulatedProvider, WalletSession};

const DEMO_ACCOUNT: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
const DEMO_BALANCE_WEI: u128 = 1_500_000_000_000_000_000; // 1.5 ETH

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching wallet session demo...");

    let config = SessionConfig::load();
    let provider = Arc::new(SimulatedProvider::new(11155111, config.event_buffer));
    provider.add_account(DEMO_ACCOUNT).await;
    provider.set_balance(DEMO_ACCOUNT, DEMO_BALANCE_WEI).await;

    let mut session = WalletSession::new(provider.clone(), config);
    session.start();

    session.connect().await;
    session.set_query_address(DEMO_ACCOUNT).await;
    session.fetch_balance().await;
    log_snapshot(&session, "after connect and fetch").await;

    // The provider fires chainChanged; give the forwarding task a beat
    provider.set_chain(1).await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    log_snapshot(&session, "after chain switch").await;

    session.disconnect().await;
    log_snapshot(&session, "after disconnect").await;

    session.shutdown();
}

async fn log_snapshot(session: &WalletSession, label: &str) {
    let state = session.snapshot().await;
    info!(
        "{}: address={:?} chain={:?} network={} balance={:?} status={:?}",
        label,
        state.connected_address(),
        state.chain_id(),
        state.network_name(),
        state.balance(),
        state.status_message(),
    );
}
