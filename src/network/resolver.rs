//! Module `resolver`
//!
//! Pure classification of chain identifiers. Accepts the hex form wallets
//! emit (`0x1`, `0xaa36a7`) as well as plain decimal, normalizes to a
//! decimal id, and maps it to a network name plus a supported flag.
//! Deterministic, no I/O.

use std::fmt;

use crate::error::ProviderError;

/// Ethereum Mainnet chain id
pub const MAINNET_CHAIN_ID: u64 = 1;
/// Sepolia Testnet chain id
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

/// Human-readable name of the active network.
///
/// `Unknown` is the initial value before any chain id has been observed;
/// `Unsupported` covers every chain id the session does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkName {
    EthereumMainnet,
    SepoliaTestnet,
    Unsupported,
    #[default]
    Unknown,
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkName::EthereumMainnet => write!(f, "Ethereum Mainnet"),
            NetworkName::SepoliaTestnet => write!(f, "Sepolia Testnet"),
            NetworkName::Unsupported => write!(f, "Unsupported Network"),
            NetworkName::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Result of classifying a chain id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    pub name: NetworkName,
    pub supported: bool,
}

/// Classify a decimal chain id into a network name and supported flag.
pub fn resolve(chain_id: u64) -> NetworkInfo {
    match chain_id {
        MAINNET_CHAIN_ID => NetworkInfo {
            name: NetworkName::EthereumMainnet,
            supported: true,
        },
        SEPOLIA_CHAIN_ID => NetworkInfo {
            name: NetworkName::SepoliaTestnet,
            supported: true,
        },
        _ => NetworkInfo {
            name: NetworkName::Unsupported,
            supported: false,
        },
    }
}

/// Parse a chain id delivered by the provider.
///
/// Wallets emit `0x`-prefixed hex strings; decimal input is accepted too.
pub fn parse_chain_id(raw: &str) -> Result<u64, ProviderError> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| ProviderError::MalformedResponse(format!("invalid chain id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_is_supported() {
        let info = resolve(1);
        assert_eq!(info.name, NetworkName::EthereumMainnet);
        assert!(info.supported);
    }

    #[test]
    fn sepolia_is_supported() {
        let info = resolve(11155111);
        assert_eq!(info.name, NetworkName::SepoliaTestnet);
        assert!(info.supported);
    }

    #[test]
    fn everything_else_is_unsupported() {
        for chain_id in [0, 2, 5, 137, 42161, u64::MAX] {
            let info = resolve(chain_id);
            assert_eq!(info.name, NetworkName::Unsupported);
            assert!(!info.supported);
        }
    }

    #[test]
    fn parses_hex_chain_ids() {
        assert_eq!(parse_chain_id("0x1").unwrap(), 1);
        assert_eq!(parse_chain_id("0xaa36a7").unwrap(), 11155111);
        assert_eq!(parse_chain_id("0XAA36A7").unwrap(), 11155111);
    }

    #[test]
    fn parses_decimal_chain_ids() {
        assert_eq!(parse_chain_id("1").unwrap(), 1);
        assert_eq!(parse_chain_id(" 11155111 ").unwrap(), 11155111);
    }

    #[test]
    fn rejects_garbage_chain_ids() {
        assert!(parse_chain_id("").is_err());
        assert!(parse_chain_id("0x").is_err());
        assert!(parse_chain_id("mainnet").is_err());
        assert!(parse_chain_id("-5").is_err());
    }

    #[test]
    fn network_labels_match_the_ui() {
        assert_eq!(NetworkName::EthereumMainnet.to_string(), "Ethereum Mainnet");
        assert_eq!(NetworkName::SepoliaTestnet.to_string(), "Sepolia Testnet");
        assert_eq!(NetworkName::Unsupported.to_string(), "Unsupported Network");
    }
}
