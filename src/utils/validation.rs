//! Input validation utilities
//!
//! Validates user-entered addresses before they reach the provider.

use alloy_primitives::Address;

use crate::error::SessionError;

/// Parse a user-entered Ethereum address.
///
/// Accepts any casing with or without the `0x` prefix; a malformed address
/// is rejected locally so the provider is never called with it.
pub fn parse_eth_address(input: &str) -> Result<Address, SessionError> {
    input
        .trim()
        .parse::<Address>()
        .map_err(|_| SessionError::InvalidAddress(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        assert!(parse_eth_address("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").is_ok());
        assert!(parse_eth_address("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266").is_ok());
        assert!(parse_eth_address("  0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266  ").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for input in ["", "0x123", "not-an-address", "0xzzzd6e51aad88f6f4ce6ab8827279cfffb92266"]
        {
            match parse_eth_address(input) {
                Err(SessionError::InvalidAddress(a)) => assert_eq!(a, input),
                other => panic!("expected InvalidAddress, got {:?}", other),
            }
        }
    }
}
