//! Wei/ether conversion
//!
//! Parses the hex wei quantities returned by `eth_getBalance` and renders
//! them as whole-ether decimal strings for display, with trailing zeros
//! trimmed (1000000000000000000 wei -> "1.0").

use alloy_primitives::{U256, utils::format_ether};

use crate::error::ProviderError;

/// Parse a wei quantity from the provider (hex with `0x` prefix, or decimal).
pub fn parse_wei(raw: &str) -> Result<U256, ProviderError> {
    let trimmed = raw.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    U256::from_str_radix(digits, radix)
        .map_err(|_| ProviderError::MalformedResponse(format!("invalid wei quantity: {}", raw)))
}

/// Render a wei amount as a whole-ether decimal string.
///
/// `format_ether` always emits all 18 fractional digits; trim the trailing
/// zeros but keep at least one digit after the point.
pub fn format_wei_as_ether(wei: U256) -> String {
    let formatted = format_ether(wei);
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ETHER_WEI: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn one_ether_formats_as_one_point_zero() {
        assert_eq!(format_wei_as_ether(U256::from(ONE_ETHER_WEI)), "1.0");
    }

    #[test]
    fn fractional_amounts_keep_significant_digits() {
        assert_eq!(
            format_wei_as_ether(U256::from(1_500_000_000_000_000_000u128)),
            "1.5"
        );
        assert_eq!(format_wei_as_ether(U256::from(1u8)), "0.000000000000000001");
    }

    #[test]
    fn zero_formats_as_zero_point_zero() {
        assert_eq!(format_wei_as_ether(U256::ZERO), "0.0");
    }

    #[test]
    fn parses_hex_wei_quantities() {
        assert_eq!(
            parse_wei("0xde0b6b3a7640000").unwrap(),
            U256::from(ONE_ETHER_WEI)
        );
        assert_eq!(parse_wei("0x0").unwrap(), U256::ZERO);
    }

    #[test]
    fn parses_decimal_wei_quantities() {
        assert_eq!(
            parse_wei("1000000000000000000").unwrap(),
            U256::from(ONE_ETHER_WEI)
        );
    }

    #[test]
    fn rejects_malformed_quantities() {
        assert!(parse_wei("").is_err());
        assert!(parse_wei("0x").is_err());
        assert!(parse_wei("lots").is_err());
    }
}
