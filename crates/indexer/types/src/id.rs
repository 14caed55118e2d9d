//! Entity identifier formatting.
//!
//! Identifiers are `0x`-prefixed lowercase hex strings of the underlying on-chain value.

use alloc::{format, string::String};
use alloy_primitives::{Address, B256};

/// The identifier of a [`crate::Gateway`] or [`crate::Token`] record.
pub fn address_id(address: &Address) -> String {
    format!("{address:#x}")
}

/// The identifier of the [`crate::TokenGatewayJoin`] pairing `gateway_id` with `token_id`.
pub fn join_id(gateway_id: &str, token_id: &str) -> String {
    format!("{gateway_id}{token_id}")
}

/// The identifier of a record keyed by the transaction that produced it.
pub fn tx_hash_id(hash: &B256) -> String {
    format!("{hash:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn test_address_id_is_lowercase() {
        let gateway = address!("0x09e9222E96E7B4AE2a407B98d48e330053351EEe");
        assert_eq!(address_id(&gateway), "0x09e9222e96e7b4ae2a407b98d48e330053351eee");
    }

    #[test]
    fn test_join_id() {
        let gateway = address_id(&Address::repeat_byte(0x11));
        let token = address_id(&Address::repeat_byte(0x22));
        assert_eq!(
            join_id(&gateway, &token),
            "0x11111111111111111111111111111111111111110x2222222222222222222222222222222222222222"
        );
    }

    #[test]
    fn test_tx_hash_id() {
        let hash = b256!("0x00000000000000000000000000000000000000000000000000000000000000ab");
        assert_eq!(
            tx_hash_id(&hash),
            "0x00000000000000000000000000000000000000000000000000000000000000ab"
        );
    }
}
