//! Chain-independent protocol constants.

use alloy_primitives::{Address, U256, address};

use crate::chain::ChainId;

/// Canonical Permit2 deployment.
pub const PERMIT2_ADDRESS: Address = address!("0x000000000022D473030F116dDEE9F6B43aC78BA3");
/// Permit2 on BitTorrent Chain.
pub const BTT_PERMIT2_ADDRESS: Address = address!("0x41846bd0E41dD42D80d00E99212040C871F40CB0");
/// Permit2 on Fantom.
pub const FTM_PERMIT2_ADDRESS: Address = address!("0x838c010F57889195C88f2097488e49B7ad04EcB1");
/// Permit2 on Horizen EON.
pub const EON_PERMIT2_ADDRESS: Address = address!("0xd119eF12fdC22756c8Ce4F03E463607742e3A59f");

/// Pseudo-address standing for the native asset.
pub const ETH_ADDRESS: Address = Address::ZERO;
/// The null address.
pub const ZERO_ADDRESS: Address = Address::ZERO;

/// Recipient placeholder the router resolves to `msg.sender`.
pub const SENDER_AS_RECIPIENT: Address = address!("0x0000000000000000000000000000000000000001");
/// Recipient placeholder the router resolves to itself.
pub const ROUTER_AS_RECIPIENT: Address = address!("0x0000000000000000000000000000000000000002");

/// Spender tag for the `OpenSea` conduit.
pub const OPENSEA_CONDUIT_SPENDER_ID: u8 = 0;
/// Spender tag for Sudoswap.
pub const SUDOSWAP_SPENDER_ID: u8 = 1;

/// `2^255`: amount meaning "the router's entire balance".
pub const CONTRACT_BALANCE: U256 = U256::from_limbs([0, 0, 0, 0x8000_0000_0000_0000]);
/// `2^256 - 1`.
pub const MAX_UINT256: U256 = U256::MAX;
/// `2^160 - 1`, the Permit2 allowance ceiling.
pub const MAX_UINT160: U256 = U256::from_limbs([u64::MAX, u64::MAX, 0xFFFF_FFFF, 0]);

/// Permit2 address to approve on `chain_id`.
///
/// A few chains carry their own Permit2 deployment; everything else uses
/// [`PERMIT2_ADDRESS`].
#[must_use]
pub const fn permit2_address(chain_id: ChainId) -> Address {
    match chain_id {
        ChainId::BIT_TORRENT_MAINNET => BTT_PERMIT2_ADDRESS,
        ChainId::FANTOM => FTM_PERMIT2_ADDRESS,
        ChainId::EON => EON_PERMIT2_ADDRESS,
        _ => PERMIT2_ADDRESS,
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::aliases::U160;

    use super::*;

    fn two() -> U256 {
        U256::from(2u8)
    }

    #[test]
    fn numeric_sentinels_are_exact() {
        assert_eq!(MAX_UINT256, U256::MAX);
        assert!(MAX_UINT256.checked_add(U256::from(1u8)).is_none());
        assert_eq!(MAX_UINT256 - (CONTRACT_BALANCE - U256::from(1u8)), CONTRACT_BALANCE);
        assert_eq!(MAX_UINT160, two().pow(U256::from(160u16)) - U256::from(1u8));
        assert_eq!(MAX_UINT160, U256::from(U160::MAX));
        assert_eq!(CONTRACT_BALANCE, two().pow(U256::from(255u16)));
        assert_eq!(CONTRACT_BALANCE, U256::from(1u8) << 255usize);
    }

    #[test]
    fn recipient_sentinels() {
        assert_eq!(SENDER_AS_RECIPIENT.0[19], 1);
        assert_eq!(ROUTER_AS_RECIPIENT.0[19], 2);
        assert!(SENDER_AS_RECIPIENT.0[..19].iter().all(|b| *b == 0));
        assert_eq!(ETH_ADDRESS, ZERO_ADDRESS);
        assert!(ZERO_ADDRESS.is_zero());
    }

    #[test]
    fn permit2_variants_by_chain() {
        assert_eq!(permit2_address(ChainId::MAINNET), PERMIT2_ADDRESS);
        assert_eq!(permit2_address(ChainId::new(31337)), PERMIT2_ADDRESS);
        assert_eq!(permit2_address(ChainId::BIT_TORRENT_MAINNET), BTT_PERMIT2_ADDRESS);
        assert_eq!(permit2_address(ChainId::FANTOM), FTM_PERMIT2_ADDRESS);
        assert_eq!(permit2_address(ChainId::EON), EON_PERMIT2_ADDRESS);
    }

    #[test]
    fn spender_ids_are_distinct() {
        assert_ne!(OPENSEA_CONDUIT_SPENDER_ID, SUDOSWAP_SPENDER_ID);
    }
}
