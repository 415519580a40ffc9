// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub const NETWORK_NAME: &str = "PulseChain";
pub const CHAIN_ID: u64 = 369;

pub const EXPLORER_URL: &str = "https://pulsechain.com/";
pub const EXPLORER_API: &str = "https://scan.pulsechain.com/api";
pub const RPC_URL: &str = "https://rpc.pulsechain.com";

pub const TOKEN_SYMBOL: &str = "DGN";
pub const TOKEN_CONTRACT_ADDRESS: &str = "0x0b25d5B1b55Dc0689EE5Af82C5d06e6a683777C0";

// two pool contracts back the four advertised terms; the pairing below is
// what is actually deployed, not a typo
pub const SEVEN_DAY_POOL_ADDRESS: &str = "0xCE7324C632CC8Ebd20ec05bd706b87C5d657bBa7";
pub const TEN_DAY_POOL_ADDRESS: &str = "0x06aAB5aeDf01DA781707e1ec3770d1ebca7F9aF7";
pub const THIRTY_TWO_DAY_POOL_ADDRESS: &str = "0x06aAB5aeDf01DA781707e1ec3770d1ebca7F9aF7";
pub const NINETY_DAY_POOL_ADDRESS: &str = "0xCE7324C632CC8Ebd20ec05bd706b87C5d657bBa7";

/// Interface shared by every staking pool, verbatim from the verified
/// explorer listing.
pub const STAKING_POOL_ABI_JSON: &str = include_str!("abis/staking_pool.json");

/// Interface of the DGN token, verbatim from the verified explorer listing.
pub const DGN_TOKEN_ABI_JSON: &str = include_str!("abis/dgn_token.json");

#[cfg(feature = "network")]
use crate::network::{ContractDetails, NetworkDetails, StakingPools, TokenDetails};
#[cfg(feature = "network")]
use crate::registry::RegistryError;
#[cfg(feature = "network")]
use dgn_contract_abi::InterfaceEntry;

#[cfg(feature = "network")]
pub fn staking_pool_abi() -> Result<Vec<InterfaceEntry>, RegistryError> {
    parse_abi("staking pool", STAKING_POOL_ABI_JSON)
}

#[cfg(feature = "network")]
pub fn dgn_token_abi() -> Result<Vec<InterfaceEntry>, RegistryError> {
    parse_abi("token", DGN_TOKEN_ABI_JSON)
}

#[cfg(feature = "network")]
fn parse_abi(which: &str, raw: &str) -> Result<Vec<InterfaceEntry>, RegistryError> {
    serde_json::from_str(raw).map_err(|source| RegistryError::MalformedDescriptor {
        chain_id: CHAIN_ID,
        reason: format!("embedded {which} interface does not parse: {source}"),
    })
}

#[cfg(feature = "network")]
pub fn network_details() -> Result<NetworkDetails, RegistryError> {
    Ok(NetworkDetails {
        network_name: NETWORK_NAME.to_string(),
        explorer_url: EXPLORER_URL.to_string(),
        staking: StakingPools {
            seven_days: pool(SEVEN_DAY_POOL_ADDRESS),
            ten_days: pool(TEN_DAY_POOL_ADDRESS),
            thirty_two_days: pool(THIRTY_TWO_DAY_POOL_ADDRESS),
            ninety_days: pool(NINETY_DAY_POOL_ADDRESS),
            abi: staking_pool_abi()?,
        },
        token: TokenDetails {
            symbol: TOKEN_SYMBOL.to_string(),
            address: TOKEN_CONTRACT_ADDRESS.to_string(),
            abi: dgn_token_abi()?,
        },
    })
}

#[cfg(feature = "network")]
fn pool(address: &str) -> ContractDetails {
    ContractDetails {
        address: address.to_string(),
        abi: None,
    }
}
