// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use dgn_contract_abi::InterfaceEntry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use url::Url;

/// Numeric chain identifier, e.g. 369 for PulseChain.
pub type ChainId = u64;

/// Checks that an address is `0x` followed by exactly 40 hex digits.
/// Mixed-case input is accepted; EIP-55 checksums are not enforced.
pub fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// One of the fixed deposit terms offered by the staking pools.
#[derive(
    Display,
    Copy,
    Clone,
    Debug,
    EnumString,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum StakingTerm {
    #[strum(serialize = "sevenDays")]
    SevenDays,
    #[strum(serialize = "tenDays")]
    TenDays,
    #[strum(serialize = "thirtyTwoDays")]
    ThirtyTwoDays,
    #[strum(serialize = "ninetyDays")]
    NinetyDays,
}

impl StakingTerm {
    pub const ALL: [StakingTerm; 4] = [
        StakingTerm::SevenDays,
        StakingTerm::TenDays,
        StakingTerm::ThirtyTwoDays,
        StakingTerm::NinetyDays,
    ];

    /// Lock-up length of this term in days.
    pub const fn days(&self) -> u32 {
        match self {
            StakingTerm::SevenDays => 7,
            StakingTerm::TenDays => 10,
            StakingTerm::ThirtyTwoDays => 32,
            StakingTerm::NinetyDays => 90,
        }
    }
}

/// Address of a deployed contract, with its interface when callers are
/// expected to dispatch calls against it directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContractDetails {
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<Vec<InterfaceEntry>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TokenDetails {
    pub symbol: String,
    pub address: String,
    pub abi: Vec<InterfaceEntry>,
}

/// The four staking pools of a network plus the interface shared by the whole
/// pool family. Distinct terms may point at the same deployed contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StakingPools {
    #[serde(rename = "sevenDays")]
    pub seven_days: ContractDetails,

    #[serde(rename = "tenDays")]
    pub ten_days: ContractDetails,

    #[serde(rename = "thirtyTwoDays")]
    pub thirty_two_days: ContractDetails,

    #[serde(rename = "ninetyDays")]
    pub ninety_days: ContractDetails,

    pub abi: Vec<InterfaceEntry>,
}

impl StakingPools {
    pub fn pool(&self, term: StakingTerm) -> &ContractDetails {
        match term {
            StakingTerm::SevenDays => &self.seven_days,
            StakingTerm::TenDays => &self.ten_days,
            StakingTerm::ThirtyTwoDays => &self.thirty_two_days,
            StakingTerm::NinetyDays => &self.ninety_days,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StakingTerm, &ContractDetails)> {
        StakingTerm::ALL.into_iter().map(|term| (term, self.pool(term)))
    }
}

/// Everything the front end needs to know about one supported network.
///
/// Field names are spelled the way the original web config spells them
/// (`STACKING`, `TOKEN`, camelCase pool terms) so the serialised form matches
/// the payload the deployed site ships.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkDetails {
    pub network_name: String,
    pub explorer_url: String,

    #[serde(rename = "STACKING")]
    pub staking: StakingPools,

    #[serde(rename = "TOKEN")]
    pub token: TokenDetails,
}

impl NetworkDetails {
    /// The block-explorer base URL in parsed form.
    pub fn explorer(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.explorer_url)
    }

    /// Returns the first structural problem with this descriptor, if any.
    pub fn find_issue(&self) -> Option<String> {
        if let Err(err) = self.explorer() {
            return Some(format!(
                "explorer url '{}' is malformed: {err}",
                self.explorer_url
            ));
        }
        self.labelled_addresses()
            .into_iter()
            .find_map(|(label, address)| {
                if is_valid_address(address) {
                    None
                } else {
                    Some(format!(
                        "{label} address '{address}' is not a 0x-prefixed 20-byte hex value"
                    ))
                }
            })
    }

    fn labelled_addresses(&self) -> Vec<(String, &str)> {
        let mut addresses = vec![(
            format!("{} token", self.token.symbol),
            self.token.address.as_str(),
        )];
        for (term, pool) in self.staking.iter() {
            addresses.push((format!("{term} staking pool"), pool.address.as_str()));
        }
        addresses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn staking_terms_render_and_parse_as_camel_case() {
        for term in StakingTerm::ALL {
            assert_eq!(StakingTerm::from_str(&term.to_string()).unwrap(), term);
        }
        assert_eq!(StakingTerm::ThirtyTwoDays.to_string(), "thirtyTwoDays");
        assert!(StakingTerm::from_str("midnight").is_err());
        assert!(StakingTerm::from_str("SevenDays").is_err());
    }

    #[test]
    fn term_lengths_match_their_names() {
        assert_eq!(StakingTerm::SevenDays.days(), 7);
        assert_eq!(StakingTerm::TenDays.days(), 10);
        assert_eq!(StakingTerm::ThirtyTwoDays.days(), 32);
        assert_eq!(StakingTerm::NinetyDays.days(), 90);
    }

    #[test]
    fn address_format_check() {
        assert!(is_valid_address(
            "0xCE7324C632CC8Ebd20ec05bd706b87C5d657bBa7"
        ));
        assert!(is_valid_address(
            "0x0000000000000000000000000000000000000000"
        ));

        // no prefix
        assert!(!is_valid_address(
            "CE7324C632CC8Ebd20ec05bd706b87C5d657bBa7"
        ));
        // too short
        assert!(!is_valid_address("0xCE7324"));
        // too long
        assert!(!is_valid_address(
            "0xCE7324C632CC8Ebd20ec05bd706b87C5d657bBa700"
        ));
        // non-hex characters
        assert!(!is_valid_address(
            "0xZZ7324C632CC8Ebd20ec05bd706b87C5d657bBa7"
        ));
        assert!(!is_valid_address(""));
    }
}
