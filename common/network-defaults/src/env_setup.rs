// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::network::NetworkDetails;
use crate::registry::RegistryError;
use crate::{mainnet, var_names};
use std::path::Path;
use std::{env, str::FromStr};

fn set_var_conditionally(var: &str, value: &str) {
    if env::var(var).is_err() {
        log::debug!("setting {var}={value}");
        env::set_var(var, value);
    }
}

/// Loads the given dotenv file (when provided) and then fills in the mainnet
/// defaults for every variable that is still unset. Variables that are already
/// present in the environment always win.
pub fn setup_env<P: AsRef<Path>>(config_env_file: Option<P>) {
    if let Some(file) = config_env_file {
        let file = file.as_ref();
        if let Err(err) = dotenvy::from_path(file) {
            log::warn!("failed to load environment from {}: {err}", file.display());
        }
    }

    set_var_conditionally(var_names::NETWORK_NAME, mainnet::NETWORK_NAME);
    set_var_conditionally(var_names::CHAIN_ID, &mainnet::CHAIN_ID.to_string());
    set_var_conditionally(var_names::EXPLORER_URL, mainnet::EXPLORER_URL);
    set_var_conditionally(var_names::EXPLORER_API, mainnet::EXPLORER_API);
    set_var_conditionally(var_names::RPC_URL, mainnet::RPC_URL);
    set_var_conditionally(var_names::TOKEN_SYMBOL, mainnet::TOKEN_SYMBOL);
    set_var_conditionally(
        var_names::TOKEN_CONTRACT_ADDRESS,
        mainnet::TOKEN_CONTRACT_ADDRESS,
    );
    set_var_conditionally(
        var_names::SEVEN_DAY_POOL_ADDRESS,
        mainnet::SEVEN_DAY_POOL_ADDRESS,
    );
    set_var_conditionally(var_names::TEN_DAY_POOL_ADDRESS, mainnet::TEN_DAY_POOL_ADDRESS);
    set_var_conditionally(
        var_names::THIRTY_TWO_DAY_POOL_ADDRESS,
        mainnet::THIRTY_TWO_DAY_POOL_ADDRESS,
    );
    set_var_conditionally(
        var_names::NINETY_DAY_POOL_ADDRESS,
        mainnet::NINETY_DAY_POOL_ADDRESS,
    );
}

/// The chain id to operate on: the `CHAIN_ID` environment variable when it is
/// set and parses, the mainnet id otherwise.
pub fn chain_id_from_env() -> u64 {
    env::var(var_names::CHAIN_ID)
        .ok()
        .and_then(|raw| u64::from_str(&raw).ok())
        .unwrap_or(mainnet::CHAIN_ID)
}

fn var_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

impl NetworkDetails {
    /// The mainnet descriptor with per-field overrides taken from the
    /// environment. Overridden addresses go through the same structural checks
    /// as anything else handed to the registry.
    pub fn new_from_env() -> Result<NetworkDetails, RegistryError> {
        let mut details = mainnet::network_details()?;

        details.network_name = var_or(var_names::NETWORK_NAME, mainnet::NETWORK_NAME);
        details.explorer_url = var_or(var_names::EXPLORER_URL, mainnet::EXPLORER_URL);
        details.token.symbol = var_or(var_names::TOKEN_SYMBOL, mainnet::TOKEN_SYMBOL);
        details.token.address = var_or(
            var_names::TOKEN_CONTRACT_ADDRESS,
            mainnet::TOKEN_CONTRACT_ADDRESS,
        );
        details.staking.seven_days.address = var_or(
            var_names::SEVEN_DAY_POOL_ADDRESS,
            mainnet::SEVEN_DAY_POOL_ADDRESS,
        );
        details.staking.ten_days.address =
            var_or(var_names::TEN_DAY_POOL_ADDRESS, mainnet::TEN_DAY_POOL_ADDRESS);
        details.staking.thirty_two_days.address = var_or(
            var_names::THIRTY_TWO_DAY_POOL_ADDRESS,
            mainnet::THIRTY_TWO_DAY_POOL_ADDRESS,
        );
        details.staking.ninety_days.address = var_or(
            var_names::NINETY_DAY_POOL_ADDRESS,
            mainnet::NINETY_DAY_POOL_ADDRESS,
        );

        if let Some(reason) = details.find_issue() {
            return Err(RegistryError::MalformedDescriptor {
                chain_id: chain_id_from_env(),
                reason,
            });
        }
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_only_applied_to_unset_variables() {
        env::set_var(var_names::NETWORK_NAME, "LocalFork");
        setup_env(None::<&str>);

        assert_eq!(env::var(var_names::NETWORK_NAME).unwrap(), "LocalFork");
        assert_eq!(
            env::var(var_names::RPC_URL).unwrap(),
            "https://rpc.pulsechain.com"
        );

        env::remove_var(var_names::NETWORK_NAME);
    }

    #[test]
    fn dotenv_files_are_loaded_before_the_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "EXPLORER_API=https://example.com/api").unwrap();

        setup_env(Some(file.path()));
        assert_eq!(
            env::var(var_names::EXPLORER_API).unwrap(),
            "https://example.com/api"
        );

        env::remove_var(var_names::EXPLORER_API);
    }

    // env::set_var is process-global, so everything touching the override
    // variables lives in this single test
    #[test]
    fn env_overrides_are_picked_up_and_validated() {
        let override_address = "0x000000000000000000000000000000000000dEaD";
        env::set_var(var_names::TOKEN_CONTRACT_ADDRESS, override_address);

        let details = NetworkDetails::new_from_env().unwrap();
        assert_eq!(details.token.address, override_address);
        // untouched fields keep their mainnet values
        assert_eq!(details.token.symbol, mainnet::TOKEN_SYMBOL);

        env::set_var(var_names::TOKEN_CONTRACT_ADDRESS, "definitely-not-hex");
        let err = NetworkDetails::new_from_env().unwrap_err();
        assert!(matches!(err, RegistryError::MalformedDescriptor { .. }));

        env::remove_var(var_names::TOKEN_CONTRACT_ADDRESS);
    }
}
