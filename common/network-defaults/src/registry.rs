// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::mainnet;
use crate::network::{ChainId, ContractDetails, NetworkDetails, StakingTerm, TokenDetails};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("network {chain_id} is not known to this registry")]
    UnknownNetwork { chain_id: ChainId },

    #[error("'{term}' is not a supported staking term")]
    UnknownPoolTerm { term: String },

    #[error("descriptor for network {chain_id} is malformed: {reason}")]
    MalformedDescriptor { chain_id: ChainId, reason: String },
}

/// The authoritative set of contracts the application may talk to, keyed by
/// chain id. Built once during startup and handed out by shared reference;
/// nothing mutates it afterwards, so no locking is involved.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContractRegistry {
    networks: HashMap<ChainId, NetworkDetails>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        ContractRegistry::default()
    }

    /// A registry pre-populated with the PulseChain deployment.
    pub fn mainnet() -> Result<Self, RegistryError> {
        let mut registry = ContractRegistry::new();
        registry.register(mainnet::CHAIN_ID, mainnet::network_details()?)?;
        Ok(registry)
    }

    /// Inserts or replaces the descriptor for a network; the last write for a
    /// given chain id wins. The descriptor is checked up front and a malformed
    /// one is rejected without touching the existing entry.
    pub fn register(
        &mut self,
        chain_id: ChainId,
        details: NetworkDetails,
    ) -> Result<(), RegistryError> {
        if let Some(reason) = details.find_issue() {
            return Err(RegistryError::MalformedDescriptor { chain_id, reason });
        }
        self.networks.insert(chain_id, details);
        Ok(())
    }

    /// The full descriptor for a network. There is deliberately no fallback to
    /// a default network; callers have to handle the unknown-network case.
    pub fn lookup(&self, chain_id: ChainId) -> Result<&NetworkDetails, RegistryError> {
        self.networks
            .get(&chain_id)
            .ok_or(RegistryError::UnknownNetwork { chain_id })
    }

    /// The staking pool serving the given term, e.g. `"sevenDays"`, on the
    /// given network.
    pub fn resolve_pool(
        &self,
        chain_id: ChainId,
        term: &str,
    ) -> Result<&ContractDetails, RegistryError> {
        let details = self.lookup(chain_id)?;
        let term = StakingTerm::from_str(term).map_err(|_| RegistryError::UnknownPoolTerm {
            term: term.to_string(),
        })?;
        Ok(details.staking.pool(term))
    }

    pub fn resolve_token(&self, chain_id: ChainId) -> Result<&TokenDetails, RegistryError> {
        Ok(&self.lookup(chain_id)?.token)
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.networks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
