// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use dgn_network_defaults::ChainId;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Wallet-connection state, owned by whoever drives the connect flow and
/// passed down explicitly instead of living in page-level globals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WalletSession {
    pub selected_account: Option<String>,
    pub chain_id: Option<ChainId>,
    pub connected: bool,
}

impl WalletSession {
    pub fn new() -> Self {
        WalletSession::default()
    }

    pub fn connect(&mut self, account: impl Into<String>, chain_id: ChainId) {
        self.selected_account = Some(account.into());
        self.chain_id = Some(chain_id);
        self.connected = true;
    }

    pub fn disconnect(&mut self) {
        *self = WalletSession::default();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn account(&self) -> Option<&str> {
        self.selected_account.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connecting_records_account_and_chain() {
        let mut session = WalletSession::new();
        assert!(!session.is_connected());
        assert_eq!(session.account(), None);

        session.connect("0x000000000000000000000000000000000000dEaD", 369);
        assert!(session.is_connected());
        assert_eq!(
            session.account(),
            Some("0x000000000000000000000000000000000000dEaD")
        );
        assert_eq!(session.chain_id, Some(369));
    }

    #[test]
    fn disconnecting_clears_everything() {
        let mut session = WalletSession::new();
        session.connect("0x000000000000000000000000000000000000dEaD", 369);

        session.disconnect();
        assert_eq!(session, WalletSession::default());
    }
}
