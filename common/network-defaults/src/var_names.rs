// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Environment variable names understood by the env bootstrap. They mirror the
//! constant names in [`crate::mainnet`] so the values in `envs/mainnet.env`
//! stay in sync with the code (see `build.rs`).

pub const NETWORK_NAME: &str = "NETWORK_NAME";
pub const CHAIN_ID: &str = "CHAIN_ID";
pub const EXPLORER_URL: &str = "EXPLORER_URL";
pub const EXPLORER_API: &str = "EXPLORER_API";
pub const RPC_URL: &str = "RPC_URL";
pub const TOKEN_SYMBOL: &str = "TOKEN_SYMBOL";
pub const TOKEN_CONTRACT_ADDRESS: &str = "TOKEN_CONTRACT_ADDRESS";
pub const SEVEN_DAY_POOL_ADDRESS: &str = "SEVEN_DAY_POOL_ADDRESS";
pub const TEN_DAY_POOL_ADDRESS: &str = "TEN_DAY_POOL_ADDRESS";
pub const THIRTY_TWO_DAY_POOL_ADDRESS: &str = "THIRTY_TWO_DAY_POOL_ADDRESS";
pub const NINETY_DAY_POOL_ADDRESS: &str = "NINETY_DAY_POOL_ADDRESS";
