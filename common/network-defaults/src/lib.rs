// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod mainnet;

// the feature-locking exists because this crate is pulled into the wasm
// front-end bundle, which only wants the plain network data
//
// so if you're thinking of adding a new thing, consider feature-locking it and
// then just adding it to the default feature

#[cfg(all(feature = "env", feature = "network"))]
pub mod env_setup;
#[cfg(feature = "network")]
pub mod network;
#[cfg(feature = "network")]
pub mod registry;

#[cfg(feature = "env")]
pub mod var_names;

// re-export everything to not break existing imports
#[cfg(all(feature = "env", feature = "network"))]
pub use env_setup::*;
#[cfg(feature = "network")]
pub use network::*;
#[cfg(feature = "network")]
pub use registry::*;
