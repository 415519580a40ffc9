// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod notification;
pub mod session;

pub use notification::{HorizontalAnchor, NotificationConfig, NotificationPosition, VerticalAnchor};
pub use session::WalletSession;
