// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning for a [`StateManager`](crate::StateManager)'s history.
///
/// Every field has a default, so a configuration file only needs the fields it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of states kept; the oldest is dropped beyond that. At least one state is
    /// always kept.
    pub limit: usize,
    /// How long after a typing or deleting edit the next one is merged into the same history
    /// entry, in milliseconds.
    pub coalesce_window_ms: u64,
    /// Upper bound on how long edits keep being merged, in milliseconds.
    pub backup_interval_ms: u64,
}

impl HistoryConfig {
    /// The coalescing window as a [`Duration`].
    #[must_use]
    pub fn coalesce_window(&self) -> Duration {
        Duration::from_millis(self.coalesce_window_ms)
    }

    /// The backup interval as a [`Duration`].
    #[must_use]
    pub fn backup_interval(&self) -> Duration {
        Duration::from_millis(self.backup_interval_ms)
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            coalesce_window_ms: 750,
            backup_interval_ms: 2000,
        }
    }
}
