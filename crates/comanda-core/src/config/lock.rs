//! Row-lock probe configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the exclusive-access lock probe.
///
/// Every `/{id}/lock` endpoint holds the row lock for `dwell_seconds`
/// before releasing it, so that concurrent writers can be observed
/// blocking. Set to 0 to disable the hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockConfig {
    /// How long a locked fetch holds the row lock, in seconds.
    #[serde(default = "default_dwell")]
    pub dwell_seconds: u64,
}

impl LockConfig {
    /// The dwell as a [`Duration`].
    pub fn dwell(&self) -> Duration {
        Duration::from_secs(self.dwell_seconds)
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            dwell_seconds: default_dwell(),
        }
    }
}

fn default_dwell() -> u64 {
    15
}
