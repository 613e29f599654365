//! Tracker configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tracker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackerConfig {
    /// Character placed between labels
    pub separator: char,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}
