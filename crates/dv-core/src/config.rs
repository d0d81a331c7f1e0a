//! Synchronisation configuration.

use crate::{DvError, DvResult};

/// Knobs for the network-wide synchronisation loop.
///
/// Typically built in code or deserialised (feature `serde`) by the
/// application and handed to `StopNetwork::with_config`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyncConfig {
    /// Run a full synchronisation whenever `add_neighbour` inserts a new
    /// direct entry.  Turn off for bulk loading and call `synchronise_all`
    /// once at the end.  Default: `true`.
    pub auto_synchronise: bool,

    /// Upper bound on passes per synchronisation.  `None` runs to the fixed
    /// point, which always exists for non-negative costs.
    pub max_passes: Option<u32>,
}

impl SyncConfig {
    /// Reject settings the synchronisation loop cannot honour.
    pub fn validate(&self) -> DvResult<()> {
        if self.max_passes == Some(0) {
            return Err(DvError::Config("max_passes must be at least 1".into()));
        }
        Ok(())
    }

    /// Same configuration, with automatic synchronisation disabled.
    pub fn manual(mut self) -> Self {
        self.auto_synchronise = false;
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { auto_synchronise: true, max_passes: None }
    }
}
