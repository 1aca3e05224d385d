//! Configuration for sweep operations

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_batch_size() -> usize {
    100
}

fn default_interval_minutes() -> u64 {
    60
}

/// Configuration for the sweeper
///
/// # Examples
///
/// ```
/// use qsweep_sweeper::SweepConfig;
///
/// let config = SweepConfig::default();
/// assert_eq!(config.batch_size, 100);
/// assert!(!config.dry_run);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Number of re-pushes between durability checkpoints
    ///
    /// The count is a running total across the whole pass. Default: 100.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Classify and count without pushing, waiting, or advancing the
    /// watermark
    #[serde(default)]
    pub dry_run: bool,

    /// How often the background worker repeats the sweep (in minutes)
    ///
    /// Only read by `SweepWorker`; a one-shot sweep ignores it. Default: 60.
    #[serde(default = "default_interval_minutes")]
    pub sweep_interval_minutes: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            dry_run: false,
            sweep_interval_minutes: default_interval_minutes(),
        }
    }
}

impl SweepConfig {
    /// Batch size with the degenerate zero normalized away
    ///
    /// A zero batch size would mean a checkpoint after every push divides
    /// by zero; treat it as checkpointing on every push.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }

    /// Worker sweep interval as a Duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_minutes * 60)
    }
}
