//! Per-invocation operation reports
//!
//! Ephemeral counters returned to the caller; nothing here is persisted.

/// Outcome of one abandoned-sweep pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Jobs re-pushed as fresh ready entries
    pub pushed: usize,

    /// Jobs classified as already handled by a previous pass
    pub skipped: usize,
}

impl SweepReport {
    /// Total jobs the pass classified
    pub fn total(&self) -> usize {
        self.pushed + self.skipped
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!("Re-pushed {} job(s) [{} skipped].", self.pushed, self.skipped)
    }
}

/// Outcome of one purge operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeReport {
    /// Queue size before the delete
    pub size_before: usize,

    /// Queue size after the delete, as reported by the backend
    pub size_after: usize,
}

impl PurgeReport {
    /// Entries removed, as far as the two size queries can tell
    pub fn deleted(&self) -> usize {
        self.size_before.saturating_sub(self.size_after)
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!(
            "Deleted {} job(s); current size is {} job(s).",
            self.deleted(),
            self.size_after
        )
    }
}
