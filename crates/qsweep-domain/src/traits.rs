//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the sweep logic and
//! infrastructure. Implementations live in other crates; the sweep only ever
//! sees these seams, which is what makes it testable with in-memory fakes.

use crate::{Job, QueueIdentity, Timestamp};

/// A live handle to one queue instance
///
/// The queue's storage engine and claim/lease mechanics are entirely behind
/// this boundary. Abandoned jobs are whatever the backend reports as claimed
/// but never completed; this crate does not decide that.
pub trait JobQueue {
    /// Error type for queue operations
    type Error;

    /// Lazy abandoned-job source returned by `abandoned_jobs`
    ///
    /// A single forward pass: unbounded length, consumed once, not
    /// restartable. Implementations must not require materializing the whole
    /// sequence; each element may fail independently on backend I/O.
    type AbandonedJobs: Iterator<Item = Result<Job, Self::Error>>;

    /// The `(domain, job type)` identity of this queue
    fn identity(&self) -> &QueueIdentity;

    /// Total number of entries, ready and claimed/abandoned alike
    fn size(&self) -> Result<usize, Self::Error>;

    /// Delete every entry in the queue
    ///
    /// Fails atomically as reported by the backend; no partial-delete
    /// recovery is attempted here.
    fn delete_all(&self) -> Result<(), Self::Error>;

    /// All jobs the backend currently reports as abandoned
    fn abandoned_jobs(&self) -> Result<Self::AbandonedJobs, Self::Error>;

    /// Enqueue a job as a fresh, ready entry
    ///
    /// Not retried by callers in this system; a failure is fatal to the
    /// whole pass.
    fn push(&self, job: Job) -> Result<(), Self::Error>;

    /// Block until the backend's replication/backup layer confirms the
    /// writes so far are durable
    ///
    /// Used purely as batching backpressure, not for visibility ordering.
    fn wait_for_backups(&self) -> Result<(), Self::Error>;
}

/// Keyed store holding one sweep watermark per queue identity
///
/// Shared mutable state external to this component. At-least
/// read-your-writes consistency for a single process is assumed; no
/// transactional guarantee across the read-modify-write cycle is required
/// (concurrent sweeps of the same queue are an accepted race, tolerated by
/// idempotent job semantics).
pub trait WatermarkStore {
    /// Error type for store operations
    type Error;

    /// Read the watermark under `key`, if one was ever written
    ///
    /// An absent entry is not an error: it means no sweep has completed yet.
    fn get(&self, key: &str) -> Result<Option<Timestamp>, Self::Error>;

    /// Overwrite the watermark under `key`
    fn set(&mut self, key: &str, at: Timestamp) -> Result<(), Self::Error>;
}

impl<W: WatermarkStore + ?Sized> WatermarkStore for &mut W {
    type Error = W::Error;

    fn get(&self, key: &str) -> Result<Option<Timestamp>, Self::Error> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, at: Timestamp) -> Result<(), Self::Error> {
        (**self).set(key, at)
    }
}
