//! qsweep Sweeper
//!
//! Administrative maintenance operations for a job queue: purging all
//! queued work, and re-pushing abandoned jobs without duplicating re-pushes
//! across repeated runs.
//!
//! # Overview
//!
//! The sweeper is responsible for:
//! - **Abandoned-sweep**: one forward pass over the jobs the queue reports
//!   as abandoned, re-pushing every job not already handled by a previous
//!   pass, as decided by a persisted watermark
//! - **Purge**: dropping all queued and abandoned work for a queue
//! - **Batched backpressure**: a durability checkpoint after every
//!   `batch_size` re-pushes
//! - **Progress reporting**: counters an operator can watch mid-pass
//!
//! # The watermark
//!
//! One timestamp per `(domain, job type)`, written at the *end* of a full
//! pass with the pass's *start* time. A job whose enqueue time is strictly
//! before the watermark was already subject to an earlier pass and is
//! skipped; everything else is re-pushed. A failed pass writes nothing, so
//! re-running it is always safe.
//!
//! # Usage
//!
//! ## One-time sweep
//!
//! ```no_run
//! use qsweep_sweeper::{Sweeper, SweepConfig};
//! use qsweep_queue::MemoryQueue;
//! use qsweep_store::SqliteWatermarkStore;
//! use qsweep_domain::QueueIdentity;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let queue = MemoryQueue::new(QueueIdentity::new("wiki-en", "refreshLinks"));
//! let mut store = SqliteWatermarkStore::open("qsweep.db")?;
//! let sweeper = Sweeper::new(SweepConfig::default());
//!
//! let report = sweeper.sweep(&queue, &mut store)?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Background worker
//!
//! ```no_run
//! use qsweep_sweeper::{SweepWorker, SweepConfig};
//! use qsweep_queue::MemoryQueue;
//! use qsweep_store::SqliteWatermarkStore;
//! use qsweep_domain::QueueIdentity;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let queue = MemoryQueue::new(QueueIdentity::new("wiki-en", "refreshLinks"));
//!     let store = SqliteWatermarkStore::open("qsweep.db")?;
//!     let mut worker = SweepWorker::new(SweepConfig::default());
//!
//!     // Run indefinitely (until Ctrl+C)
//!     worker.run(queue, store).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod sweeper;
mod worker;

pub use config::SweepConfig;
pub use error::SweepError;
pub use report::{PurgeReport, SweepReport};
pub use sweeper::Sweeper;
pub use worker::SweepWorker;
