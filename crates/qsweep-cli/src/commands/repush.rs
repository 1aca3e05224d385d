//! Repush-abandoned command implementation.

use crate::error::Result;
use colored::*;
use qsweep_domain::traits::WatermarkStore;
use qsweep_queue::MemoryQueue;
use qsweep_sweeper::{SweepConfig, SweepWorker, Sweeper};
use std::fmt;

/// Execute the repush-abandoned action.
///
/// One-shot by default; with `every` set, keeps sweeping at that interval
/// until interrupted.
pub async fn execute_repush<W>(
    queue: &MemoryQueue,
    mut store: W,
    config: SweepConfig,
    every: Option<u64>,
) -> Result<()>
where
    W: WatermarkStore,
    W::Error: fmt::Display,
{
    match every {
        Some(minutes) => {
            let config = SweepConfig {
                sweep_interval_minutes: minutes,
                ..config
            };
            let mut worker = SweepWorker::new(config);
            worker.run(queue.clone(), store).await?;
            println!("{}", worker.totals().summary().green());
        }
        None => {
            let sweeper = Sweeper::new(config);
            let report = sweeper.sweep(queue, &mut store)?;
            println!("{}", report.summary().green());
        }
    }

    Ok(())
}
