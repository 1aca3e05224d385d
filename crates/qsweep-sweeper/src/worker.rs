//! Background worker for periodic sweep operation

use crate::{SweepConfig, SweepError, SweepReport, Sweeper};
use qsweep_domain::traits::{JobQueue, WatermarkStore};
use std::fmt;
use tokio::time::{interval, Duration};

/// Background worker that re-runs the abandoned-sweep on a schedule
///
/// Wraps the synchronous sweep in a tokio interval loop. It introduces no
/// coordination: two workers sweeping the same queue behave exactly like
/// two concurrent one-shot invocations (an accepted at-least-once race).
///
/// # Examples
///
/// ```no_run
/// use qsweep_sweeper::{SweepWorker, SweepConfig};
/// use qsweep_queue::MemoryQueue;
/// use qsweep_store::SqliteWatermarkStore;
/// use qsweep_domain::QueueIdentity;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let queue = MemoryQueue::new(QueueIdentity::new("wiki-en", "refreshLinks"));
///     let store = SqliteWatermarkStore::open("qsweep.db")?;
///     let mut worker = SweepWorker::new(SweepConfig::default());
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run(queue, store).await?;
///     Ok(())
/// }
/// ```
pub struct SweepWorker {
    sweeper: Sweeper,
    interval: Duration,
    totals: SweepReport,
    cycles_completed: usize,
}

impl SweepWorker {
    /// Create a new background worker with the given configuration
    pub fn new(config: SweepConfig) -> Self {
        // tokio's interval panics on a zero period
        let interval = config.sweep_interval().max(Duration::from_secs(1));
        Self {
            sweeper: Sweeper::new(config),
            interval,
            totals: SweepReport::default(),
            cycles_completed: 0,
        }
    }

    /// Counts accumulated across all completed cycles
    pub fn totals(&self) -> SweepReport {
        self.totals
    }

    /// Number of sweep cycles completed so far
    pub fn cycles_completed(&self) -> usize {
        self.cycles_completed
    }

    /// Run the worker indefinitely
    ///
    /// Sweeps at the configured interval until a shutdown signal (Ctrl+C)
    /// is received. A failed cycle is logged and the worker keeps going:
    /// the watermark was not advanced, so the next cycle re-evaluates the
    /// same jobs.
    pub async fn run<Q, W>(&mut self, queue: Q, mut store: W) -> Result<(), SweepError>
    where
        Q: JobQueue,
        W: WatermarkStore,
        Q::Error: fmt::Display,
        W::Error: fmt::Display,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(
            "Sweep worker started for {} (interval: {:?})",
            queue.identity(),
            self.interval
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.sweeper.sweep(&queue, &mut store) {
                        Ok(report) => {
                            self.record(report);
                            tracing::info!(
                                "Sweep cycle completed: {} re-pushed, {} skipped",
                                report.pushed,
                                report.skipped
                            );
                        }
                        Err(e) => {
                            tracing::error!("Sweep cycle failed: {}", e);
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown signal received, stopping sweep worker");
                    break;
                }
            }
        }

        tracing::info!(
            "Sweep worker stopped after {} cycle(s): {}",
            self.cycles_completed,
            self.totals.summary()
        );

        Ok(())
    }

    /// Run for a specific number of cycles (useful for testing)
    ///
    /// Unlike [`SweepWorker::run`], a failed cycle aborts and returns the
    /// error.
    pub async fn run_cycles<Q, W>(
        &mut self,
        queue: Q,
        mut store: W,
        cycles: usize,
    ) -> Result<(), SweepError>
    where
        Q: JobQueue,
        W: WatermarkStore,
        Q::Error: fmt::Display,
        W::Error: fmt::Display,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(
            "Sweep worker started for {} cycle(s) (interval: {:?})",
            cycles,
            self.interval
        );

        for cycle in 0..cycles {
            ticker.tick().await;

            match self.sweeper.sweep(&queue, &mut store) {
                Ok(report) => {
                    self.record(report);
                    tracing::info!(
                        "Sweep {}/{} completed: {} re-pushed, {} skipped",
                        cycle + 1,
                        cycles,
                        report.pushed,
                        report.skipped
                    );
                }
                Err(e) => {
                    tracing::error!("Sweep {}/{} failed: {}", cycle + 1, cycles, e);
                    return Err(e);
                }
            }
        }

        tracing::info!(
            "Sweep worker finished {} cycle(s): {}",
            cycles,
            self.totals.summary()
        );

        Ok(())
    }

    fn record(&mut self, report: SweepReport) {
        self.totals.pushed += report.pushed;
        self.totals.skipped += report.skipped;
        self.cycles_completed += 1;
    }
}
