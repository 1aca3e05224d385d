//! Delete command implementation.

use crate::error::Result;
use colored::*;
use qsweep_domain::traits::JobQueue;
use qsweep_queue::MemoryQueue;
use qsweep_sweeper::{SweepConfig, Sweeper};
use std::io::{self, BufRead, Write};

/// Execute the delete action: drop all queued and abandoned work.
///
/// Confirms interactively unless `skip_confirm` is set; a dry run never
/// prompts since nothing is deleted.
pub fn execute_delete(
    queue: &MemoryQueue,
    config: &SweepConfig,
    skip_confirm: bool,
) -> Result<()> {
    let sweeper = Sweeper::new(config.clone());
    let size = queue.size()?;

    if !skip_confirm && !config.dry_run {
        println!(
            "{}",
            format!(
                "About to delete ALL {} job(s) (queued and abandoned) from '{}'.",
                size,
                queue.identity()
            )
            .yellow()
        );
        println!("{}", "Queued work will be irreversibly lost.".yellow());
        print!("Continue? [y/N] ");
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().lock().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("Operation cancelled");
            return Ok(());
        }
    }

    println!("Queue has {} job(s); deleting...", size);
    let report = sweeper.purge(queue)?;
    println!("Done; current size is {} job(s).", report.size_after);

    Ok(())
}
