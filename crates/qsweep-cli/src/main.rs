//! qsweep - Perform administrative tasks on a job queue.

use clap::Parser;
use qsweep_cli::commands;
use qsweep_cli::{Action, Cli, Config};
use qsweep_store::SqliteWatermarkStore;
use qsweep_sweeper::SweepConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> qsweep_cli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let group = commands::build_queue_group(&config)?;
    let queue = group.get(&cli.job_type)?;

    let sweep_config = SweepConfig {
        batch_size: cli.batch_size,
        dry_run: cli.dry_run,
        ..Default::default()
    };

    match cli.action {
        Action::Delete => {
            commands::execute_delete(queue, &sweep_config, cli.yes)?;
        }
        Action::RepushAbandoned => {
            let store = SqliteWatermarkStore::open(&config.watermark_db)?;
            commands::execute_repush(queue, store, sweep_config, cli.every).await?;
        }
    }

    Ok(())
}
