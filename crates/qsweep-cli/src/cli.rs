//! CLI argument definitions and parsing.

use clap::Parser;

/// qsweep - Perform administrative tasks on a job queue.
#[derive(Debug, Parser)]
#[command(name = "qsweep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Job type to operate on
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub job_type: String,

    /// Queue operation to perform
    #[arg(short, long, value_enum)]
    pub action: Action,

    /// Number of re-pushes between durability checkpoints
    #[arg(short, long, default_value_t = 100)]
    pub batch_size: usize,

    /// Classify and count without pushing or advancing the watermark
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt for destructive actions
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Re-run the sweep every N minutes until interrupted
    #[arg(long, value_name = "MINUTES")]
    pub every: Option<u64>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    /// Delete every queued and abandoned job (destructive)
    Delete,

    /// Re-push abandoned jobs not yet handled by a previous sweep
    RepushAbandoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repush_abandoned() {
        let cli = Cli::parse_from([
            "qsweep",
            "--type",
            "refreshLinks",
            "--action",
            "repush-abandoned",
        ]);

        assert_eq!(cli.job_type, "refreshLinks");
        assert_eq!(cli.action, Action::RepushAbandoned);
        assert_eq!(cli.batch_size, 100);
        assert!(!cli.dry_run);
        assert!(cli.every.is_none());
    }

    #[test]
    fn test_parse_delete_with_flags() {
        let cli = Cli::parse_from([
            "qsweep",
            "--type",
            "htmlCacheUpdate",
            "--action",
            "delete",
            "--batch-size",
            "25",
            "--yes",
            "--dry-run",
        ]);

        assert_eq!(cli.action, Action::Delete);
        assert_eq!(cli.batch_size, 25);
        assert!(cli.yes);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result = Cli::try_parse_from([
            "qsweep",
            "--type",
            "refreshLinks",
            "--action",
            "drain",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_type_and_action_are_required() {
        assert!(Cli::try_parse_from(["qsweep"]).is_err());
        assert!(Cli::try_parse_from(["qsweep", "--type", "refreshLinks"]).is_err());
        assert!(Cli::try_parse_from(["qsweep", "--action", "delete"]).is_err());
    }
}
