//! qsweep CLI - administrative sweep utility for job queues.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Action, Cli};
pub use config::{Config, QueueConfig};
pub use error::{CliError, Result};
