//! Command implementations.

pub mod delete;
pub mod repush;

pub use self::delete::execute_delete;
pub use self::repush::execute_repush;

use crate::config::Config;
use crate::error::Result;
use qsweep_domain::QueueIdentity;
use qsweep_queue::{fixture, MemoryQueue, QueueGroup};

/// Build the queue group from configuration.
///
/// Every configured queue gets a demo backend; seeds, when given, land in
/// the abandoned set.
pub fn build_queue_group(config: &Config) -> Result<QueueGroup<MemoryQueue>> {
    let mut group = QueueGroup::new(config.domain.clone());

    for queue_config in &config.queues {
        let identity = QueueIdentity::new(config.domain.clone(), queue_config.job_type.clone());
        let queue = MemoryQueue::new(identity);

        if let Some(seed) = &queue_config.seed {
            let jobs = fixture::load_jobs(seed, &config.domain)?;
            tracing::info!(
                "Seeded {} abandoned job(s) into '{}' from '{}'",
                jobs.len(),
                queue_config.job_type,
                seed
            );
            queue.seed_abandoned(jobs)?;
        }

        group.register(queue_config.job_type.clone(), queue);
    }

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueueConfig;
    use qsweep_queue::QueueError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_group_registers_configured_queues() {
        let config = Config {
            domain: "wiki-en".to_string(),
            watermark_db: ":memory:".to_string(),
            queues: vec![QueueConfig {
                job_type: "refreshLinks".to_string(),
                seed: None,
            }],
        };

        let group = build_queue_group(&config).unwrap();
        assert!(group.get("refreshLinks").is_ok());
        assert!(matches!(
            group.get("webVideoTranscode"),
            Err(QueueError::NotFound(_))
        ));
    }

    #[test]
    fn test_build_group_seeds_abandoned_jobs() {
        let mut fixture_file = NamedTempFile::new().unwrap();
        write!(
            fixture_file,
            r#"[{{"job_type": "refreshLinks", "queued_at": 100, "payload": {{"page": "X"}}}}]"#
        )
        .unwrap();

        let config = Config {
            domain: "wiki-en".to_string(),
            watermark_db: ":memory:".to_string(),
            queues: vec![QueueConfig {
                job_type: "refreshLinks".to_string(),
                seed: Some(fixture_file.path().to_str().unwrap().to_string()),
            }],
        };

        let group = build_queue_group(&config).unwrap();
        let queue = group.get("refreshLinks").unwrap();
        assert_eq!(queue.abandoned_len().unwrap(), 1);
    }
}
