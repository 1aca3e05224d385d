//! End-to-end flows through the CLI command layer: config → queue group →
//! operation → durable watermark.

use qsweep_cli::commands::{build_queue_group, execute_delete, execute_repush};
use qsweep_cli::{Config, QueueConfig};
use qsweep_domain::traits::JobQueue;
use qsweep_queue::QueueError;
use qsweep_store::SqliteWatermarkStore;
use qsweep_sweeper::SweepConfig;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const FIXTURE: &str = r#"[
    {"job_type": "refreshLinks", "queued_at": 100, "payload": {"page": "Main_Page"}},
    {"job_type": "refreshLinks", "queued_at": 200, "payload": {"page": "Help"}},
    {"job_type": "refreshLinks", "queued_at": 300, "payload": {"page": "About"}}
]"#;

fn seeded_config(fixture_path: &str, db_path: &str) -> Config {
    Config {
        domain: "wiki-en".to_string(),
        watermark_db: db_path.to_string(),
        queues: vec![QueueConfig {
            job_type: "refreshLinks".to_string(),
            seed: Some(fixture_path.to_string()),
        }],
    }
}

#[tokio::test]
async fn repush_then_rerun_skips_everything() {
    let mut fixture = NamedTempFile::new().unwrap();
    write!(fixture, "{}", FIXTURE).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("watermarks.db");

    let config = seeded_config(
        fixture.path().to_str().unwrap(),
        db_path.to_str().unwrap(),
    );

    // First invocation: no watermark yet, every seeded job re-pushed
    let group = build_queue_group(&config).unwrap();
    let queue = group.get("refreshLinks").unwrap();
    let store = SqliteWatermarkStore::open(&db_path).unwrap();
    execute_repush(queue, store, SweepConfig::default(), None)
        .await
        .unwrap();
    assert_eq!(queue.ready_jobs().unwrap().len(), 3);

    // Second invocation, fresh process state, same watermark database: the
    // seeds now predate the stored watermark and are all skipped
    let group = build_queue_group(&config).unwrap();
    let queue = group.get("refreshLinks").unwrap();
    let store = SqliteWatermarkStore::open(&db_path).unwrap();
    execute_repush(queue, store, SweepConfig::default(), None)
        .await
        .unwrap();
    assert_eq!(queue.ready_jobs().unwrap().len(), 0);
}

#[test]
fn delete_reports_empty_queue() {
    let mut fixture = NamedTempFile::new().unwrap();
    write!(fixture, "{}", FIXTURE).unwrap();
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("watermarks.db");

    let config = seeded_config(
        fixture.path().to_str().unwrap(),
        db_path.to_str().unwrap(),
    );
    let group = build_queue_group(&config).unwrap();
    let queue = group.get("refreshLinks").unwrap();
    assert_eq!(queue.size().unwrap(), 3);

    execute_delete(queue, &SweepConfig::default(), true).unwrap();
    assert_eq!(queue.size().unwrap(), 0);
}

#[test]
fn unconfigured_type_fails_before_any_work() {
    let config = Config {
        domain: "wiki-en".to_string(),
        watermark_db: ":memory:".to_string(),
        queues: Vec::new(),
    };

    let group = build_queue_group(&config).unwrap();
    assert!(matches!(
        group.get("refreshLinks"),
        Err(QueueError::NotFound(_))
    ));
}
