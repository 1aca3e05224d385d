//! Integration tests for on-disk watermark persistence.
//!
//! The whole point of the watermark is surviving across sweep invocations,
//! so these tests close and re-open the database between writes.

use qsweep_domain::traits::WatermarkStore;
use qsweep_domain::{QueueIdentity, Timestamp};
use qsweep_store::SqliteWatermarkStore;

#[test]
fn watermark_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("watermarks.db");
    let key = QueueIdentity::new("wiki-en", "refreshLinks").watermark_key();

    {
        let mut store = SqliteWatermarkStore::open(&db_path).unwrap();
        store.set(&key, Timestamp::from_secs(1_700_000_000)).unwrap();
    }

    let store = SqliteWatermarkStore::open(&db_path).unwrap();
    assert_eq!(
        store.get(&key).unwrap(),
        Some(Timestamp::from_secs(1_700_000_000))
    );
}

#[test]
fn reopen_preserves_independent_queue_watermarks() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("watermarks.db");

    let links = QueueIdentity::new("wiki-en", "refreshLinks").watermark_key();
    let cache = QueueIdentity::new("wiki-en", "htmlCacheUpdate").watermark_key();

    {
        let mut store = SqliteWatermarkStore::open(&db_path).unwrap();
        store.set(&links, Timestamp::from_secs(100)).unwrap();
        store.set(&cache, Timestamp::from_secs(200)).unwrap();
        // A later sweep of one queue must not disturb the other
        store.set(&links, Timestamp::from_secs(300)).unwrap();
    }

    let store = SqliteWatermarkStore::open(&db_path).unwrap();
    assert_eq!(store.get(&links).unwrap(), Some(Timestamp::from_secs(300)));
    assert_eq!(store.get(&cache).unwrap(), Some(Timestamp::from_secs(200)));
}

#[test]
fn fresh_database_has_no_watermarks() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("watermarks.db");

    let store = SqliteWatermarkStore::open(&db_path).unwrap();
    let key = QueueIdentity::new("wiki-en", "refreshLinks").watermark_key();

    // First-ever run: absent, to be treated as the epoch by the sweep
    assert_eq!(store.get(&key).unwrap(), None);
}
