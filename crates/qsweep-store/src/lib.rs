//! qsweep Storage Layer
//!
//! Implements the `WatermarkStore` trait: a SQLite-backed store for durable
//! cross-run watermarks, and an in-memory store for deterministic tests.
//!
//! # Architecture
//!
//! The watermark is a single timestamp per `(domain, job type)` queue
//! identity, written once at the end of each full sweep pass. SQLite stands
//! in for the deployment's shared keyed cache; the store only ever needs
//! `get` and `set`.
//!
//! # Examples
//!
//! ```no_run
//! use qsweep_store::SqliteWatermarkStore;
//!
//! let store = SqliteWatermarkStore::open("qsweep.db").unwrap();
//! // Store is now ready for watermark reads and writes
//! ```

#![warn(missing_docs)]

pub mod memory;

pub use memory::MemoryWatermarkStore;

use qsweep_domain::traits::WatermarkStore;
use qsweep_domain::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during watermark store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `WatermarkStore`
///
/// Provides persistent watermarks shared across sweep invocations. Use
/// `:memory:` (or [`SqliteWatermarkStore::open_in_memory`]) for an ephemeral
/// database in tests.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each process should have its own
/// store instance; cross-process coordination is deliberately not provided
/// (concurrent sweeps of the same queue are an accepted race).
pub struct SqliteWatermarkStore {
    conn: Connection,
}

impl SqliteWatermarkStore {
    /// Open (or create) a watermark database at the given path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qsweep_store::SqliteWatermarkStore;
    ///
    /// let store = SqliteWatermarkStore::open("qsweep.db").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an ephemeral in-memory watermark database
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }
}

impl WatermarkStore for SqliteWatermarkStore {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<Timestamp>, Self::Error> {
        let swept_at: Option<i64> = self
            .conn
            .query_row(
                "SELECT swept_at FROM sweep_watermarks WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match swept_at {
            None => Ok(None),
            Some(secs) => {
                let secs = u64::try_from(secs).map_err(|_| {
                    StoreError::InvalidData(format!(
                        "Negative watermark {} under key '{}'",
                        secs, key
                    ))
                })?;
                Ok(Some(Timestamp::from_secs(secs)))
            }
        }
    }

    fn set(&mut self, key: &str, at: Timestamp) -> Result<(), Self::Error> {
        let secs = i64::try_from(at.as_secs()).map_err(|_| {
            StoreError::InvalidData(format!("Watermark {} out of range", at))
        })?;

        self.conn.execute(
            "INSERT INTO sweep_watermarks (key, swept_at) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET swept_at = excluded.swept_at",
            params![key, secs],
        )?;
        Ok(())
    }
}
