//! JSON job fixtures for seeding the demo backend
//!
//! A fixture file is a JSON array of job records. Payloads are arbitrary
//! JSON and are stored as their serialized bytes; the sweep never looks
//! inside them.

use crate::QueueError;
use qsweep_domain::{Job, Timestamp};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One job as it appears in a fixture file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job type the record belongs to
    pub job_type: String,

    /// Enqueue time in epoch seconds
    pub queued_at: u64,

    /// Arbitrary job parameters, carried through opaquely
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl JobRecord {
    /// Convert into a domain job under the given domain
    pub fn into_job(self, domain: &str) -> Result<Job, QueueError> {
        let payload = serde_json::to_vec(&self.payload)
            .map_err(|e| QueueError::InvalidJob(e.to_string()))?;
        Ok(Job::new(
            self.job_type,
            domain,
            Timestamp::from_secs(self.queued_at),
            payload,
        ))
    }
}

/// Load jobs from a fixture file
///
/// # Errors
///
/// Returns [`QueueError::InvalidJob`] when the file cannot be read or is
/// not a JSON array of job records.
pub fn load_jobs<P: AsRef<Path>>(path: P, domain: &str) -> Result<Vec<Job>, QueueError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        QueueError::InvalidJob(format!("Cannot read fixture '{}': {}", path.display(), e))
    })?;
    parse_jobs(&content, domain)
}

/// Parse jobs from fixture JSON
pub fn parse_jobs(json: &str, domain: &str) -> Result<Vec<Job>, QueueError> {
    let records: Vec<JobRecord> =
        serde_json::from_str(json).map_err(|e| QueueError::InvalidJob(e.to_string()))?;
    records
        .into_iter()
        .map(|record| record.into_job(domain))
        .collect()
}
