//! Job module - the unit of queued work the sweep operates on

use crate::Timestamp;
use std::fmt;

/// Unique identifier for a job based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(u128);

impl JobId {
    /// Generate a new UUIDv7-based JobId
    ///
    /// # Examples
    ///
    /// ```
    /// use qsweep_domain::JobId;
    ///
    /// let id = JobId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a JobId from a raw u128 value
    ///
    /// This is primarily for fixture and storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a JobId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A unit of queued work, as reported by the external queue backend
///
/// The payload is opaque to the sweep: it is carried through unchanged on
/// re-push. The only field the sweep ever inspects is `queued_at`, the
/// wall-clock instant at which the job was originally enqueued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Unique identifier (used for logging and fixtures only)
    pub id: JobId,

    /// Job type this job belongs to
    pub job_type: String,

    /// Logical partition (site/tenant) the owning queue belongs to
    pub domain: String,

    /// When this job was originally enqueued
    pub queued_at: Timestamp,

    /// Opaque serialized job parameters; never interpreted here
    pub payload: Vec<u8>,
}

impl Job {
    /// Create a new job
    pub fn new(
        job_type: impl Into<String>,
        domain: impl Into<String>,
        queued_at: Timestamp,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            id: JobId::new(),
            job_type: job_type.into(),
            domain: domain.into(),
            queued_at,
            payload,
        }
    }
}
