//! Queue-handle resolution by job type within a domain

use crate::QueueError;
use qsweep_domain::traits::JobQueue;
use std::collections::HashMap;

/// Registry of configured queue backends for one domain
///
/// The admin entry point resolves a queue handle by job type here before
/// dispatching an operation. Resolution is fatal when nothing is
/// configured for the requested type: no side effects have happened yet at
/// that point, so aborting is always safe.
#[derive(Debug)]
pub struct QueueGroup<Q> {
    domain: String,
    queues: HashMap<String, Q>,
}

impl<Q: JobQueue> QueueGroup<Q> {
    /// Create an empty group for the given domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            queues: HashMap::new(),
        }
    }

    /// The logical partition this group serves
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Register a backend for a job type, replacing any previous one
    pub fn register(&mut self, job_type: impl Into<String>, queue: Q) {
        self.queues.insert(job_type.into(), queue);
    }

    /// Resolve the queue handle for a job type
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::NotFound`] when no backend is configured for
    /// the type.
    pub fn get(&self, job_type: &str) -> Result<&Q, QueueError> {
        self.queues
            .get(job_type)
            .ok_or_else(|| QueueError::NotFound(job_type.to_string()))
    }

    /// Job types with a configured backend
    pub fn job_types(&self) -> impl Iterator<Item = &str> {
        self.queues.keys().map(String::as_str)
    }
}
