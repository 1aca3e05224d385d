//! In-memory queue backend
//!
//! Stands in for a real queue service in tests and the CLI demo path. Jobs
//! enter the abandoned set only by explicit seeding; the backend's own
//! staleness detection is out of scope here.

use crate::QueueError;
use qsweep_domain::traits::JobQueue;
use qsweep_domain::{Job, QueueIdentity};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    ready: Vec<Job>,
    abandoned: Vec<Job>,
}

/// In-memory implementation of `JobQueue`
///
/// Cloning yields another handle to the same underlying queue, the way a
/// real backend client would share a connection.
#[derive(Debug, Clone)]
pub struct MemoryQueue {
    identity: QueueIdentity,
    inner: Arc<Mutex<Inner>>,
}

impl MemoryQueue {
    /// Create an empty queue with the given identity
    pub fn new(identity: QueueIdentity) -> Self {
        Self {
            identity,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Seed jobs directly into the abandoned set
    ///
    /// This is how tests and demo fixtures model "claimed but never
    /// completed" work without implementing lease mechanics.
    pub fn seed_abandoned(&self, jobs: impl IntoIterator<Item = Job>) -> Result<(), QueueError> {
        let mut inner = self.lock()?;
        inner.abandoned.extend(jobs);
        Ok(())
    }

    /// Snapshot of the ready entries, in push order
    pub fn ready_jobs(&self) -> Result<Vec<Job>, QueueError> {
        Ok(self.lock()?.ready.clone())
    }

    /// Number of entries currently in the abandoned set
    pub fn abandoned_len(&self) -> Result<usize, QueueError> {
        Ok(self.lock()?.abandoned.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, QueueError> {
        self.inner
            .lock()
            .map_err(|_| QueueError::Backend("queue state poisoned".to_string()))
    }
}

/// Single forward pass over the abandoned set
///
/// Snapshot taken at `abandoned_jobs` time; jobs abandoned after that are
/// invisible to this pass (and covered by the next sweep's watermark rules).
pub struct AbandonedJobs {
    jobs: std::vec::IntoIter<Job>,
}

impl Iterator for AbandonedJobs {
    type Item = Result<Job, QueueError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.jobs.next().map(Ok)
    }
}

impl JobQueue for MemoryQueue {
    type Error = QueueError;
    type AbandonedJobs = AbandonedJobs;

    fn identity(&self) -> &QueueIdentity {
        &self.identity
    }

    fn size(&self) -> Result<usize, Self::Error> {
        let inner = self.lock()?;
        Ok(inner.ready.len() + inner.abandoned.len())
    }

    fn delete_all(&self) -> Result<(), Self::Error> {
        let mut inner = self.lock()?;
        let dropped = inner.ready.len() + inner.abandoned.len();
        inner.ready.clear();
        inner.abandoned.clear();
        tracing::debug!("Deleted {} job(s) from {}", dropped, self.identity);
        Ok(())
    }

    fn abandoned_jobs(&self) -> Result<Self::AbandonedJobs, Self::Error> {
        let snapshot = self.lock()?.abandoned.clone();
        Ok(AbandonedJobs {
            jobs: snapshot.into_iter(),
        })
    }

    fn push(&self, job: Job) -> Result<(), Self::Error> {
        self.lock()?.ready.push(job);
        Ok(())
    }

    fn wait_for_backups(&self) -> Result<(), Self::Error> {
        // Single copy in memory; the durability checkpoint is a no-op.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsweep_domain::Timestamp;

    fn test_queue() -> MemoryQueue {
        MemoryQueue::new(QueueIdentity::new("wiki-en", "refreshLinks"))
    }

    fn test_job(queued_at: u64) -> Job {
        Job::new(
            "refreshLinks",
            "wiki-en",
            Timestamp::from_secs(queued_at),
            b"{}".to_vec(),
        )
    }

    #[test]
    fn test_size_counts_ready_and_abandoned() {
        let queue = test_queue();
        queue.push(test_job(1)).unwrap();
        queue.push(test_job(2)).unwrap();
        queue.seed_abandoned(vec![test_job(3)]).unwrap();

        assert_eq!(queue.size().unwrap(), 3);
    }

    #[test]
    fn test_delete_all_clears_both_sets() {
        let queue = test_queue();
        queue.push(test_job(1)).unwrap();
        queue.seed_abandoned(vec![test_job(2), test_job(3)]).unwrap();
        assert_eq!(queue.size().unwrap(), 3);

        queue.delete_all().unwrap();
        assert_eq!(queue.size().unwrap(), 0);
    }

    #[test]
    fn test_abandoned_jobs_preserve_seed_order() {
        let queue = test_queue();
        queue
            .seed_abandoned(vec![test_job(50), test_job(150), test_job(90)])
            .unwrap();

        let seen: Vec<u64> = queue
            .abandoned_jobs()
            .unwrap()
            .map(|j| j.unwrap().queued_at.as_secs())
            .collect();
        assert_eq!(seen, vec![50, 150, 90]);
    }

    #[test]
    fn test_push_does_not_consume_abandoned() {
        // Re-pushing makes a fresh ready entry; the backend still reports
        // the original as abandoned until its own bookkeeping clears it.
        let queue = test_queue();
        queue.seed_abandoned(vec![test_job(10)]).unwrap();

        queue.push(test_job(10)).unwrap();

        assert_eq!(queue.abandoned_len().unwrap(), 1);
        assert_eq!(queue.ready_jobs().unwrap().len(), 1);
    }

    #[test]
    fn test_clone_shares_state() {
        let queue = test_queue();
        let handle = queue.clone();

        handle.push(test_job(1)).unwrap();
        assert_eq!(queue.size().unwrap(), 1);
    }
}
