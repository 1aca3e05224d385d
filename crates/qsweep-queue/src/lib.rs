//! qsweep Queue Layer
//!
//! Queue-handle resolution and the in-memory queue backend.
//!
//! The real queue's storage engine and claim/lease mechanics live outside
//! this repository, behind the `JobQueue` trait. What this crate provides:
//!
//! - [`QueueGroup`]: resolves a live queue handle by job type within a
//!   domain, failing with [`QueueError::NotFound`] when no backend is
//!   configured for the requested type
//! - [`MemoryQueue`]: an in-memory backend for deterministic tests and the
//!   CLI demo path; abandoned jobs are seeded explicitly, never derived
//!   from lease expiry
//! - [`fixture`]: JSON job fixtures for seeding the demo backend

#![warn(missing_docs)]

pub mod error;
pub mod fixture;
pub mod group;
pub mod memory;

pub use error::QueueError;
pub use fixture::JobRecord;
pub use group::QueueGroup;
pub use memory::MemoryQueue;
