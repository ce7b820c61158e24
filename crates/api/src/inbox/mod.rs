//! Inbox generation orchestration.
//!
//! - [`generate`] -- loads collaborator snapshots, runs the planner, and
//!   persists the result under a per-profile lock.

pub mod generate;
