//! Core domain types
//!
//! These types mirror the objects returned by the job-orchestration service.
//! They are read-only snapshots, built fresh from each response body.

pub mod id;
pub mod job;
pub mod run;
