//! Runfinder Core
//!
//! Wire and domain types for the job-orchestration API consumed by runfinder.
//!
//! This crate contains:
//! - Domain types: Jobs and their runs as returned by the service
//! - DTOs: The listing envelopes wrapping those collections

pub mod domain;
pub mod dto;
