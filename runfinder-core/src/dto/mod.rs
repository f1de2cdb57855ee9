//! Data Transfer Objects
//!
//! Response envelopes of the listing endpoints.

pub mod job;
pub mod run;
