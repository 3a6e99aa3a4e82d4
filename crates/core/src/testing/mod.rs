//! Test utilities.
//!
//! Deterministic in-memory image fixtures for exercising the pipeline
//! without binary test assets checked into the repository.

pub mod fixtures;
