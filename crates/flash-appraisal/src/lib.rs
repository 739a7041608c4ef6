//! Scoring and pricing core for on-site property appraisals.

pub mod appraisal;
pub mod config;
pub mod error;
pub mod telemetry;
