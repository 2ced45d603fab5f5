//! Backend for the student stress self-assessment application.
//!
//! The questionnaire UI submits raw answers; this crate validates them,
//! scores them with a hand-tuned weighted model, fetches (or falls back to)
//! recommendation text, and appends the result to the per-user history.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
