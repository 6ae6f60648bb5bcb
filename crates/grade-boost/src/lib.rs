//! Weighted grade calculation and improvement-suggestion pipeline.
//!
//! [`grading`] holds the pure computation, [`suggestions`] talks to the external
//! text-generation capability, and [`calculator`] composes both into the submit cycle
//! exposed over HTTP and the command line.

pub mod calculator;
pub mod config;
pub mod error;
pub mod grading;
pub mod suggestions;
pub mod telemetry;
