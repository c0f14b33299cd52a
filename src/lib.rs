//! Sequential E2E UI test runner
//!
//! Discovers browser-driven test scripts by filename prefix, runs each one
//! in its own child process under a wall-clock budget, and aggregates the
//! outcomes into a CI-friendly summary and exit code.

pub mod common;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use runner::{ExecutionResult, Outcome, RunStatus, RunSummary, TestUnit};
