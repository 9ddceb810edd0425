//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Event handler tests (filtering, reading, deleting)
//! - Receipt rendering tests
//! - Save output tests
//! - Type tests (PrintJob, MonitorSettings)

#[cfg(test)]
mod types_tests;
