//! Workspace-level integration tests for the nursing record.
//!
//! The test suites live in `tests/`; this crate has no code of its own.
