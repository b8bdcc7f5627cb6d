//! Nursing record library: application logic for the `nursing` binary.

pub mod app;
pub mod config;
pub mod logging;
