//! Shared plumbing for the verification workspace: environment-backed
//! configuration and tracing setup.

pub mod config;
pub mod logging;
