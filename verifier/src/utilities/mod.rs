//! # Utilities
//!
//! Helpers shared by the comparators:
//! - [`normalization`]: numeric detection and canonical text for result cells.
//! - [`preview`]: bounded rendering of values for diagnostic messages.

pub mod normalization;
pub mod preview;
