//!
//! Traits Module
//!
//! Core traits used by the verifier for extensibility.
//!
//! - [`comparator`]: the strategy trait shared by the collection comparators.

pub mod comparator;
