//! Config composition: default values and source ordering.

pub mod merge_policy;
pub mod service;
