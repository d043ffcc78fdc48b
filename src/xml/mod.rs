//! XML rendering: escaping, document accumulation, and output.

pub mod document;
pub mod escape;
pub mod writer;
