//! Directory tree reconstruction
//!
//! Produces the ordered path list (by walking a root or reading a list file)
//! and turns it into nested directory open/close events.

pub mod delta;
pub mod list_file;
pub mod path;
pub mod walker;
