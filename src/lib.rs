//! xml-listing: XML File Listings
//!
//! Walks a directory (or reads a list of paths), reconstructs the directory
//! hierarchy from the flat path strings, and writes it as nested
//! `<directory>`/`<file>` XML with optional size and timestamp metadata.
//!
//! The pipeline is three explicit stages: [`listing::enumerate`],
//! [`listing::build`] and [`listing::serialize`].

pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod metadata;
pub mod tree;
pub mod xml;
