//! Listing pipeline: enumerate → build → serialize
//!
//! Each stage takes the previous stage's result by value or reference and
//! returns a fresh one, so there is no hidden call-order contract between
//! them.

use crate::error::ListingError;
use crate::metadata::{self, CaptureFlags};
use crate::tree::delta::{DeltaTracker, TreeEvent};
use crate::tree::list_file::read_path_list;
use crate::tree::path::{base_name, PathStyle};
use crate::tree::walker::{Walker, WalkerConfig};
use crate::xml::document::{DocumentBuilder, DocumentFormat};
use crate::xml::writer::{write_document, WriteOptions};
use serde::Serialize;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Where the path list comes from
#[derive(Debug, Clone)]
pub enum PathSource {
    /// Recursively walk a root directory
    Walk { root: PathBuf, config: WalkerConfig },
    /// Read a newline-delimited list of paths
    ListFile(PathBuf),
}

impl PathSource {
    /// Separator every enumerated path is known to use. Walked paths come from
    /// the host filesystem; list files carry whatever separator was configured.
    pub fn fixed_separator(&self) -> Option<char> {
        match self {
            PathSource::Walk { .. } => Some(MAIN_SEPARATOR),
            PathSource::ListFile(_) => None,
        }
    }
}

/// Receives progress notifications. All methods default to no-ops.
pub trait ProgressObserver {
    /// A path was added to the list during enumeration
    fn path_discovered(&mut self, _path: &str) {}
}

/// Observer that ignores everything (quiet mode)
#[derive(Debug, Default)]
pub struct SilentObserver;

impl ProgressObserver for SilentObserver {}

/// Produce the ordered path list.
#[instrument(skip(observer))]
pub fn enumerate(
    source: &PathSource,
    observer: &mut dyn ProgressObserver,
) -> Result<Vec<String>, ListingError> {
    match source {
        PathSource::Walk { root, config } => Walker::with_config(root.clone(), config.clone())
            .walk_with(|path| observer.path_discovered(path)),
        PathSource::ListFile(list) => {
            let paths = read_path_list(list)?;
            for path in &paths {
                observer.path_discovered(path);
            }
            Ok(paths)
        }
    }
}

/// Everything the build stage needs besides the path list
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub style: PathStyle,
    pub format: DocumentFormat,
    pub capture: CaptureFlags,
    /// Checked between files; when set the build stops with
    /// [`ListingError::Cancelled`].
    pub cancel: Option<Arc<AtomicBool>>,
}

/// Result of a completed build
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Document text without the XML declaration
    #[serde(skip)]
    pub document: String,
    pub file_count: u64,
    /// Paths whose metadata could not be read
    pub warnings: Vec<String>,
    pub elapsed: Duration,
}

/// Convert a path list into document text in a single pass.
#[instrument(skip(paths, options), fields(path_count = paths.len()))]
pub fn build<S: AsRef<str>>(paths: &[S], options: &BuildOptions) -> Result<BuildReport, ListingError> {
    let start = Instant::now();
    info!("Starting listing build");

    let separator = options.style.separator;
    let mut tracker = DeltaTracker::new(options.style.clone());
    let mut builder = DocumentBuilder::new(options.format.clone(), options.capture);
    let mut events = Vec::new();
    let mut warnings = Vec::new();
    let mut file_count: u64 = 0;

    for entry in paths {
        if let Some(cancel) = &options.cancel {
            if cancel.load(Ordering::Relaxed) {
                warn!(files_processed = file_count, "Listing build cancelled");
                return Err(ListingError::Cancelled {
                    files_processed: file_count,
                });
            }
        }

        tracker.advance(entry.as_ref(), &mut events)?;
        for event in events.drain(..) {
            match event {
                TreeEvent::OpenDirectory { name, depth } => builder.open_directory(&name, depth),
                TreeEvent::CloseDirectory { depth } => builder.close_directory(depth),
                TreeEvent::File { path, depth } => {
                    file_count += 1;
                    let stats = match metadata::stat(path) {
                        Ok(stats) => Some(stats),
                        Err(e) => {
                            debug!(path, error = %e, "Metadata unavailable");
                            warnings.push(path.to_string());
                            None
                        }
                    };
                    builder.file(base_name(path, separator), depth, stats.as_ref());
                }
            }
        }
    }

    tracker.finish(&mut events);
    for event in events.drain(..) {
        if let TreeEvent::CloseDirectory { depth } = event {
            builder.close_directory(depth);
        }
    }

    let elapsed = start.elapsed();
    if !warnings.is_empty() {
        warn!(count = warnings.len(), "Metadata could not be read for some files");
    }
    info!(
        file_count,
        warning_count = warnings.len(),
        duration_ms = elapsed.as_millis(),
        "Listing build completed"
    );

    Ok(BuildReport {
        document: builder.finish(),
        file_count,
        warnings,
        elapsed,
    })
}

/// Write a finished report to `output`.
pub fn serialize(report: &BuildReport, output: &Path, options: &WriteOptions) -> Result<(), ListingError> {
    write_document(output, &report.document, options)
}
