//! Tree-delta tracking
//!
//! Rebuilds the directory hierarchy of a flat, directory-grouped path list by
//! comparing the directory portion of each path with that of the previous one.
//! No tree is materialized: the depth counter and the order of emitted events
//! are the only structure. Every opened directory is closed exactly once, in
//! reverse order of opening.

use crate::error::ListingError;
use crate::tree::path::{self, PathStyle};
use std::borrow::Cow;

/// Depth counter value while no directory is open
pub const INITIAL_DEPTH: i64 = -1;

/// Structural event produced while walking a path list.
///
/// `depth` is the depth counter value the event is rendered at: the new depth
/// for an open, the depth being left for a close, and the depth of the
/// enclosing directory for a file (`-1` at top level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent<'a> {
    OpenDirectory { name: Cow<'a, str>, depth: i64 },
    CloseDirectory { depth: i64 },
    File { path: &'a str, depth: i64 },
}

/// Incremental tracker carrying the previous directory and the depth counter
#[derive(Debug, Clone)]
pub struct DeltaTracker {
    style: PathStyle,
    previous_directory: String,
    depth: i64,
    first_level: bool,
}

impl DeltaTracker {
    pub fn new(style: PathStyle) -> Self {
        Self {
            style,
            previous_directory: String::new(),
            depth: INITIAL_DEPTH,
            first_level: true,
        }
    }

    /// Current value of the depth counter
    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Process the next path, appending the directory closes and opens it
    /// requires followed by its `File` event.
    pub fn advance<'a>(
        &mut self,
        file_path: &'a str,
        events: &mut Vec<TreeEvent<'a>>,
    ) -> Result<(), ListingError> {
        let separator = self.style.separator;
        let current = path::directory_of(file_path, separator);

        if current != self.previous_directory {
            if self.is_descent(current) {
                let suffix = &current[self.previous_directory.len()..];
                self.open_levels(path::segments(suffix, separator), events);
            } else {
                let ancestor_len = self.common_ancestor_len(current)?;
                let closing =
                    path::segments(&self.previous_directory[ancestor_len..], separator).len();
                self.close_levels(closing, events);
                let opening = current.get(ancestor_len..).unwrap_or("");
                self.open_levels(path::segments(opening, separator), events);
            }
            self.previous_directory.clear();
            self.previous_directory.push_str(current);
        }

        events.push(TreeEvent::File {
            path: file_path,
            depth: self.depth,
        });
        Ok(())
    }

    /// Close every directory still open, returning the depth counter to
    /// [`INITIAL_DEPTH`].
    pub fn finish(&mut self, events: &mut Vec<TreeEvent<'_>>) {
        let open = (self.depth - INITIAL_DEPTH) as usize;
        self.close_levels(open, events);
        self.previous_directory.clear();
    }

    fn is_descent(&self, current: &str) -> bool {
        let separator = self.style.separator;
        let previous = self.previous_directory.as_str();
        if previous.is_empty() {
            return true;
        }
        path::is_bounded_prefix(previous, current, separator)
            && path::last_separator(current, separator) > path::last_separator(previous, separator)
    }

    /// Length of the nearest ancestor of the previous directory that also
    /// contains `current`.
    fn common_ancestor_len(&self, current: &str) -> Result<usize, ListingError> {
        let separator = self.style.separator;
        let current_root = path::root_component(current, separator);
        let mut candidate = self.previous_directory.as_str();

        loop {
            let parent = path::directory_of(candidate, separator);
            let shares_root = parent
                .strip_suffix(separator)
                .is_some_and(|root| root == current_root);
            if parent.len() < current.len()
                && (path::is_bounded_prefix(parent, current, separator)
                    || (shares_root && current.starts_with(parent)))
            {
                return Ok(parent.len());
            }
            if parent == candidate {
                return Err(ListingError::NoCommonAncestor {
                    previous: self.previous_directory.clone(),
                    current: current.to_string(),
                });
            }
            candidate = parent;
        }
    }

    fn open_levels<'a>(&mut self, names: Vec<&'a str>, events: &mut Vec<TreeEvent<'a>>) {
        for name in names {
            self.depth += 1;
            let name = if self.first_level {
                self.first_level = false;
                self.root_name(name)
            } else {
                Cow::Borrowed(name)
            };
            events.push(TreeEvent::OpenDirectory {
                name,
                depth: self.depth,
            });
        }
    }

    fn close_levels(&mut self, count: usize, events: &mut Vec<TreeEvent<'_>>) {
        for _ in 0..count {
            debug_assert!(self.depth > INITIAL_DEPTH, "closing more levels than opened");
            events.push(TreeEvent::CloseDirectory { depth: self.depth });
            self.depth -= 1;
        }
    }

    fn root_name<'a>(&self, segment: &'a str) -> Cow<'a, str> {
        if self.style.root_prefix {
            let separator = self.style.separator;
            Cow::Owned(format!("{separator}{separator}{segment}"))
        } else {
            Cow::Borrowed(segment)
        }
    }
}

/// Run a whole path list through a fresh tracker.
pub fn track<'a, S: AsRef<str>>(
    paths: &'a [S],
    style: &PathStyle,
) -> Result<Vec<TreeEvent<'a>>, ListingError> {
    let mut tracker = DeltaTracker::new(style.clone());
    let mut events = Vec::new();
    for file_path in paths {
        tracker.advance(file_path.as_ref(), &mut events)?;
    }
    tracker.finish(&mut events);
    Ok(events)
}
