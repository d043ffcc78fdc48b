//! Property-based tests for directory open/close balance

use proptest::prelude::*;
use xml_listing::listing::{build, BuildOptions};
use xml_listing::tree::delta::{track, DeltaTracker, TreeEvent, INITIAL_DEPTH};
use xml_listing::tree::path::{directory_of, PathStyle};

/// Directory-grouped absolute path lists under `/r`.
///
/// Sorting by the directory components keeps each directory's files
/// contiguous and visits parents before their children.
fn grouped_paths() -> impl Strategy<Value = Vec<String>> {
    let dirs = prop::collection::vec(prop::sample::select(vec!["a", "b", "ab", "c"]), 0..4);
    let file = prop::sample::select(vec!["f1", "f2", "x.txt"]);
    prop::collection::vec((dirs, file), 1..24).prop_map(|mut entries| {
        entries.sort();
        entries
            .into_iter()
            .map(|(dirs, file)| {
                let mut path = String::from("/r");
                for dir in dirs {
                    path.push('/');
                    path.push_str(dir);
                }
                path.push('/');
                path.push_str(file);
                path
            })
            .collect()
    })
}

/// Test that the depth counter returns to its initial value
#[test]
fn test_depth_returns_to_initial_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&grouped_paths(), |paths| {
            let mut tracker = DeltaTracker::new(PathStyle::unix());
            let mut events = Vec::new();
            for path in &paths {
                tracker.advance(path, &mut events).unwrap();
                prop_assert!(tracker.depth() > INITIAL_DEPTH);
            }
            tracker.finish(&mut events);
            prop_assert_eq!(tracker.depth(), INITIAL_DEPTH);
            Ok(())
        })
        .unwrap();
}

proptest! {
    /// Closes mirror opens, and every file sits in the directory its path names
    #[test]
    fn test_stack_discipline_property(paths in grouped_paths()) {
        let events = track(&paths, &PathStyle::unix()).unwrap();
        let mut stack: Vec<(String, i64)> = Vec::new();
        let mut files = 0usize;

        for event in &events {
            match event {
                TreeEvent::OpenDirectory { name, depth } => {
                    prop_assert_eq!(*depth, stack.len() as i64);
                    stack.push((name.to_string(), *depth));
                }
                TreeEvent::CloseDirectory { depth } => {
                    let (_, opened_at) = stack.pop().expect("close without open");
                    prop_assert_eq!(*depth, opened_at);
                }
                TreeEvent::File { path, depth } => {
                    files += 1;
                    prop_assert_eq!(*depth, stack.len() as i64 - 1);
                    let rebuilt: Vec<&str> = stack.iter().map(|(name, _)| name.as_str()).collect();
                    prop_assert_eq!(format!("/{}", rebuilt.join("/")), directory_of(path, '/'));
                }
            }
        }

        prop_assert!(stack.is_empty());
        prop_assert_eq!(files, paths.len());
    }

    /// Rendered documents have as many closing tags as opening tags, in order
    #[test]
    fn test_document_tags_balance_property(paths in grouped_paths()) {
        let report = build(&paths, &BuildOptions::default()).unwrap();
        let mut open: Vec<&str> = Vec::new();

        for line in report.document.lines().map(str::trim) {
            if let Some(tag) = line.strip_prefix("</") {
                let closed = open.pop().expect("closing tag without opening tag");
                prop_assert_eq!(closed, tag.trim_end_matches('>'));
            } else if !line.contains("</") {
                open.push(line.trim_start_matches('<').trim_end_matches('>'));
            }
        }

        prop_assert!(open.is_empty());
        prop_assert_eq!(report.file_count as usize, paths.len());
        prop_assert_eq!(report.warnings.len(), paths.len());
    }
}
