//! Integration tests for listings built from a path-list file

use super::test_utils::assert_well_formed;
use std::fs;
use tempfile::TempDir;
use xml_listing::error::ListingError;
use xml_listing::listing::{build, enumerate, BuildOptions, PathSource, SilentObserver};
use xml_listing::metadata::CaptureFlags;
use xml_listing::tree::path::PathStyle;

fn paths_from(contents: &str) -> Vec<String> {
    let temp_dir = TempDir::new().unwrap();
    let list = temp_dir.path().join("paths.txt");
    fs::write(&list, contents).unwrap();
    enumerate(&PathSource::ListFile(list), &mut SilentObserver).unwrap()
}

/// Test the exact document for two sibling directories under one root
#[test]
fn test_sibling_directories_document() {
    let paths = paths_from(
        "/listing-fixture/a/f1.txt\n/listing-fixture/a/f2.txt\n/listing-fixture/b/f3.txt\n",
    );
    let report = build(&paths, &BuildOptions::default()).unwrap();

    let expected = "\
<directory>
\t<name>listing-fixture</name>
\t<directory>
\t\t<name>a</name>
\t\t<file>
\t\t\t<name>f1.txt</name>
\t\t</file>
\t\t<file>
\t\t\t<name>f2.txt</name>
\t\t</file>
\t</directory>
\t<directory>
\t\t<name>b</name>
\t\t<file>
\t\t\t<name>f3.txt</name>
\t\t</file>
\t</directory>
</directory>
";
    assert_eq!(report.document, expected);
    assert_eq!(report.file_count, 3);
}

/// Test that missing files still appear, each reported once as a warning
#[test]
fn test_missing_files_are_listed_without_metadata() {
    let paths = paths_from("/listing-fixture/a/gone.txt\n/listing-fixture/a/also-gone.txt\n");
    let options = BuildOptions {
        capture: CaptureFlags::all(),
        ..BuildOptions::default()
    };
    let report = build(&paths, &options).unwrap();

    assert_eq!(report.warnings, paths);
    assert!(report.document.contains("<name>gone.txt</name>"));
    assert!(!report.document.contains("<size>"));
    assert_well_formed(&report.document);
}

/// Test that the root prefix policy renames only the first directory
#[test]
fn test_root_prefix_names_first_directory() {
    let paths = paths_from("/listing-fixture/a/f1.txt\n/listing-fixture/b/f2.txt\n");
    let options = BuildOptions {
        style: PathStyle::unix().with_root_prefix(true),
        ..BuildOptions::default()
    };
    let doc = build(&paths, &options).unwrap().document;

    assert!(doc.contains("<name>//listing-fixture</name>"));
    assert!(doc.contains("<name>a</name>"));
    assert!(doc.contains("<name>b</name>"));
}

/// Test that special characters in names are escaped
#[test]
fn test_names_are_escaped() {
    let paths = paths_from("/listing-fixture/R&D/<draft>.txt\n");
    let doc = build(&paths, &BuildOptions::default()).unwrap().document;

    assert!(doc.contains("<name>R&amp;D</name>"));
    assert!(doc.contains("<name>&lt;draft&gt;.txt</name>"));
    assert_well_formed(&doc);
}

/// Test that a directory revisited in an ungrouped list is opened again
#[test]
fn test_ungrouped_list_reopens_directory() {
    let paths = paths_from("/r/a/f1\n/r/b/f2\n/r/a/f3\n");
    let doc = build(&paths, &BuildOptions::default()).unwrap().document;

    assert_eq!(doc.matches("<name>a</name>").count(), 2);
    assert_well_formed(&doc);
}

/// Test that relative paths with different first components are rejected
#[test]
fn test_unrelated_relative_paths_fail() {
    let paths = paths_from("a/b/f1\nc/f2\n");
    let err = build(&paths, &BuildOptions::default()).unwrap_err();

    assert!(matches!(err, ListingError::NoCommonAncestor { .. }));
}

/// Test that a missing list file is reported with its path
#[test]
fn test_missing_list_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let list = temp_dir.path().join("absent.txt");

    let err = enumerate(&PathSource::ListFile(list.clone()), &mut SilentObserver).unwrap_err();
    match err {
        ListingError::ListFile { path, .. } => assert_eq!(path, list),
        other => panic!("unexpected error: {other}"),
    }
}
