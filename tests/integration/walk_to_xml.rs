//! Integration tests for walking a directory and rendering it as XML

use super::test_utils::{assert_well_formed, create_sample_tree};
use std::fs;
use tempfile::TempDir;
use xml_listing::config::{Convention, FormatConfig};
use xml_listing::listing::{build, enumerate, serialize, BuildOptions, PathSource, SilentObserver};
use xml_listing::metadata::CaptureFlags;
use xml_listing::tree::walker::WalkerConfig;
use xml_listing::xml::writer::WriteOptions;

fn walk(root: &std::path::Path, config: WalkerConfig) -> Vec<String> {
    let source = PathSource::Walk {
        root: root.to_path_buf(),
        config,
    };
    enumerate(&source, &mut SilentObserver).unwrap()
}

/// Test that every file lands inside the directory element it lives in
#[test]
fn test_walk_nests_files_under_their_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    create_sample_tree(&root);

    let paths = walk(&root, WalkerConfig::default());
    let report = build(&paths, &BuildOptions::default()).unwrap();
    let doc = &report.document;

    assert_eq!(report.file_count, 4);
    assert!(report.warnings.is_empty());
    assert_well_formed(doc);

    let pos = |needle: &str| doc.find(needle).unwrap_or_else(|| panic!("{} missing", needle));
    assert!(pos("<name>data</name>") < pos("<name>top.txt</name>"));
    assert!(pos("<name>top.txt</name>") < pos("<name>a</name>"));
    assert!(pos("<name>a</name>") < pos("<name>f1.txt</name>"));
    assert!(pos("<name>f2.txt</name>") < pos("<name>b</name>"));
    assert!(pos("<name>b</name>") < pos("<name>f3.txt</name>"));
}

/// Test that file names are indented one level deeper than their directory name
#[test]
fn test_walk_indentation_tracks_depth() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    create_sample_tree(&root);

    let paths = walk(&root, WalkerConfig::default());
    let doc = build(&paths, &BuildOptions::default()).unwrap().document;

    let indent_of = |needle: &str| {
        let line = doc.lines().find(|l| l.trim() == needle).unwrap();
        line.len() - line.trim_start_matches('\t').len()
    };
    assert_eq!(indent_of("<name>a</name>") + 1, indent_of("<name>f1.txt</name>"));
    assert_eq!(indent_of("<name>data</name>") + 1, indent_of("<name>top.txt</name>"));
    assert_eq!(indent_of("<name>a</name>"), indent_of("<name>b</name>"));
}

/// Test that excluded directories and their contents are not listed
#[test]
fn test_walk_respects_exclusions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    create_sample_tree(&root);
    fs::create_dir_all(root.join(".git").join("objects")).unwrap();
    fs::write(root.join(".git").join("objects").join("pack"), "x").unwrap();

    let config = WalkerConfig {
        ignore_patterns: vec![".git".to_string()],
        ..WalkerConfig::default()
    };
    let paths = walk(&root, config);
    let doc = build(&paths, &BuildOptions::default()).unwrap().document;

    assert!(!doc.contains(".git"));
    assert!(!doc.contains("<name>pack</name>"));
    assert_eq!(doc.matches("<file>").count(), 4);
}

/// Test that a written listing carries the declaration and captured sizes
#[test]
fn test_written_listing_includes_declaration_and_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    create_sample_tree(&root);
    let out = temp_dir.path().join("listing.xml");

    let options = BuildOptions {
        capture: CaptureFlags {
            size: true,
            modified: true,
            ..CaptureFlags::default()
        },
        ..BuildOptions::default()
    };
    let paths = walk(&root, WalkerConfig::default());
    let report = build(&paths, &options).unwrap();
    serialize(&report, &out, &WriteOptions::default()).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<directory>"));
    assert!(written.contains("<size>5</size>"));
    assert_eq!(written.matches("<modified_time>").count(), 4);
    assert!(!written.contains("<accessed_time>"));
    assert_well_formed(&written);
}

/// Test that the windows preset writes CRLF line endings in Latin-1
#[test]
fn test_windows_preset_writes_crlf_latin1() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("café.txt"), "x").unwrap();
    let out = temp_dir.path().join("listing.xml");

    let format = FormatConfig {
        convention: Convention::Windows,
        separator: Some(std::path::MAIN_SEPARATOR.to_string()),
        ..FormatConfig::default()
    };
    let options = BuildOptions {
        style: format.path_style(),
        format: format.document_format(),
        ..BuildOptions::default()
    };
    let paths = walk(&root, WalkerConfig::default());
    let report = build(&paths, &options).unwrap();
    serialize(&report, &out, &format.write_options()).unwrap();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\r\n"));
    assert!(bytes.windows(b"caf\xE9.txt".len()).any(|w| w == b"caf\xE9.txt"));
    let lf_only = bytes
        .iter()
        .enumerate()
        .filter(|(i, b)| **b == b'\n' && (*i == 0 || bytes[i - 1] != b'\r'))
        .count();
    assert_eq!(lf_only, 0);
}

/// Test that an empty directory produces an empty body and no error
#[test]
fn test_empty_directory_yields_no_elements() {
    let temp_dir = TempDir::new().unwrap();

    let paths = walk(temp_dir.path(), WalkerConfig::default());
    let report = build(&paths, &BuildOptions::default()).unwrap();

    assert_eq!(report.file_count, 0);
    assert!(report.document.is_empty());
}
