//! File-level generation against a temporary project layout
use std::fs;
use std::path::Path;

use readme_gen::{check, generate, Config, GenerateError};

fn project_with_lib_md(content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    fs::create_dir_all(dir.path().join("src")).expect("create src");
    fs::write(dir.path().join("src/lib.md"), content).expect("write lib.md");
    dir
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}

#[test]
fn test_generate_writes_readme() {
    let dir = project_with_lib_md(
        "text\n```rust extra\n## Title\n# Heading\nbody\n```\nmore\n",
    );
    let config = Config::in_dir(dir.path());

    let stats = generate(&config).expect("generate");

    assert_eq!(
        read(&config.destination),
        "text\n```rust\n# Title\nbody\n```\nmore\n"
    );
    assert_eq!(stats.lines_read, 7);
    assert_eq!(stats.lines_written, 6);
}

#[test]
fn test_crlf_source_gives_lf_readme() {
    let dir = project_with_lib_md(
        "text\r\n```rust extra\r\n## T\r\n# h\r\nbody\r\n```\r\n",
    );
    let config = Config::in_dir(dir.path());

    generate(&config).expect("generate");

    assert_eq!(read(&config.destination), "text\n```rust\n# T\nbody\n```\n");
    assert!(check(&config).expect("check"));
}

#[test]
fn test_generate_overwrites_existing_readme() {
    let dir = project_with_lib_md("short\n");
    let config = Config::in_dir(dir.path());
    fs::write(&config.destination, "a much longer stale readme\nwith lines\n").expect("seed");

    generate(&config).expect("generate");
    assert_eq!(read(&config.destination), "short\n");
}

#[test]
fn test_empty_source_gives_empty_readme() {
    let dir = project_with_lib_md("");
    let config = Config::in_dir(dir.path());

    generate(&config).expect("generate");
    assert_eq!(read(&config.destination), "");
}

#[test]
fn test_missing_source_leaves_readme_alone() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let config = Config::in_dir(dir.path());
    fs::write(&config.destination, "keep me\n").expect("seed");

    let err = generate(&config).unwrap_err();

    assert!(matches!(err, GenerateError::SourceUnreadable { .. }));
    assert_eq!(read(&config.destination), "keep me\n");
}

#[test]
fn test_unwritable_destination() {
    let dir = project_with_lib_md("text\n");
    let mut config = Config::in_dir(dir.path());
    // A directory cannot be opened as a file for writing
    config.destination = dir.path().join("src");

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GenerateError::DestinationUnwritable { .. }));
}

#[test]
fn test_check_reports_fresh_and_stale() {
    let dir = project_with_lib_md("```rust,ignore\n# hidden\nshown\n```\n");
    let config = Config::in_dir(dir.path());

    // No README yet
    assert!(!check(&config).expect("check"));

    generate(&config).expect("generate");
    assert!(check(&config).expect("check"));

    fs::write(dir.path().join("src/lib.md"), "changed\n").expect("edit lib.md");
    assert!(!check(&config).expect("check"));
}

#[test]
fn test_check_never_writes() {
    let dir = project_with_lib_md("text\n");
    let config = Config::in_dir(dir.path());

    check(&config).expect("check");
    assert!(!config.destination.exists());
}
