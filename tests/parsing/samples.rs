use std::fs;
use std::path::{Path, PathBuf};

use swalpa::library;
use swalpa::parsing;

fn documents(dir: &Path) -> Vec<PathBuf> {
    assert!(dir.exists(), "{:?} directory missing", dir);

    let entries = fs::read_dir(dir).expect("Failed to read directory");

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path
            .extension()
            .and_then(|s| s.to_str())
            == Some("sw")
        {
            files.push(path);
        }
    }

    assert!(!files.is_empty(), "No .sw files found in {:?}", dir);
    files
}

#[test]
fn ensure_samples_compile() {
    let files = documents(Path::new("tests/samples/"));
    let registry = library::standard();

    let mut failures = Vec::new();

    for file in &files {
        let content = parsing::load(&file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        match parsing::compile(&registry, &content) {
            Ok(_) => {}
            Err(e) => {
                println!("File {:?} failed to compile: {}", file, e);
                failures.push(file.clone());
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "Sample files should compile successfully, but {} files failed",
            failures.len()
        );
    }
}

#[test]
fn ensure_broken_fail() {
    let files = documents(Path::new("tests/broken/"));
    let registry = library::standard();

    let mut unexpected_successes = Vec::new();

    for file in &files {
        let content = parsing::load(&file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        match parsing::compile(&registry, &content) {
            Ok(_) => {
                println!("File {:?} unexpectedly compiled successfully", file);
                unexpected_successes.push(file.clone());
            }
            Err(e) => {
                assert!(e.line() > 0, "File {:?} gave error without a line: {}", file, e);
            }
        }
    }

    if !unexpected_successes.is_empty() {
        panic!(
            "Broken files should not compile successfully, but {} files passed",
            unexpected_successes.len()
        );
    }
}

#[test]
fn unreadable_lines_are_skipped() {
    let file = Path::new("tests/samples/unreadable-line.sw");
    let registry = library::standard();

    let content = parsing::load(file)
        .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));
    let tree = parsing::compile(&registry, &content)
        .unwrap_or_else(|e| panic!("File {:?} failed to compile: {}", file, e));

    let names: Vec<&str> = tree
        .nodes()
        .iter()
        .map(|node| node.name())
        .collect();
    assert_eq!(names, vec!["div", "paragraph"]);

    let warnings = tree.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line, 2);
}
