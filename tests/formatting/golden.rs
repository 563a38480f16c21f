use std::fs;
use std::path::Path;

use swalpa::formatting::*;
use swalpa::library;
use swalpa::parsing;

/// Golden test for the tree command
///
/// Each .sw file in tests/golden/ is compiled and printed back out. The
/// files are kept in canonical form, including the classes each element
/// gains from its kind and its parent, so printing must reproduce them
/// exactly.

/// Simple diff function to show line-by-line differences
fn show_diff(original: &str, formatted: &str, file_path: &Path) {
    let original_lines: Vec<&str> = original
        .lines()
        .collect();
    let formatted_lines: Vec<&str> = formatted
        .lines()
        .collect();

    let max_lines = original_lines
        .len()
        .max(formatted_lines.len());

    println!("\nDifferences found in file: {:?}", file_path);
    println!("--- Original");
    println!("+++ Printed");

    for i in 0..max_lines {
        let orig_line = original_lines
            .get(i)
            .unwrap_or(&"");
        let fmt_line = formatted_lines
            .get(i)
            .unwrap_or(&"");

        if orig_line != fmt_line {
            println!("@@ Line {} @@", i + 1);
            println!("- {}", orig_line);
            println!("+ {}", fmt_line);
        }
    }
}

#[test]
fn ensure_identical_output() {
    let dir = Path::new("tests/golden/");

    assert!(dir.exists(), "golden directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read golden directory");
    let registry = library::standard();

    let mut failures = Vec::new();
    let mut count = 0;

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path
            .extension()
            .and_then(|s| s.to_str())
            != Some("sw")
        {
            continue;
        }
        count += 1;

        let content = parsing::load(&path)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", path, e));
        let original = String::from_utf8(content)
            .unwrap_or_else(|e| panic!("Golden file {:?} is not valid UTF-8: {}", path, e));
        let tree = parsing::compile(&registry, &original)
            .unwrap_or_else(|e| panic!("Failed to compile file {:?}: {}", path, e));
        let printed = render(&Identity, &tree)
            .unwrap_or_else(|e| panic!("Failed to print file {:?}: {}", path, e));

        if original != printed {
            show_diff(&original, &printed, &path);
            failures.push(path);
        }
    }

    assert!(count > 0, "No .sw files found in golden directory");

    if !failures.is_empty() {
        panic!(
            "Golden files should print identically, but {} files differed",
            failures.len()
        );
    }
}
