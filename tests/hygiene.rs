//! Hygiene: production sources under `src/` must not panic or drop errors
//! silently. Browser callbacks have nowhere to surface a panic to a visitor,
//! so failures are logged instead. Every budget is zero.

use std::fs;
use std::path::Path;

/// (pattern, what it means)
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics on None/Err"),
    ("panic!(", "explicit panic"),
    ("unreachable!(", "explicit panic"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "discards a result without inspecting it"),
    (".ok()", "discards an error without logging it"),
    ("#[allow(dead_code)]", "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn is_production(path: &Path) -> bool {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    path.extension().is_some_and(|e| e == "rs") && !name.ends_with("_test.rs") && name != "fake_node.rs"
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
        } else if is_production(&path) {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path.to_string_lossy().into_owned(), content });
            }
        }
    }
}

fn violations(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(i, line)| format!("  {}:{}: {}", file.path, i + 1, line.trim()))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn no_forbidden_patterns() {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);

    let report: Vec<String> = FORBIDDEN
        .iter()
        .filter_map(|(pattern, why)| {
            let hits = violations(&files, pattern);
            (!hits.is_empty()).then(|| format!("`{pattern}` ({why}):\n{}", hits.join("\n")))
        })
        .collect();

    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
