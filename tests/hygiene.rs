//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production source tree for antipatterns. Panicking macros have
//! a budget of zero: this crate runs inside the page and must never take it
//! down. DOM glue legitimately discards some `Result`s from calls that
//! cannot meaningfully fail (attribute sets, class-list adds), so the
//! discard budgets are non-zero but ratcheted — if you must add one, fix an
//! existing one first; a budget never grows.

use std::fs;
use std::path::Path;

/// Pattern and maximum number of source lines allowed to contain it.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("#[allow(dead_code)]", 0),
    ("let _ =", 24),
    (".ok()", 9),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test side files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_budgets_hold() {
    let files = source_files();
    for (pattern, budget) in BUDGETS {
        let found = hits(&files, pattern);
        let total: usize = found.iter().map(|(_, count)| count).sum();
        let detail = found
            .iter()
            .map(|(path, count)| format!("  {path}: {count}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(
            total <= *budget,
            "`{pattern}` budget exceeded: found {total}, max {budget}.\n{detail}"
        );
    }
}
