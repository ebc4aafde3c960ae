//! Hygiene: enforces coding standards at test time
//!
//! Scans `src/` for antipatterns. Each pattern has a budget; if you must add
//! one, fix an existing one first. The budget never grows.

use std::fs;
use std::path::Path;

/// `(pattern, budget)` for production sources.
const BUDGETS: &[(&str, usize)] = &[
    // Panics: a panic in the page script kills every listener.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss. The two `.ok()` are `dyn_into` casts where a mismatch
    // means "not this element".
    ("let _ =", 0),
    (".ok()", 2),
    ("#[allow(dead_code)]", 0),
    ("allow(clippy::unused_async)", 0),
];

/// Dependencies only the browser build uses; they must stay behind `hydrate`.
const BROWSER_ONLY_DEPS: &[&str] = &[
    "console_error_panic_hook",
    "console_log",
    "log",
    "wasm-bindgen",
    "wasm-bindgen-futures",
    "gloo-net",
    "gloo-timers",
    "web-sys",
    "js-sys",
];

/// Directories whose modules must build without a browser.
const NATIVE_DIRS: &[&str] = &["src/state"];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files(root: &str) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(root), &mut files);
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
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files("src");
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files("src");
    let mut failures = Vec::new();
    for (pattern, max) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            failures.push(format!("{pattern} budget exceeded: found {count}, max {max}.\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn state_modules_stay_browser_free() {
    for dir in NATIVE_DIRS {
        let files = source_files(dir);
        for pattern in ["web_sys", "wasm_bindgen", "js_sys", "gloo_"] {
            let found = hits(&files, pattern);
            assert!(found.is_empty(), "{pattern} used in {dir}:\n{}", format_hits(&found));
        }
    }
}

#[test]
fn browser_only_deps_are_optional() {
    let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
    for dep in BROWSER_ONLY_DEPS {
        let line = manifest
            .lines()
            .find(|line| line.starts_with(&format!("{dep} =")))
            .unwrap_or_else(|| panic!("{dep} missing from Cargo.toml"));
        assert!(line.contains("optional = true"), "{dep} is not optional: {line}");
        assert!(manifest.contains(&format!("\"dep:{dep}\"")), "{dep} not enabled by hydrate");
    }
}
