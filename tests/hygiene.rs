//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` (excluding `*_test.rs`) for antipatterns. Each pattern has a
//! budget; if you must add one, remove an existing one first.

use std::fs;
use std::path::Path;

struct Budget {
    label: &'static str,
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    // Panics — these abort the wasm instance.
    Budget { label: ".unwrap()", pattern: ".unwrap()", max: 0 },
    Budget { label: ".expect()", pattern: ".expect(", max: 0 },
    Budget { label: "panic!()", pattern: "panic!(", max: 0 },
    Budget { label: "unreachable!()", pattern: "unreachable!(", max: 0 },
    Budget { label: "todo!()", pattern: "todo!(", max: 0 },
    Budget { label: "unimplemented!()", pattern: "unimplemented!(", max: 0 },
    // Silent loss — discards errors without inspecting.
    Budget { label: "let _ =", pattern: "let _ =", max: 0 },
    // One optional element cast in dom helpers.
    Budget { label: ".ok()", pattern: ".ok()", max: 1 },
    // Style / structure.
    Budget { label: "#[allow(dead_code)]", pattern: "#[allow(dead_code)]", max: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], matches: impl Fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| matches(line)).count();
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
fn source_tree_is_scanned() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "no sources found under src/");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, |line| line.contains(budget.pattern));
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "{} budget exceeded: found {count}, max {}.\n{}",
                budget.label,
                budget.max,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn credentials_never_logged() {
    let files = source_files();
    let found = hits(&files, |line| {
        let logs = ["log::trace!", "log::debug!", "log::info!", "log::warn!", "log::error!"]
            .iter()
            .any(|m| line.contains(m));
        logs && (line.contains("password") || line.contains("authorization"))
    });
    assert!(found.is_empty(), "log call mentions credentials:\n{}", format_hits(&found));
}

/// Body of `fn <name>` in `source`, up to the next top-level `}`.
fn fn_body<'a>(source: &'a str, name: &str) -> Option<&'a str> {
    let start = source.find(&format!("fn {name}("))?;
    let rest = &source[start..];
    let end = rest.find("\n}\n")?;
    Some(&rest[..end])
}

#[test]
fn boot_isolates_page_specific_setup() {
    let source = fs::read_to_string("src/app.rs").expect("src/app.rs");
    let body = fn_body(&source, "boot").expect("fn boot in src/app.rs");

    let spawn = body.find("spawn_local").expect("boot spawns fragment injection");
    for call in ["install_login(", "show_banner("] {
        let at = body.find(call).unwrap_or_else(|| panic!("boot calls {call}"));
        assert!(spawn < at, "fragment injection must start before {call}");
        let line = body[at..].lines().next().unwrap_or_default();
        let stmt_start = body[..at].rfind('\n').map_or(0, |i| i + 1);
        let stmt = &body[stmt_start..at + line.len()];
        assert!(stmt.contains("if let Err("), "{call} failure must be logged, not propagated: {stmt}");
        assert!(!stmt.contains(")?"), "{call} must not use `?` in boot: {stmt}");
    }
}
