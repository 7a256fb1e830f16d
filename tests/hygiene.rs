//! Hygiene checks over production sources.
//!
//! Each pattern has a budget, ideally zero. Adding an occurrence means
//! removing another first; budgets only go down.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

/// Assert that `pattern` appears on at most `budget` lines across `src/`.
fn check_budget(pattern: &str, budget: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|f| (f.path.display().to_string(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, n)| n).sum();

    let listing = hits.iter().map(|(p, n)| format!("  {p}: {n}")).collect::<Vec<_>>().join("\n");
    assert!(found <= budget, "`{pattern}` budget exceeded: found {found}, max {budget}.\n{listing}");
}

macro_rules! budget {
    ($($name:ident: $pattern:literal => $max:expr;)*) => {
        $(
            #[test]
            fn $name() {
                check_budget($pattern, $max);
            }
        )*
    };
}

budget! {
    // Panics.
    unwrap_budget: ".unwrap()" => 0;
    expect_budget: ".expect(" => 0;
    panic_budget: "panic!(" => 0;
    unreachable_budget: "unreachable!(" => 0;
    todo_budget: "todo!(" => 0;
    unimplemented_budget: "unimplemented!(" => 0;

    // Errors discarded without a look.
    silent_discard_budget: "let _ =" => 0;
    dot_ok_budget: ".ok()" => 0;

    // Structure.
    allow_dead_code_budget: "#[allow(dead_code)]" => 0;
}
