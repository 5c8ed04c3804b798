//! Integration Test: Headless Core Enforcement
//!
//! **Policy**: `anzan-core` is pure drill logic. It MUST NOT reference a UI
//! framework or an async runtime; all time is injected through
//! `Drill::tick`, so it must not read a clock either.
//!
//! The TUI crate is the only place ratatui/crossterm/tokio belong. Keeping
//! the core headless is what lets every drill scenario run as a plain
//! synchronous test.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Tokens that must never appear in core sources.
const FORBIDDEN_IN_CORE: &[&str] = &[
    "ratatui",
    "crossterm",
    "tokio",
    "Instant::now",
    "SystemTime::now",
];

fn core_src() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../core/src")
}

fn core_manifest() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../core/Cargo.toml")
}

/// Scan a source tree for forbidden tokens, collecting `file:line: token`
/// descriptions of every hit.
fn find_violations(root: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let path = entry.path();
        let contents = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));

        for (line_number, line) in contents.lines().enumerate() {
            // Doc comments may legitimately name the forbidden crates
            // ("this crate has zero dependencies on ratatui"); only code
            // counts as a violation.
            let code = line.split("//").next().unwrap_or(line);
            for token in forbidden {
                if code.contains(token) {
                    violations.push(format!(
                        "{}:{}: {token}",
                        path.display(),
                        line_number + 1
                    ));
                }
            }
        }
    }

    violations
}

#[test]
fn test_core_sources_are_headless() {
    let violations = find_violations(&core_src(), FORBIDDEN_IN_CORE);

    assert!(
        violations.is_empty(),
        "UI/runtime references found in anzan-core:\n  {}",
        violations.join("\n  ")
    );
}

#[test]
fn test_core_manifest_declares_no_ui_dependencies() {
    let manifest = fs::read_to_string(core_manifest()).expect("core Cargo.toml readable");

    for forbidden in ["ratatui", "crossterm", "tokio"] {
        assert!(
            !manifest.contains(forbidden),
            "anzan-core Cargo.toml must not depend on {forbidden}"
        );
    }
}
