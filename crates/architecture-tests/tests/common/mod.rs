//! Shared helpers for architecture tests.
//!
//! Invariants:
//! - Paths are resolved from the workspace root, not the test's working directory.
//! - The architecture-tests crate is never scanned, since its sources quote
//!   the patterns the other tests search for.

use std::fs;
use std::path::{Path, PathBuf};

/// Find the workspace root by looking for Cargo.toml with [workspace].
pub fn find_workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

/// Every `.rs` file under `crates/`, skipping build output and this crate.
pub fn workspace_rust_files(workspace_root: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(workspace_root.join("crates"))
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Whether `path` holds test code only (integration tests or a test module file).
#[allow(dead_code)]
pub fn is_test_path(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/") || path_str.ends_with("_tests.rs")
}

/// `path` relative to `workspace_root`, with `/` separators.
#[allow(dead_code)]
pub fn relative_path(workspace_root: &Path, path: &Path) -> String {
    path.strip_prefix(workspace_root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// The part of a source file before its first `#[cfg(test)]` item.
#[allow(dead_code)]
pub fn production_section(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(index) => &content[..index],
        None => content,
    }
}

/// Scan production code under `workspace_root/crates` for `patterns`.
///
/// Files listed in `allowed` are skipped. When `scoped_to` is non-empty,
/// only files under one of those prefixes are scanned. Each violation is
/// reported as `path:line: contains `pattern``.
#[allow(dead_code)]
pub fn production_violations(
    workspace_root: &Path,
    patterns: &[&str],
    allowed: &[&str],
    scoped_to: &[&str],
) -> Vec<String> {
    let mut violations = Vec::new();
    for path in workspace_rust_files(workspace_root) {
        if is_test_path(&path) {
            continue;
        }
        let relative = relative_path(workspace_root, &path);
        if allowed.contains(&relative.as_str()) {
            continue;
        }
        if !scoped_to.is_empty() && !scoped_to.iter().any(|dir| relative.starts_with(dir)) {
            continue;
        }

        let content = fs::read_to_string(&path).unwrap_or_default();
        for (index, line) in production_section(&content).lines().enumerate() {
            for pattern in patterns {
                if line.contains(pattern) {
                    violations.push(format!("{relative}:{}: contains `{pattern}`", index + 1));
                }
            }
        }
    }
    violations
}
