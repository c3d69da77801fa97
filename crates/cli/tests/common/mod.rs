//! Shared test utilities for evalkit integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a working directory layout for `.env` discovery tests.
//!
//! Invariants / Assumptions:
//! - Commands start from an empty environment; tests set every key they need.
//! - `DOTENV_DISABLED=1` is set unless a test removes it explicitly.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `evalkit` command for integration testing.
///
/// It ensures:
/// - The host environment is cleared so no real configuration leaks in.
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
pub fn evalkit_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("evalkit");
    cmd.env_clear();
    cmd.env("DOTENV_DISABLED", "1");
    cmd
}

/// Returns an `evalkit` command with every default required key set.
#[allow(dead_code)]
pub fn evalkit_cmd_with_required() -> Command {
    let mut cmd = evalkit_cmd();
    cmd.env("DB_USER", "evaluator")
        .env("DB_PASSWORD", "db-password-value")
        .env("DB_NAME", "evaluations")
        .env("JWT_SECRET", "jwt-secret-value");
    cmd
}

/// A temporary project root with a nested service directory.
///
/// The service directory is the working directory, so the parent-directory
/// candidate stays inside the temporary tree.
#[allow(dead_code)]
pub struct Workspace {
    pub root: TempDir,
    pub service_dir: PathBuf,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        let service_dir = root.path().join("service");
        std::fs::create_dir_all(&service_dir).expect("create service dir");
        Self { root, service_dir }
    }

    /// Write `contents` to `name` inside the service directory.
    pub fn write_service_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.service_dir.join(name);
        std::fs::write(&path, contents).expect("write service file");
        path
    }

    /// Write `contents` to `.env` in the project root.
    pub fn write_root_env(&self, contents: &str) -> PathBuf {
        let path = self.root.path().join(".env");
        std::fs::write(&path, contents).expect("write root .env");
        path
    }

    /// An `evalkit` command running in the service directory with discovery enabled.
    pub fn cmd(&self) -> Command {
        let mut cmd = evalkit_cmd();
        cmd.env_remove("DOTENV_DISABLED");
        cmd.current_dir(&self.service_dir);
        cmd
    }
}
