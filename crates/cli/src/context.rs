//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Capture the process environment once into an immutable snapshot.
//! - Merge `.env` sources into that snapshot before any command runs.
//! - Hand commands a resolver and a typed-config loader bound to the snapshot.
//!
//! Does NOT handle:
//! - CLI argument definitions (see `args` module).
//! - Printing results (see `commands` and `formatters`).
//!
//! Invariants:
//! - The process environment is never mutated; commands only see the snapshot.
//! - Variables already set in the process take precedence over every file.
//! - A missing `--env-file` is skipped like any candidate, but with a warning.

use evalkit_config::{
    ConfigError, ConfigLoader, EnvSnapshot, LoadReport, Resolver, Service, ServiceConfig,
    SourceLoader,
};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::args::Cli;

/// Everything a command needs to resolve configuration.
pub(crate) struct ConfigContext {
    snapshot: EnvSnapshot,
    service: Service,
    prefix: String,
    candidates: Vec<PathBuf>,
    report: LoadReport,
}

impl ConfigContext {
    /// Build the context for `cli`, discovering `.env` files relative to `base_dir`.
    pub(crate) fn load(cli: &Cli, base_dir: &Path) -> Self {
        let service = cli.service;
        let prefix = cli
            .prefix_override()
            .unwrap_or_else(|| service.prefix())
            .to_string();

        let sources =
            SourceLoader::for_service(service, base_dir).with_leading_candidates(&cli.env_files);
        let candidates = sources.candidates().to_vec();

        let mut snapshot = EnvSnapshot::from_process();
        let report = if cli.no_dotenv {
            LoadReport {
                disabled: true,
                ..LoadReport::default()
            }
        } else {
            for path in cli.env_files.iter().filter(|path| !path.exists()) {
                warn!(path = %path.display(), "File passed with --env-file does not exist");
            }
            sources.load_into(&mut snapshot)
        };

        Self {
            snapshot,
            service,
            prefix,
            candidates,
            report,
        }
    }

    pub(crate) fn service(&self) -> Service {
        self.service
    }

    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub(crate) fn report(&self) -> &LoadReport {
        &self.report
    }

    /// A resolver over the snapshot using the effective prefix.
    pub(crate) fn resolver(&self) -> Resolver<&EnvSnapshot> {
        Resolver::for_service(&self.snapshot, self.service).with_prefix(self.prefix.as_str())
    }

    /// Build the typed configuration from the snapshot.
    pub(crate) fn build_config(&self) -> Result<ServiceConfig, ConfigError> {
        ConfigLoader::for_service(self.service)
            .with_prefix(self.prefix.clone())
            .build_from(&self.snapshot)
    }
}
