//! `.env` source discovery and merging.
//!
//! Responsibilities:
//! - Check an ordered list of candidate paths for `.env`-style files.
//! - Parse every existing candidate as `KEY=VALUE` lines via `dotenvy`.
//! - Merge parsed entries into an `EnvSnapshot` or the process environment.
//!
//! Values are literal: `$NAME` and `${NAME}` are never expanded, so both
//! merge targets receive exactly the entries `discover` parsed.
//!
//! Does NOT handle:
//! - Prefix-fallback resolution (see resolver.rs).
//!
//! Invariants / Assumptions:
//! - Candidate order is precedence: the first file defining a key wins.
//! - Keys already set (ambient environment or an earlier file) are never overridden.
//! - Missing candidates are skipped silently; unreadable or malformed candidates
//!   are logged, recorded as `FileDiscoveryFailure`, and skipped as a whole.
//! - Loading never fails.
//! - The `DOTENV_DISABLED` variable is checked before any candidate is read.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::env::{EnvSnapshot, EnvSource, ProcessEnv};
use super::error::{ConfigError, DiscoveryFailureReason};
use crate::constants::{DOTENV_DISABLED_VAR, DOTENV_FILE_NAME};
use crate::types::Service;

/// Default candidate paths for a service, in precedence order:
/// `<base>/.env.<service>`, `<base>/.env`, `<base>/../.env`.
pub fn default_candidates(service: Service, base_dir: &Path) -> Vec<PathBuf> {
    vec![
        base_dir.join(service.dotenv_file_name()),
        base_dir.join(DOTENV_FILE_NAME),
        base_dir.join("..").join(DOTENV_FILE_NAME),
    ]
}

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        ProcessEnv.get(DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    )
}

/// A candidate file that was found and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Entries in file order.
    pub entries: Vec<(String, String)>,
}

/// Result of checking every candidate path.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Files that were read successfully, in candidate order.
    pub files: Vec<SourceFile>,
    /// Candidates that existed but were skipped.
    pub failures: Vec<ConfigError>,
    /// True when `DOTENV_DISABLED` suppressed discovery.
    pub disabled: bool,
}

/// Outcome of merging discovered files into an environment variable set.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Files whose entries were merged, in candidate order.
    pub loaded: Vec<PathBuf>,
    /// Candidates that existed but were skipped.
    pub failures: Vec<ConfigError>,
    /// Number of keys that were not previously set.
    pub keys_added: usize,
    /// True when `DOTENV_DISABLED` suppressed loading.
    pub disabled: bool,
}

impl LoadReport {
    fn from_discovery(discovery: &Discovery) -> Self {
        Self {
            loaded: discovery.files.iter().map(|f| f.path.clone()).collect(),
            failures: discovery.failures.clone(),
            keys_added: 0,
            disabled: discovery.disabled,
        }
    }
}

/// Loads `.env` files from an ordered list of candidate paths.
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    candidates: Vec<PathBuf>,
}

impl SourceLoader {
    /// Create a loader over explicit candidate paths.
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a loader over the default candidates of `service` relative to `base_dir`.
    pub fn for_service(service: Service, base_dir: &Path) -> Self {
        Self::new(default_candidates(service, base_dir))
    }

    /// Add candidates ahead of the existing ones (highest precedence).
    pub fn with_leading_candidates<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut leading: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        leading.append(&mut self.candidates);
        self.candidates = leading;
        self
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Check every candidate and parse the ones that exist.
    pub fn discover(&self) -> Discovery {
        if dotenv_disabled() {
            debug!("{DOTENV_DISABLED_VAR} is set, skipping .env discovery");
            return Discovery {
                disabled: true,
                ..Discovery::default()
            };
        }

        let mut discovery = Discovery::default();
        for path in &self.candidates {
            match read_source(path) {
                Ok(Some(file)) => {
                    debug!(path = %path.display(), entries = file.entries.len(), "Found .env source");
                    discovery.files.push(file);
                }
                Ok(None) => debug!(path = %path.display(), "No .env source at candidate path"),
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "Skipping unreadable .env source");
                    discovery.failures.push(ConfigError::FileDiscoveryFailure {
                        path: path.clone(),
                        reason,
                    });
                }
            }
        }
        discovery
    }

    /// Merge discovered entries into `snapshot`, skipping keys already set.
    pub fn load_into(&self, snapshot: &mut EnvSnapshot) -> LoadReport {
        let discovery = self.discover();
        let mut report = LoadReport::from_discovery(&discovery);
        for file in &discovery.files {
            for (key, value) in &file.entries {
                if snapshot.insert_if_absent(key.as_str(), value.as_str()) {
                    report.keys_added += 1;
                }
            }
        }
        log_report(&report);
        report
    }

    /// Merge discovered entries into the process environment, skipping keys already set.
    ///
    /// Intended to run once at startup, before any other thread reads the environment.
    pub fn load_into_process(&self) -> LoadReport {
        let discovery = self.discover();
        let mut report = LoadReport::from_discovery(&discovery);
        for file in &discovery.files {
            for (key, value) in &file.entries {
                if std::env::var_os(key).is_some() {
                    continue;
                }
                // SAFETY: called during single-threaded startup, before any
                // other thread can read or write the environment.
                unsafe { std::env::set_var(key, value) };
                report.keys_added += 1;
            }
        }
        log_report(&report);
        report
    }
}

/// Merge the `.env` files found at `candidates` into `snapshot`.
pub fn load_sources<I, P>(candidates: I, snapshot: &mut EnvSnapshot) -> LoadReport
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    SourceLoader::new(candidates).load_into(snapshot)
}

/// Merge the `.env` files found at `candidates` into the process environment.
pub fn load_sources_into_process<I, P>(candidates: I) -> LoadReport
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    SourceLoader::new(candidates).load_into_process()
}

/// Read and fully parse one candidate.
///
/// Returns `Ok(None)` when nothing exists at `path`. A file with any invalid
/// line is rejected as a whole so that partial contents are never merged.
fn read_source(path: &Path) -> Result<Option<SourceFile>, DiscoveryFailureReason> {
    if !path.is_file() {
        return Ok(None);
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DiscoveryFailureReason::Io { kind: e.kind() }),
    };

    let literal = escape_substitutions(text.trim_start_matches('\u{feff}'));
    let entries = dotenvy::from_read_iter(literal.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DiscoveryFailureReason::from(&e))?;

    Ok(Some(SourceFile {
        path: path.to_path_buf(),
        entries,
    }))
}

/// Escape every `$` that `dotenvy` would treat as a substitution.
///
/// Tracks the same quoting rules as the parser: single-quoted text is already
/// literal, while unquoted and double-quoted text accepts `\$`. Comments are
/// copied untouched.
fn escape_substitutions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut strong = false;
    let mut weak = false;
    let mut escaped = false;
    let mut comment = false;
    let mut after_space = true;

    for c in text.chars() {
        if comment {
            if c == '\n' {
                comment = false;
                after_space = true;
            }
        } else if escaped {
            escaped = false;
            after_space = false;
        } else if strong {
            strong = c != '\'';
        } else if weak {
            match c {
                '"' => weak = false,
                '\\' => escaped = true,
                '$' => out.push('\\'),
                _ => {}
            }
        } else {
            match c {
                '#' if after_space => comment = true,
                '\'' => strong = true,
                '"' => weak = true,
                '\\' => escaped = true,
                '$' => out.push('\\'),
                _ => {}
            }
            after_space = c.is_whitespace();
        }
        out.push(c);
    }
    out
}

fn log_report(report: &LoadReport) {
    if report.disabled {
        return;
    }
    if report.loaded.is_empty() {
        debug!("No .env sources found, using ambient environment only");
    } else {
        info!(
            files = report.loaded.len(),
            keys_added = report.keys_added,
            "Loaded .env sources"
        );
    }
}
