//! Check Use Case
//!
//! This module defines the `CheckUseCase` which runs the drift check for
//! every configured frontend/backend pair.

use std::path::{Path, PathBuf};

use crate::config::{Config, PairConfig};
use crate::domain::ports::{DeclarationSource, ExtractError};
use crate::domain::services::{DriftChecker, ReconcileOptions, Report};
use crate::domain::value_objects::{NameMapping, Side};
use crate::error::{ShapesyncError, ShapesyncResult};
use crate::infrastructure::FileDeclarationSource;

/// Name given to the pair assembled from `--backend`/`--frontend` flags
pub const ADHOC_PAIR: &str = "cli";

/// Options for the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Backend files from the command line (overrides configured pairs)
    pub backend: Vec<PathBuf>,
    /// Frontend files from the command line (overrides configured pairs)
    pub frontend: Vec<PathBuf>,
    /// Restrict to these configured pairs (empty = all)
    pub pairs: Vec<String>,
    /// Overrides `[check] backend_orphans` when set
    pub backend_orphans: Option<bool>,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, paths: Vec<PathBuf>) -> Self {
        self.backend = paths;
        self
    }

    pub fn with_frontend(mut self, paths: Vec<PathBuf>) -> Self {
        self.frontend = paths;
        self
    }

    pub fn with_pairs(mut self, pairs: Vec<String>) -> Self {
        self.pairs = pairs;
        self
    }

    pub fn with_backend_orphans(mut self, enabled: Option<bool>) -> Self {
        self.backend_orphans = enabled;
        self
    }

    fn is_adhoc(&self) -> bool {
        !self.backend.is_empty() || !self.frontend.is_empty()
    }
}

/// Report of one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    pub name: String,
    pub report: Report,
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub pairs: Vec<PairOutcome>,
}

impl CheckResult {
    /// No pair reported drift
    pub fn is_success(&self) -> bool {
        self.pairs.iter().all(|p| p.report.is_success())
    }

    pub fn discrepancy_count(&self) -> usize {
        self.pairs.iter().map(|p| p.report.len()).sum()
    }

    pub fn types_checked(&self) -> usize {
        self.pairs.iter().map(|p| p.report.types_checked()).sum()
    }
}

/// Check Use Case
///
/// Resolves which files to read, extracts both sides and reconciles them.
pub struct CheckUseCase {
    config: Config,
    root: PathBuf,
}

impl CheckUseCase {
    /// `root` anchors relative paths from the config file
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    /// Execute the check operation
    pub fn execute(&self, options: &CheckOptions) -> ShapesyncResult<CheckResult> {
        self.execute_with_callback(options, |_| {})
    }

    /// Execute with a callback per finished pair (for streaming output)
    pub fn execute_with_callback<F>(
        &self,
        options: &CheckOptions,
        mut on_pair: F,
    ) -> ShapesyncResult<CheckResult>
    where
        F: FnMut(&PairOutcome),
    {
        let mapping = self.config.name_mapping();
        let reconcile = ReconcileOptions {
            backend_orphans: options
                .backend_orphans
                .unwrap_or(self.config.check.backend_orphans),
        };

        let mut result = CheckResult::default();
        for pair in self.plan(options)? {
            let source = FileDeclarationSource::new(self.config.extract_options())
                .with_backend(pair.backend.iter().cloned())
                .with_frontend(pair.frontend.iter().cloned());

            tracing::info!(pair = pair.name.as_str(), "checking pair");
            let report = run_check(&source, &mapping, reconcile)?;
            let outcome = PairOutcome {
                name: pair.name,
                report,
            };
            on_pair(&outcome);
            result.pairs.push(outcome);
        }

        Ok(result)
    }

    /// Pairs to check, with paths anchored at the project root
    pub fn plan(&self, options: &CheckOptions) -> ShapesyncResult<Vec<PairConfig>> {
        if options.is_adhoc() {
            return Ok(vec![PairConfig {
                name: ADHOC_PAIR.to_string(),
                backend: options.backend.clone(),
                frontend: options.frontend.clone(),
            }]);
        }

        if let Some(unknown) = options
            .pairs
            .iter()
            .find(|name| !self.config.pairs.iter().any(|p| &p.name == *name))
        {
            return Err(ShapesyncError::UnknownPair {
                name: unknown.clone(),
            });
        }

        let selected = self.config.selected_pairs(&options.pairs);
        if selected.is_empty() {
            return Err(ExtractError::NoSources {
                side: Side::Backend,
            }
            .into());
        }

        selected
            .into_iter()
            .map(|pair| {
                Ok(PairConfig {
                    name: pair.name.clone(),
                    backend: self.anchor(&pair.name, &pair.backend)?,
                    frontend: self.anchor(&pair.name, &pair.frontend)?,
                })
            })
            .collect()
    }

    fn anchor(&self, pair: &str, paths: &[PathBuf]) -> ShapesyncResult<Vec<PathBuf>> {
        paths
            .iter()
            .map(|p| {
                let full = self.root.join(p);
                if full.exists() {
                    Ok(full)
                } else {
                    Err(ShapesyncError::MissingPairFile {
                        pair: pair.to_string(),
                        path: p.clone(),
                    })
                }
            })
            .collect()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Extract both sides from `source` and reconcile them
pub fn run_check(
    source: &dyn DeclarationSource,
    mapping: &NameMapping,
    options: ReconcileOptions,
) -> ShapesyncResult<Report> {
    let frontend = source.list_declarations(Side::Frontend)?;
    let backend = source.list_declarations(Side::Backend)?;

    let report = DriftChecker::new(mapping)
        .with_options(options)
        .check(&frontend, &backend)?;
    Ok(report)
}
