//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::services::ReconcileOptions;
use crate::domain::value_objects::NameMapping;
use crate::error::ShapesyncResult;
use crate::infrastructure::extract::{ExtractOptions, DEFAULT_MARKER};

use super::loader::{self, LoadedConfig};
use super::ConfigWarning;

/// `[check]` - engine and extractor switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub backend_orphans: bool,

    #[serde(default = "default_true")]
    pub camel_case_backend: bool,

    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            backend_orphans: false,
            camel_case_backend: true,
            marker: default_marker(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

/// `[[pairs]]` - one backend/frontend file set checked together
///
/// `backend` and `frontend` accept a single path or a list:
///   backend = "backend/models.py"
///   frontend = ["frontend/types/events.ts", "frontend/types/users.ts"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    pub name: String,

    #[serde(deserialize_with = "one_or_many")]
    pub backend: Vec<PathBuf>,

    #[serde(deserialize_with = "one_or_many")]
    pub frontend: Vec<PathBuf>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(path) => Ok(vec![path]),
        OneOrMany::Many(paths) => Ok(paths),
    }
}

/// `[names]` - frontend/backend name overrides and exclusions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NamesConfig {
    /// Names deliberately left unmatched, on either side
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Frontend type name to the backend type(s) it is checked against
    #[serde(default)]
    pub map: BTreeMap<String, Vec<String>>,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub pairs: Vec<PairConfig>,

    #[serde(default)]
    pub names: NamesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ShapesyncResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ShapesyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, or discover one under `root`, or use defaults.
    ///
    /// Environment overrides are applied on top in every case.
    pub fn discover(explicit: Option<&Path>, root: &Path) -> ShapesyncResult<LoadedConfig> {
        loader::discover(explicit, root)
    }

    /// Apply environment variable overrides (SHAPESYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn name_mapping(&self) -> NameMapping {
        let mut mapping = NameMapping::new();
        for (frontend, backends) in &self.names.map {
            mapping = mapping.with_mapping(frontend.as_str(), backends.iter().map(String::as_str));
        }
        for name in &self.names.exclude {
            mapping = mapping.with_excluded(name.as_str());
        }
        mapping
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            marker: self.check.marker.clone(),
            camel_case_backend: self.check.camel_case_backend,
        }
    }

    pub fn reconcile_options(&self) -> ReconcileOptions {
        ReconcileOptions {
            backend_orphans: self.check.backend_orphans,
        }
    }

    /// Pairs selected by name (all of them when `only` is empty)
    pub fn selected_pairs<'a>(&'a self, only: &[String]) -> Vec<&'a PairConfig> {
        self.pairs
            .iter()
            .filter(|p| only.is_empty() || only.contains(&p.name))
            .collect()
    }
}
