//! Configuration loading and discovery

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ShapesyncError, ShapesyncResult};

use super::types::{Config, PairConfig};
use super::ConfigWarning;

/// Project config file name
pub const CONFIG_FILE: &str = ".shapesync.toml";

/// Pairs file written by the older `ts-backend-check` tool
pub const LEGACY_CONFIG_FILE: &str = ".ts-backend-check.yaml";

/// A configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when running on defaults
    pub path: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShapesyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ShapesyncResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShapesyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

#[derive(Debug, Deserialize)]
struct LegacyPair {
    backend_model_path: PathBuf,
    frontend_interface_path: PathBuf,
}

/// Read the older YAML pairs file: `name: {backend_model_path, frontend_interface_path}`
pub fn load_legacy(path: &Path) -> ShapesyncResult<Config> {
    let content = fs::read_to_string(path)?;
    let doc: Option<serde_yaml_ng::Mapping> = if content.trim().is_empty() {
        None
    } else {
        serde_yaml_ng::from_str(&content)?
    };

    let mut config = Config::default();
    for (key, value) in doc.unwrap_or_default() {
        let name = match key.as_str() {
            Some(name) => name.to_string(),
            None => {
                return Err(ShapesyncError::InvalidConfig {
                    file: path.to_path_buf(),
                    message: format!("pair names must be strings, found {:?}", key),
                })
            }
        };
        let pair: LegacyPair = serde_yaml_ng::from_value(value)?;
        config.pairs.push(PairConfig {
            name,
            backend: vec![pair.backend_model_path],
            frontend: vec![pair.frontend_interface_path],
        });
    }
    Ok(config)
}

/// Resolve the configuration for a run rooted at `root`.
///
/// Order: the explicit path, `.shapesync.toml`, the legacy YAML file, defaults.
/// A file that exists but fails to parse is an error, never silently skipped.
pub fn discover(explicit: Option<&Path>, root: &Path) -> ShapesyncResult<LoadedConfig> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    let project = root.join(CONFIG_FILE);
    if project.is_file() {
        return load_file(&project);
    }

    let legacy = root.join(LEGACY_CONFIG_FILE);
    if legacy.is_file() {
        tracing::info!(path = %legacy.display(), "using legacy pairs file");
        return Ok(LoadedConfig {
            config: with_env_overrides(load_legacy(&legacy)?),
            warnings: Vec::new(),
            path: Some(legacy),
        });
    }

    tracing::debug!(root = %root.display(), "no config file found, using defaults");
    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        ..LoadedConfig::default()
    })
}

fn load_file(path: &Path) -> ShapesyncResult<LoadedConfig> {
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml");
    let (config, warnings) = if is_yaml {
        (load_legacy(path)?, Vec::new())
    } else {
        load_with_warnings(path)?
    };
    tracing::debug!(path = %path.display(), pairs = config.pairs.len(), "loaded config");

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        path: Some(path.to_path_buf()),
    })
}

/// Apply environment variable overrides (SHAPESYNC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // SHAPESYNC_BACKEND_ORPHANS
    if let Some(val) = var("SHAPESYNC_BACKEND_ORPHANS") {
        config.check.backend_orphans = is_truthy(&val);
    }

    // SHAPESYNC_CAMEL_CASE
    if let Some(val) = var("SHAPESYNC_CAMEL_CASE") {
        config.check.camel_case_backend = is_truthy(&val);
    }

    // SHAPESYNC_MARKER
    if let Some(marker) = var("SHAPESYNC_MARKER") {
        if !marker.trim().is_empty() {
            config.check.marker = marker.trim().to_string();
        }
    }

    config
}

fn is_truthy(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "check",
        "backend_orphans",
        "camel_case_backend",
        "marker",
        "pairs",
        "name",
        "backend",
        "frontend",
        "names",
        "exclude",
        "map",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
