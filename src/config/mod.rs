//! Configuration module for shapesync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHAPESYNC_*)
//! 3. Project config (.shapesync.toml, or the legacy .ts-backend-check.yaml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{LoadedConfig, CONFIG_FILE, LEGACY_CONFIG_FILE};
pub use types::{CheckConfig, ColorMode, Config, NamesConfig, OutputConfig, PairConfig};
