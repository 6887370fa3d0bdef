//! Error types for shapesync
//!
//! Library errors are `thiserror` enums; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::domain::ports::ExtractError;
pub use crate::domain::services::GraphError;

/// Result type alias for shapesync operations
pub type ShapesyncResult<T> = Result<T, ShapesyncError>;

/// Main error type for shapesync operations
///
/// Every variant is fatal: the run stops and no report is produced.
#[derive(Error, Debug)]
pub enum ShapesyncError {
    /// Inheritance cycle or duplicate type on one side
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A declaration file could not be read or lexed
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Config file exists but does not parse
    #[error("invalid config in {file}: {message}\n  → Fix: correct the file or regenerate it with `shapesync init --force`")]
    InvalidConfig { file: PathBuf, message: String },

    /// A `[[pairs]]` entry names a file that does not exist
    #[error("pair '{pair}' references missing file {path}\n  → Fix: update the path in the config file")]
    MissingPairFile { pair: String, path: PathBuf },

    /// `--pair` names a pair the config does not define
    #[error("unknown pair '{name}'\n  → Fix: use one of the [[pairs]] names in the config file")]
    UnknownPair { name: String },

    /// `init` would overwrite an existing config
    #[error("config file already exists: {path}\n  → Fix: pass --force to overwrite it")]
    ConfigExists { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Legacy YAML config parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ShapesyncError {
    /// The error came from the declarations, not from how the tool was set up
    pub fn is_input_error(&self) -> bool {
        matches!(self, ShapesyncError::Graph(_) | ShapesyncError::Extract(_))
    }
}
