//! DeclarationSource port
//!
//! Produces the ordered declaration list of one side. Implementations own
//! locating and lexing source files; the engine only sees the result.

use std::path::PathBuf;

use crate::domain::entities::TypeDeclaration;
use crate::domain::value_objects::Side;

pub trait DeclarationSource {
    fn list_declarations(&self, side: Side) -> Result<Vec<TypeDeclaration>, ExtractError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("unterminated declaration '{name}' in {path}:{line}")]
    Unterminated {
        name: String,
        path: PathBuf,
        line: usize,
    },

    #[error("no {side} sources configured\n  → Fix: pass --{side} <file> or add a [[pairs]] entry to .shapesync.toml")]
    NoSources { side: Side },

    #[error("invalid ignore marker '{marker}': {message}")]
    InvalidMarker { marker: String, message: String },
}

/// In-memory source, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticDeclarations {
    pub frontend: Vec<TypeDeclaration>,
    pub backend: Vec<TypeDeclaration>,
}

impl DeclarationSource for StaticDeclarations {
    fn list_declarations(&self, side: Side) -> Result<Vec<TypeDeclaration>, ExtractError> {
        Ok(match side {
            Side::Frontend => self.frontend.clone(),
            Side::Backend => self.backend.clone(),
        })
    }
}
