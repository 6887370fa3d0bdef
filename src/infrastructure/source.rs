//! File System Declaration Source
//!
//! Reads declaration files for each side and runs the matching extractor.
//! `.ts`/`.tsx` files go to the TypeScript extractor, `.py` files to the
//! Django extractor. A directory is walked (respecting `.gitignore`) and every
//! file of the side's kind is read in sorted path order.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use super::extract::{resolve_models, DjangoExtractor, ExtractOptions, TypeScriptExtractor};
use crate::domain::entities::TypeDeclaration;
use crate::domain::ports::{DeclarationSource, ExtractError};
use crate::domain::value_objects::Side;

const FRONTEND_EXTENSIONS: &[&str] = &["ts", "tsx"];
const BACKEND_EXTENSIONS: &[&str] = &["py"];

/// Declaration source backed by files on disk
#[derive(Debug, Clone, Default)]
pub struct FileDeclarationSource {
    frontend: Vec<PathBuf>,
    backend: Vec<PathBuf>,
    options: ExtractOptions,
}

impl FileDeclarationSource {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_frontend(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.frontend.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn with_backend(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.backend.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn paths(&self, side: Side) -> &[PathBuf] {
        match side {
            Side::Frontend => &self.frontend,
            Side::Backend => &self.backend,
        }
    }

    /// Every file to read for a side, directories expanded
    pub fn files(&self, side: Side) -> Result<Vec<PathBuf>, ExtractError> {
        let extensions = match side {
            Side::Frontend => FRONTEND_EXTENSIONS,
            Side::Backend => BACKEND_EXTENSIONS,
        };

        let mut files = Vec::new();
        for path in self.paths(side) {
            if path.is_dir() {
                files.extend(walk(path, extensions)?);
            } else {
                files.push(path.clone());
            }
        }
        Ok(files)
    }
}

fn walk(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, ExtractError> {
    let mut found = Vec::new();
    for entry in WalkBuilder::new(dir).build() {
        let entry = entry.map_err(|e| ExtractError::Read {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        let matches = entry.file_type().is_some_and(|t| t.is_file())
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext));
        if matches {
            found.push(path.to_path_buf());
        }
    }
    found.sort();
    Ok(found)
}

fn read(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl DeclarationSource for FileDeclarationSource {
    fn list_declarations(&self, side: Side) -> Result<Vec<TypeDeclaration>, ExtractError> {
        let files = self.files(side)?;
        if files.is_empty() {
            return Err(ExtractError::NoSources { side });
        }

        let declarations = match side {
            Side::Frontend => {
                let extractor = TypeScriptExtractor::new(&self.options)?;
                let mut all = Vec::new();
                for file in &files {
                    all.extend(extractor.extract(&read(file)?, file)?);
                }
                all
            }
            Side::Backend => {
                let extractor = DjangoExtractor::new(&self.options)?;
                let mut classes = Vec::new();
                for file in &files {
                    classes.extend(extractor.extract(&read(file)?, file));
                }
                resolve_models(classes)
            }
        };

        tracing::debug!(
            %side,
            files = files.len(),
            types = declarations.len(),
            "loaded declarations"
        );
        Ok(declarations)
    }
}
