//! Name resolver
//!
//! Maps a frontend type name to the backend type(s) it is checked against:
//! 1. An explicit override in the name mapping wins (one-to-many allowed)
//! 2. Otherwise the identically named backend type, if declared
//! 3. Names marked excluded are not checked at all

use std::collections::HashSet;

use super::TypeGraph;
use crate::domain::value_objects::NameMapping;

/// Outcome of resolving one frontend type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Deliberately unmatched; not checked
    Excluded,
    Candidates {
        /// Declared backend types to reconcile against, in mapping order
        found: Vec<String>,
        /// Override targets that are not declared on the backend side
        undeclared: Vec<String>,
    },
}

impl Resolution {
    /// Nothing to reconcile against and no excuse for it
    pub fn is_unmatched(&self) -> bool {
        matches!(self, Resolution::Candidates { found, undeclared } if found.is_empty() && undeclared.is_empty())
    }

    pub fn found(&self) -> &[String] {
        match self {
            Resolution::Excluded => &[],
            Resolution::Candidates { found, .. } => found,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    mapping: &'a NameMapping,
    backend: &'a TypeGraph,
}

impl<'a> NameResolver<'a> {
    pub fn new(mapping: &'a NameMapping, backend: &'a TypeGraph) -> Self {
        Self { mapping, backend }
    }

    pub fn resolve(&self, frontend_name: &str) -> Resolution {
        if self.mapping.is_excluded(frontend_name) {
            return Resolution::Excluded;
        }

        let Some(targets) = self.mapping.overrides(frontend_name) else {
            let found = if self.backend.contains(frontend_name) {
                vec![frontend_name.to_string()]
            } else {
                Vec::new()
            };
            return Resolution::Candidates {
                found,
                undeclared: Vec::new(),
            };
        };

        let (found, undeclared): (Vec<String>, Vec<String>) = targets
            .iter()
            .cloned()
            .partition(|name| self.backend.contains(name));
        Resolution::Candidates { found, undeclared }
    }

    /// Backend types no frontend type resolves to, in backend declaration order.
    ///
    /// Excluded backend names are never orphans.
    pub fn backend_orphans<'f>(&self, frontend_names: impl IntoIterator<Item = &'f str>) -> Vec<String> {
        let referenced: HashSet<String> = frontend_names
            .into_iter()
            .flat_map(|name| self.resolve(name).found().to_vec())
            .collect();

        self.backend
            .names()
            .filter(|name| !referenced.contains(*name) && !self.mapping.is_excluded(name))
            .map(str::to_string)
            .collect()
    }
}
