//! Name mapping value object
//!
//! Explicit, immutable table of frontend type name → backend type names.
//! Frontend names without an entry fall back to identical-name matching.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMapping {
    entries: HashMap<String, Vec<String>>,
    excluded: HashSet<String>,
}

impl NameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map one frontend type to one or more backend types.
    ///
    /// Repeated calls for the same frontend name append, keeping order and
    /// dropping duplicates.
    pub fn with_mapping<I, S>(mut self, frontend: impl Into<String>, backends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets = self.entries.entry(frontend.into()).or_default();
        for backend in backends {
            let backend = backend.into();
            if !targets.contains(&backend) {
                targets.push(backend);
            }
        }
        self
    }

    /// Mark a type name as deliberately unmatched (skipped on either side)
    pub fn with_excluded(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }

    /// Explicit override for a frontend name, if any
    pub fn overrides(&self, frontend: &str) -> Option<&[String]> {
        self.entries.get(frontend).map(|v| v.as_slice())
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.excluded.is_empty()
    }

    /// All backend names referenced by an explicit override
    pub fn mapped_backends(&self) -> impl Iterator<Item = &str> {
        self.entries.values().flatten().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_dedupes_and_keeps_order() {
        let mapping = NameMapping::new()
            .with_mapping("EventExtended", ["EventModel", "LegacyEvent"])
            .with_mapping("EventExtended", ["EventModel"]);
        assert_eq!(
            mapping.overrides("EventExtended").unwrap(),
            &["EventModel".to_string(), "LegacyEvent".to_string()]
        );
    }

    #[test]
    fn exclusion_is_independent_of_mapping() {
        let mapping = NameMapping::new().with_excluded("User");
        assert!(mapping.is_excluded("User"));
        assert!(mapping.overrides("User").is_none());
        assert!(!mapping.is_empty());
    }
}
