//! Flattened type - a declaration with its whole extends chain resolved.
//!
//! Derived by the type graph builder and never persisted.

use std::collections::HashMap;

use serde::Serialize;

use super::{FieldDeclaration, TypeDeclaration};
use crate::domain::value_objects::Side;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedType {
    name: String,
    side: Side,
    fields: Vec<FieldDeclaration>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unresolved_parents: Vec<String>,
}

impl FlattenedType {
    pub(crate) fn new(
        name: impl Into<String>,
        side: Side,
        fields: Vec<FieldDeclaration>,
        unresolved_parents: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            side,
            fields,
            unresolved_parents,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Fields in flattened order (root ancestor first)
    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }

    /// Parents named in `extends` that are not declared on this side
    pub fn unresolved_parents(&self) -> &[String] {
        &self.unresolved_parents
    }

    pub fn field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Name → field lookup, built once per use site
    pub fn index(&self) -> HashMap<&str, &FieldDeclaration> {
        self.fields.iter().map(|f| (f.name.as_str(), f)).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Re-express this flattened type as a parentless declaration
    pub fn to_declaration(&self) -> TypeDeclaration {
        TypeDeclaration::new(self.name.clone(), self.side).with_fields(self.fields.iter().cloned())
    }
}
