//! Declaration entities - the uniform shape both extractors produce
//!
//! A `TypeDeclaration` owns its fields exclusively; `extends` entries are
//! lookup keys into the same side's declaration set, never ownership.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::{IgnoreDirective, Side};

/// One field as written in a type declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDeclaration {
    /// Normalized identifier, unique within its owning type
    pub name: String,
    /// Identifier as spelled in source (before case conversion)
    pub source_name: String,
    pub optional: bool,
    pub ignore: IgnoreDirective,
    /// Position as written within the declaring type
    pub source_order_index: usize,
    /// Exists only because an ignore directive named it
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub placeholder: bool,
}

impl FieldDeclaration {
    /// A required field with no directive
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            source_name: name.clone(),
            name,
            optional: false,
            ignore: IgnoreDirective::None,
            source_order_index: 0,
            placeholder: false,
        }
    }

    /// A field introduced only by an ignore directive
    pub fn placeholder(name: impl Into<String>, ignore: IgnoreDirective) -> Self {
        Self {
            ignore,
            placeholder: true,
            ..Self::new(name)
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreDirective) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    pub fn is_required(&self) -> bool {
        !self.optional
    }

    /// Take another declaration's attributes, keeping this one's position.
    ///
    /// A placeholder never downgrades a real declaration; a real declaration
    /// turns a placeholder into a real field.
    pub fn override_with(&mut self, other: &FieldDeclaration) {
        if other.placeholder {
            self.ignore = self.ignore.strongest(other.ignore);
            return;
        }
        let keep_ignore = if self.placeholder && other.ignore.is_none() {
            self.ignore
        } else {
            other.ignore
        };
        self.optional = other.optional;
        self.ignore = keep_ignore;
        self.source_name = other.source_name.clone();
        self.placeholder = false;
    }
}

/// A named type with its own (non-inherited) fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDeclaration {
    name: String,
    side: Side,
    extends: Vec<String>,
    own_fields: Vec<FieldDeclaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<PathBuf>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
            extends: Vec::new(),
            own_fields: Vec::new(),
            origin: None,
        }
    }

    pub fn with_extends(mut self, parent: impl Into<String>) -> Self {
        let parent = parent.into();
        if !self.extends.contains(&parent) {
            self.extends.push(parent);
        }
        self
    }

    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.push_field(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDeclaration>) -> Self {
        for field in fields {
            self.push_field(field);
        }
        self
    }

    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Append a field, stamping its declared position
    pub fn push_field(&mut self, mut field: FieldDeclaration) {
        field.source_order_index = self.own_fields.len();
        self.own_fields.push(field);
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDeclaration> {
        self.own_fields.iter_mut().find(|f| f.name == name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn extends(&self) -> &[String] {
        &self.extends
    }

    pub fn is_root(&self) -> bool {
        self.extends.is_empty()
    }

    pub fn own_fields(&self) -> &[FieldDeclaration] {
        &self.own_fields
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }
}
