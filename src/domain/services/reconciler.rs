//! Reconciler
//!
//! Computes the discrepancies of one matched (frontend, backend) pair from
//! their flattened field lists. The backend is the ground truth:
//! - Frontend-only fields are always allowed
//! - Every backend field must be present unless an ignore directive
//!   suppresses it (on either side)
//! - A required backend field must not be optional on the frontend
//! - Co-present, non-ignored fields must follow backend order, but order is
//!   only judged once nothing is missing
//!
//! Findings come out as: missing fields (backend order), then unexpected
//! optionals (backend order), then at most one order mismatch.

use std::collections::HashMap;

use crate::domain::entities::{FieldDeclaration, FlattenedType};
use crate::domain::value_objects::{Discrepancy, IgnoreDirective};

pub fn reconcile_pair(frontend: &FlattenedType, backend: &FlattenedType) -> Vec<Discrepancy> {
    let pair = Pair::new(frontend, backend);

    let mut missing = Vec::new();
    let mut optional = Vec::new();

    for field in pair.backend_fields() {
        if pair.directive(&field.name).suppresses_missing() {
            continue;
        }
        match pair.frontend_field(&field.name) {
            None => missing.push(Discrepancy::missing_field(
                frontend.name(),
                backend.name(),
                &field.name,
                &field.source_name,
            )),
            Some(ff) if ff.optional && field.is_required() => optional.push(
                Discrepancy::unexpected_optional(frontend.name(), backend.name(), &field.name),
            ),
            Some(_) => {}
        }
    }

    let order = if missing.is_empty() {
        pair.order_mismatch()
    } else {
        tracing::debug!(
            frontend = frontend.name(),
            backend = backend.name(),
            missing = missing.len(),
            "order check skipped, field set is incomplete"
        );
        None
    };

    missing.extend(optional);
    missing.extend(order);
    missing
}

struct Pair<'a> {
    frontend: &'a FlattenedType,
    backend: &'a FlattenedType,
    frontend_index: HashMap<&'a str, &'a FieldDeclaration>,
    backend_index: HashMap<&'a str, &'a FieldDeclaration>,
}

impl<'a> Pair<'a> {
    fn new(frontend: &'a FlattenedType, backend: &'a FlattenedType) -> Self {
        Self {
            frontend,
            backend,
            frontend_index: frontend.index(),
            backend_index: backend.index(),
        }
    }

    /// Backend fields that are real declarations
    fn backend_fields(&self) -> impl Iterator<Item = &'a FieldDeclaration> {
        let backend: &'a FlattenedType = self.backend;
        backend.fields().iter().filter(|f| !f.placeholder)
    }

    /// Present on the frontend as a real declaration
    fn frontend_field(&self, name: &str) -> Option<&'a FieldDeclaration> {
        self.frontend_index
            .get(name)
            .copied()
            .filter(|f| !f.placeholder)
    }

    /// Effective directive: the stronger of both sides' directives
    fn directive(&self, name: &str) -> IgnoreDirective {
        let backend = self
            .backend_index
            .get(name)
            .map(|f| f.ignore)
            .unwrap_or_default();
        let frontend = self
            .frontend_index
            .get(name)
            .map(|f| f.ignore)
            .unwrap_or_default();
        backend.strongest(frontend)
    }

    fn in_backend(&self, name: &str) -> bool {
        self.backend_index
            .get(name)
            .is_some_and(|f| !f.placeholder)
    }

    fn order_mismatch(&self) -> Option<Discrepancy> {
        let expected: Vec<&str> = self
            .backend_fields()
            .map(|f| f.name.as_str())
            .filter(|name| !self.directive(name).suppresses_order())
            .filter(|name| self.frontend_field(name).is_some())
            .collect();

        let actual: Vec<&str> = self
            .frontend
            .fields()
            .iter()
            .filter(|f| !f.placeholder)
            .map(|f| f.name.as_str())
            .filter(|name| self.in_backend(name))
            .filter(|name| !self.directive(name).suppresses_order())
            .collect();

        let divergent = expected
            .iter()
            .zip(actual.iter())
            .position(|(e, a)| e != a)?;

        Some(Discrepancy::order_mismatch(
            self.frontend.name(),
            self.backend.name(),
            expected[divergent],
            &expected,
            &actual,
        ))
    }
}
