//! Property tests for pair reconciliation.

use std::collections::HashSet;

use proptest::prelude::*;

use shapesync::domain::entities::{FieldDeclaration, FlattenedType, TypeDeclaration};
use shapesync::domain::services::{reconcile_pair, TypeGraph};
use shapesync::domain::value_objects::{DiscrepancyKind, IgnoreDirective, Side};

/// Backend field names, unique and in declaration order
fn backend_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-h]", 0..8).prop_map(|names| {
        let mut seen = HashSet::new();
        names.into_iter().filter(|n| seen.insert(n.clone())).collect()
    })
}

/// What the frontend does with one backend field
#[derive(Debug, Clone, Copy)]
enum Treatment {
    Declare,
    Omit,
    Suppress,
}

fn treatment() -> impl Strategy<Value = Treatment> {
    prop_oneof![
        Just(Treatment::Declare),
        Just(Treatment::Omit),
        Just(Treatment::Suppress),
    ]
}

fn flatten(decl: TypeDeclaration) -> FlattenedType {
    let side = decl.side();
    let name = decl.name().to_string();
    let graph = TypeGraph::build(side, &[decl]).unwrap();
    graph.get(&name).unwrap().clone()
}

#[derive(Debug)]
struct Scenario {
    backend: FlattenedType,
    frontend: FlattenedType,
    omitted: Vec<String>,
    suppressed: Vec<String>,
}

fn scenario() -> impl Strategy<Value = Scenario> {
    backend_names()
        .prop_flat_map(|names| {
            let n = names.len();
            (
                Just(names),
                proptest::collection::vec(treatment(), n),
                proptest::collection::vec("[x-z][a-h]", 0..3),
                any::<bool>(),
            )
        })
        .prop_map(|(names, treatments, extra, reverse)| {
            let backend = TypeDeclaration::new("Model", Side::Backend)
                .with_fields(names.iter().map(FieldDeclaration::new));

            let mut declared = Vec::new();
            let mut placeholders = Vec::new();
            let mut omitted = Vec::new();
            let mut suppressed = Vec::new();
            for (name, treatment) in names.iter().zip(&treatments) {
                match treatment {
                    Treatment::Declare => declared.push(FieldDeclaration::new(name)),
                    Treatment::Omit => omitted.push(name.clone()),
                    Treatment::Suppress => {
                        placeholders.push(FieldDeclaration::placeholder(
                            name,
                            IgnoreDirective::SuppressMissing,
                        ));
                        suppressed.push(name.clone());
                    }
                }
            }
            if reverse {
                declared.reverse();
            }
            let mut seen = HashSet::new();
            let extra = extra
                .into_iter()
                .filter(|n| seen.insert(n.clone()))
                .map(FieldDeclaration::new);

            let frontend = TypeDeclaration::new("Model", Side::Frontend)
                .with_fields(declared)
                .with_fields(extra)
                .with_fields(placeholders);

            Scenario {
                backend: flatten(backend),
                frontend: flatten(frontend),
                omitted,
                suppressed,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Missing fields are exactly the omitted, unsuppressed backend fields.
    #[test]
    fn property_missing_fields_match_omissions(s in scenario()) {
        let found = reconcile_pair(&s.frontend, &s.backend);

        let missing: Vec<String> = found
            .iter()
            .filter(|d| d.kind == DiscrepancyKind::MissingField)
            .filter_map(|d| d.field_name.clone())
            .collect();
        prop_assert_eq!(missing, s.omitted);
    }

    /// PROPERTY: A field suppressed by `ignore field` is never reported.
    #[test]
    fn property_suppressed_fields_never_reported(s in scenario()) {
        let found = reconcile_pair(&s.frontend, &s.backend);

        for d in &found {
            if let Some(field) = &d.field_name {
                prop_assert!(!s.suppressed.contains(field), "reported suppressed field {}", field);
            }
        }
    }

    /// PROPERTY: Order is never judged while a backend field is missing.
    #[test]
    fn property_missing_fields_suppress_order_check(s in scenario()) {
        let found = reconcile_pair(&s.frontend, &s.backend);

        let has_missing = found.iter().any(|d| d.kind == DiscrepancyKind::MissingField);
        let has_order = found.iter().any(|d| d.kind == DiscrepancyKind::OrderMismatch);
        prop_assert!(!(has_missing && has_order));
        prop_assert!(found.iter().filter(|d| d.kind == DiscrepancyKind::OrderMismatch).count() <= 1);
    }

    /// PROPERTY: Frontend-only fields are always allowed.
    #[test]
    fn property_frontend_only_fields_allowed(s in scenario()) {
        let found = reconcile_pair(&s.frontend, &s.backend);

        for d in &found {
            if let Some(field) = &d.field_name {
                prop_assert!(s.backend.contains(field), "reported frontend-only field {}", field);
            }
        }
    }

    /// PROPERTY: A type reconciled with itself has no discrepancies.
    #[test]
    fn property_identical_fields_agree(names in backend_names()) {
        let backend = flatten(
            TypeDeclaration::new("Model", Side::Backend)
                .with_fields(names.iter().map(FieldDeclaration::new)),
        );
        let frontend = flatten(
            TypeDeclaration::new("Model", Side::Frontend)
                .with_fields(names.iter().map(FieldDeclaration::new)),
        );

        prop_assert!(reconcile_pair(&frontend, &backend).is_empty());
    }
}
