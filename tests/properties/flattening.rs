//! Property tests for inheritance flattening.

use std::collections::HashSet;

use proptest::prelude::*;

use shapesync::domain::entities::{FieldDeclaration, TypeDeclaration};
use shapesync::domain::services::TypeGraph;
use shapesync::domain::value_objects::Side;

fn field_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-e]", 0..6)
}

/// A chain T0 <- T1 <- ... where each type may redeclare parent fields
fn chain() -> impl Strategy<Value = Vec<TypeDeclaration>> {
    proptest::collection::vec(field_names(), 1..5).prop_map(|levels| {
        levels
            .into_iter()
            .enumerate()
            .map(|(i, names)| {
                let mut seen = HashSet::new();
                let fields = names
                    .into_iter()
                    .filter(|n| seen.insert(n.clone()))
                    .map(FieldDeclaration::new);
                let decl = TypeDeclaration::new(format!("T{}", i), Side::Frontend).with_fields(fields);
                if i == 0 {
                    decl
                } else {
                    decl.with_extends(format!("T{}", i - 1))
                }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A flattened type never lists the same field twice.
    #[test]
    fn property_flattened_fields_are_unique(decls in chain()) {
        let graph = TypeGraph::build(Side::Frontend, &decls).unwrap();

        for flat in graph.iter() {
            let names = flat.field_names();
            let unique: HashSet<&str> = names.iter().copied().collect();
            prop_assert_eq!(unique.len(), names.len(), "duplicates in {}", flat.name());
        }
    }

    /// PROPERTY: A child sees every field of every ancestor.
    #[test]
    fn property_flattening_keeps_ancestor_fields(decls in chain()) {
        let graph = TypeGraph::build(Side::Frontend, &decls).unwrap();

        for (i, decl) in decls.iter().enumerate() {
            for descendant in &decls[i..] {
                let flat = graph.get(descendant.name()).unwrap();
                for field in decl.own_fields() {
                    prop_assert!(flat.contains(&field.name));
                }
            }
        }
    }

    /// PROPERTY: Ancestor fields come first, in ancestor declaration order.
    #[test]
    fn property_root_fields_lead(decls in chain()) {
        let graph = TypeGraph::build(Side::Frontend, &decls).unwrap();
        let root: Vec<&str> = decls[0].own_fields().iter().map(|f| f.name.as_str()).collect();

        for flat in graph.iter() {
            let names = flat.field_names();
            prop_assert_eq!(&names[..root.len()], &root[..]);
        }
    }
}
