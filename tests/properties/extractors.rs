//! Property tests for the lexical extractors.

use std::path::Path;

use proptest::prelude::*;

use shapesync::infrastructure::extract::resolve_models;
use shapesync::infrastructure::{DjangoExtractor, ExtractOptions, TypeScriptExtractor};

/// Source-like text: declaration keywords, braces and comments mixed with noise
fn source_text() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("interface ".to_string()),
        Just("export ".to_string()),
        Just("extends ".to_string()),
        Just("class ".to_string()),
        Just("(models.Model):".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just(";".to_string()),
        Just("?: ".to_string()),
        Just("\n    ".to_string()),
        Just("// shapesync: ignore field ".to_string()),
        Just("# ts-backend-check: ignore order\n".to_string()),
        Just("/* ".to_string()),
        Just(" */".to_string()),
        Just("\"".to_string()),
        Just(" = models.CharField(blank=True)\n".to_string()),
        "[A-Za-z_][A-Za-z0-9_]{0,6}",
        "\\PC{0,4}",
    ];
    proptest::collection::vec(token, 0..40).prop_map(|tokens| tokens.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: TypeScript extraction never panics; bad input is an error.
    #[test]
    fn property_typescript_extract_never_panics(source in source_text()) {
        let extractor = TypeScriptExtractor::new(&ExtractOptions::default()).unwrap();
        let _ = extractor.extract(&source, Path::new("fuzz.ts"));
    }

    /// PROPERTY: Django extraction never panics.
    #[test]
    fn property_django_extract_never_panics(source in source_text()) {
        let extractor = DjangoExtractor::new(&ExtractOptions::default()).unwrap();
        let classes = extractor.extract(&source, Path::new("fuzz.py"));
        let _ = resolve_models(classes);
    }

    /// PROPERTY: Every extracted interface has unique field names.
    #[test]
    fn property_typescript_fields_unique(source in source_text()) {
        let extractor = TypeScriptExtractor::new(&ExtractOptions::default()).unwrap();
        if let Ok(decls) = extractor.extract(&source, Path::new("fuzz.ts")) {
            for decl in decls {
                let mut names: Vec<&str> = decl.own_fields().iter().map(|f| f.name.as_str()).collect();
                let total = names.len();
                names.sort_unstable();
                names.dedup();
                prop_assert_eq!(names.len(), total);
            }
        }
    }
}
