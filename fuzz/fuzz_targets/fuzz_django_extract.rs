#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use shapesync::infrastructure::extract::resolve_models;
use shapesync::infrastructure::{DjangoExtractor, ExtractOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let extractor = match DjangoExtractor::new(&ExtractOptions::default()) {
            Ok(extractor) => extractor,
            Err(_) => return,
        };
        let classes = extractor.extract(content, Path::new("fuzz.py"));
        let _ = resolve_models(classes);
    }
});
