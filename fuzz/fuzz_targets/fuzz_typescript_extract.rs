#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use shapesync::infrastructure::{ExtractOptions, TypeScriptExtractor};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let extractor = match TypeScriptExtractor::new(&ExtractOptions::default()) {
            Ok(extractor) => extractor,
            Err(_) => return,
        };
        // Unterminated input is an error, never a panic
        let _ = extractor.extract(content, Path::new("fuzz.ts"));
    }
});
