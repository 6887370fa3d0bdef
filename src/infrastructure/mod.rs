//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `extract/` - Lexical extractors (TypeScript interfaces, Django models)
//! - `source` - File-backed `DeclarationSource`

pub mod extract;
pub mod source;

// Re-export for convenience
pub use extract::{ExtractOptions, DjangoExtractor, TypeScriptExtractor};
pub use source::FileDeclarationSource;
