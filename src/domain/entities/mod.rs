//! Domain Entities
//!
//! - `TypeDeclaration` / `FieldDeclaration` - what an extractor reads from source
//! - `FlattenedType` - a declaration with its extends chain resolved

mod declaration;
mod flattened;

pub use declaration::{FieldDeclaration, TypeDeclaration};
pub use flattened::FlattenedType;
