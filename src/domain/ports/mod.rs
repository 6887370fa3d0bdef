//! Domain Ports
//!
//! Interface definitions the infrastructure layer implements.

mod declaration_source;

pub use declaration_source::{DeclarationSource, ExtractError, StaticDeclarations};
