//! Domain Layer
//!
//! The structural reconciliation engine - pure logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Declarations and flattened types
//! - `value_objects/` - Side, IgnoreDirective, Discrepancy, NameMapping
//! - `services/` - Type graph builder, name resolver, reconciler, report
//! - `ports/` - Interface the declaration extractors implement
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Immutable inputs** - Declarations and flattened types are read-only
//!    once built; the reconciler only reads
//! 3. **Ports & Adapters** - Source parsing goes through `DeclarationSource`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
