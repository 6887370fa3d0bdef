//! shapesync - contract drift checker for TypeScript interfaces and Django models
//!
//! shapesync reads frontend interface declarations and backend model
//! declarations, flattens their inheritance chains and reports every place
//! where the frontend contract has drifted from the backend: missing fields,
//! optional-vs-required mismatches, field order and unmatched types.
//!
//! The engine (`domain`) is pure; `infrastructure` reads source files and
//! `application` wires both together for the CLI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CheckOptions, CheckResult, CheckUseCase};
pub use config::Config;
pub use domain::entities::{FieldDeclaration, FlattenedType, TypeDeclaration};
pub use domain::services::{reconcile, DriftChecker, ReconcileOptions, Report};
pub use domain::value_objects::{Discrepancy, DiscrepancyKind, IgnoreDirective, NameMapping, Side};
pub use error::{ExtractError, GraphError, ShapesyncError, ShapesyncResult};
pub use infrastructure::{ExtractOptions, FileDeclarationSource};
