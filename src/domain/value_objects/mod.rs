//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod discrepancy;
mod ignore_directive;
mod name_mapping;
mod side;

pub use config_warning::ConfigWarning;
pub use discrepancy::{Discrepancy, DiscrepancyKind, FieldOrder, Severity};
pub use ignore_directive::IgnoreDirective;
pub use name_mapping::NameMapping;
pub use side::Side;
