//! Domain Services
//!
//! The reconciliation engine. Pure business logic over already-loaded
//! declarations; no I/O.

mod checker;
mod name_resolver;
mod reconciler;
mod report;
mod type_graph;

pub use checker::{reconcile, DriftChecker, ReconcileOptions};
pub use name_resolver::{NameResolver, Resolution};
pub use reconciler::reconcile_pair;
pub use report::{Report, TypeFindings};
pub use type_graph::{GraphError, TypeGraph};
