//! Drift checker - the engine entry point
//!
//! Builds both type graphs, resolves names, reconciles every matched pair and
//! aggregates the findings. Pure: no I/O, no shared mutable state. The only
//! failures are fatal graph errors, raised before any pair is reconciled.

use super::{reconcile_pair, GraphError, NameResolver, Report, Resolution, TypeGraph};
use crate::domain::entities::TypeDeclaration;
use crate::domain::value_objects::{Discrepancy, NameMapping, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Report backend types that no frontend type checks against
    pub backend_orphans: bool,
}

#[derive(Debug, Clone)]
pub struct DriftChecker<'a> {
    mapping: &'a NameMapping,
    options: ReconcileOptions,
}

impl<'a> DriftChecker<'a> {
    pub fn new(mapping: &'a NameMapping) -> Self {
        Self {
            mapping,
            options: ReconcileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReconcileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn check(
        &self,
        frontend: &[TypeDeclaration],
        backend: &[TypeDeclaration],
    ) -> Result<Report, GraphError> {
        let frontend_graph = TypeGraph::build(Side::Frontend, frontend)?;
        let backend_graph = TypeGraph::build(Side::Backend, backend)?;
        let resolver = NameResolver::new(self.mapping, &backend_graph);

        let mut report = Report::new();

        for frontend_type in frontend_graph.iter() {
            let name = frontend_type.name();
            let (found, undeclared) = match resolver.resolve(name) {
                Resolution::Excluded => {
                    tracing::debug!(r#type = name, "excluded by name mapping");
                    continue;
                }
                Resolution::Candidates { found, undeclared } => (found, undeclared),
            };

            let mut findings = Vec::new();
            if found.is_empty() && undeclared.is_empty() {
                findings.push(Discrepancy::unmatched_type(name, Side::Frontend));
            }
            findings.extend(
                undeclared
                    .iter()
                    .map(|backend| Discrepancy::undeclared_mapping(name, backend)),
            );

            for backend_name in &found {
                let Some(backend_type) = backend_graph.get(backend_name) else {
                    continue;
                };
                let pair = reconcile_pair(frontend_type, backend_type);
                tracing::debug!(
                    frontend = name,
                    backend = backend_name.as_str(),
                    findings = pair.len(),
                    "reconciled pair"
                );
                report.count_pair();
                findings.extend(pair);
            }

            report.record(name, Side::Frontend, findings);
        }

        if self.options.backend_orphans {
            for orphan in resolver.backend_orphans(frontend_graph.names()) {
                let finding = Discrepancy::unmatched_type(&orphan, Side::Backend);
                report.record(orphan, Side::Backend, vec![finding]);
            }
        }

        tracing::info!(
            types = report.types_checked(),
            pairs = report.pairs_checked(),
            discrepancies = report.len(),
            "drift check finished"
        );

        Ok(report)
    }
}

/// Reconcile two declaration sets and return every discrepancy in report order
pub fn reconcile(
    frontend: &[TypeDeclaration],
    backend: &[TypeDeclaration],
    mapping: &NameMapping,
    options: &ReconcileOptions,
) -> Result<Vec<Discrepancy>, GraphError> {
    DriftChecker::new(mapping)
        .with_options(*options)
        .check(frontend, backend)
        .map(Report::into_discrepancies)
}
