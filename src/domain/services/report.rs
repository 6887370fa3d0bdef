//! Report aggregator
//!
//! Merges every pair's findings into one verdict. Findings are grouped by
//! type name in the order types were recorded (frontend declaration order,
//! orphaned backend types last).

use serde::Serialize;

use crate::domain::value_objects::{Discrepancy, DiscrepancyKind, Side};

/// Findings for one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeFindings {
    pub type_name: String,
    pub side: Side,
    pub discrepancies: Vec<Discrepancy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    groups: Vec<TypeFindings>,
    types_checked: usize,
    pairs_checked: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the findings of one type. Types with no findings only count
    /// toward `types_checked`.
    pub fn record(
        &mut self,
        type_name: impl Into<String>,
        side: Side,
        discrepancies: Vec<Discrepancy>,
    ) {
        self.types_checked += 1;
        if discrepancies.is_empty() {
            return;
        }
        let type_name = type_name.into();
        match self
            .groups
            .iter_mut()
            .find(|g| g.type_name == type_name && g.side == side)
        {
            Some(group) => group.discrepancies.extend(discrepancies),
            None => self.groups.push(TypeFindings {
                type_name,
                side,
                discrepancies,
            }),
        }
    }

    pub(crate) fn count_pair(&mut self) {
        self.pairs_checked += 1;
    }

    /// The check passes iff nothing drifted
    pub fn is_success(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.discrepancies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn groups(&self) -> &[TypeFindings] {
        &self.groups
    }

    pub fn discrepancies(&self) -> impl Iterator<Item = &Discrepancy> {
        self.groups.iter().flat_map(|g| g.discrepancies.iter())
    }

    pub fn count_by_kind(&self, kind: DiscrepancyKind) -> usize {
        self.discrepancies().filter(|d| d.kind == kind).count()
    }

    pub fn for_type(&self, type_name: &str) -> Vec<&Discrepancy> {
        self.groups
            .iter()
            .filter(|g| g.type_name == type_name)
            .flat_map(|g| g.discrepancies.iter())
            .collect()
    }

    pub fn types_checked(&self) -> usize {
        self.types_checked
    }

    pub fn pairs_checked(&self) -> usize {
        self.pairs_checked
    }

    pub fn into_discrepancies(self) -> Vec<Discrepancy> {
        self.groups
            .into_iter()
            .flat_map(|g| g.discrepancies)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_passes() {
        let mut report = Report::new();
        report.record("Event", Side::Frontend, Vec::new());

        assert!(report.is_success());
        assert_eq!(report.types_checked(), 1);
        assert!(report.groups().is_empty());
    }

    #[test]
    fn groups_keep_recording_order() {
        let mut report = Report::new();
        report.record(
            "Zeta",
            Side::Frontend,
            vec![Discrepancy::unmatched_type("Zeta", Side::Frontend)],
        );
        report.record(
            "Alpha",
            Side::Frontend,
            vec![Discrepancy::unexpected_optional("Alpha", "Alpha", "x")],
        );

        let names: Vec<&str> = report.groups().iter().map(|g| g.type_name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert!(!report.is_success());
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn same_name_on_different_sides_is_two_groups() {
        let mut report = Report::new();
        report.record(
            "User",
            Side::Frontend,
            vec![Discrepancy::unmatched_type("User", Side::Frontend)],
        );
        report.record(
            "User",
            Side::Backend,
            vec![Discrepancy::unmatched_type("User", Side::Backend)],
        );

        assert_eq!(report.groups().len(), 2);
        assert_eq!(report.for_type("User").len(), 2);
    }

    #[test]
    fn count_by_kind_and_flatten() {
        let mut report = Report::new();
        report.record(
            "Event",
            Side::Frontend,
            vec![
                Discrepancy::missing_field("Event", "Event", "date", "date"),
                Discrepancy::missing_field("Event", "Event", "title", "title"),
            ],
        );

        assert_eq!(report.count_by_kind(DiscrepancyKind::MissingField), 2);
        assert_eq!(report.count_by_kind(DiscrepancyKind::OrderMismatch), 0);
        assert_eq!(report.into_discrepancies().len(), 2);
    }
}
