use std::path::Path;

use shapesync::application::{CheckResult, PairOutcome};
use shapesync::domain::value_objects::{DiscrepancyKind, Side};

use crate::ui::blocks::finding::FindingItem;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_header(
    config: Option<&Path>,
    pairs: usize,
    backend_orphans: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "shapesync check");
    header.add(
        "Config",
        config
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string()),
    );
    header.add("Pairs", pairs.to_string());
    if backend_orphans {
        header.add("Orphans", "reporting unchecked backend models");
    }
    header.render(supports_color, supports_unicode)
}

/// Findings of one pair, grouped by type
pub fn render_pair_report(
    outcome: &PairOutcome,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let report = &outcome.report;
    let mut out = String::new();

    let pair = ColoredText::plain(outcome.name.as_str())
        .bold()
        .render(supports_color);
    if report.is_success() {
        out.push_str(&format!(
            "\n{} {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            pair,
            ColoredText::dim(format!("({} types, no drift)", report.types_checked()))
                .render(supports_color)
        ));
        return out;
    }

    out.push_str(&format!(
        "\n{} {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        pair,
        ColoredText::dim(format!(
            "({} types, {} discrepancies)",
            report.types_checked(),
            report.len()
        ))
        .render(supports_color)
    ));

    for group in report.groups() {
        let title = match group.side {
            Side::Frontend => group.type_name.clone(),
            Side::Backend => format!("{} (backend)", group.type_name),
        };
        out.push_str(&format!("{}\n", ColoredText::info(title).render(supports_color)));
        for discrepancy in &group.discrepancies {
            out.push_str(&FindingItem::new(discrepancy).render(
                verbose > 0,
                supports_color,
                supports_unicode,
            ));
        }
    }

    out
}

pub fn render_check_summary(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.is_success() {
        ResultSummary::success("No drift detected")
    } else {
        ResultSummary::failure("Drift detected")
    };

    summary.add_stat("pairs", result.pairs.len());
    summary.add_stat("types checked", result.types_checked());

    if !result.is_success() {
        for kind in DiscrepancyKind::ALL {
            let count: usize = result
                .pairs
                .iter()
                .map(|p| p.report.count_by_kind(kind))
                .sum();
            if count > 0 {
                summary.add_stat(kind.label(), count);
            }
        }
        summary.with_next_step(
            "align the interfaces with the models, or add `// shapesync: ignore field <name>`",
        );
    }

    format!("\n{}", summary.render(supports_color, supports_unicode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use shapesync::domain::services::Report;
    use shapesync::domain::value_objects::Discrepancy;

    fn drifted() -> PairOutcome {
        let mut report = Report::new();
        report.record(
            "Event",
            Side::Frontend,
            vec![
                Discrepancy::missing_field("Event", "EventModel", "description", "description"),
                Discrepancy::unexpected_optional("Event", "EventModel", "participants"),
            ],
        );
        report.record("User", Side::Frontend, Vec::new());
        PairOutcome {
            name: "events".to_string(),
            report,
        }
    }

    #[test]
    fn header_lists_config_and_pairs() {
        let rendered =
            render_check_header(Some(Path::new(".shapesync.toml")), 2, true, false, false);

        assert_snapshot!(rendered, @r"
[CHECK] shapesync check
  Config:  .shapesync.toml
  Pairs:   2
  Orphans: reporting unchecked backend models
");
    }

    #[test]
    fn pair_report_groups_findings_by_type() {
        let rendered = render_pair_report(&drifted(), 0, false, false);

        assert_snapshot!(rendered.trim(), @r"
[FAIL] events (2 types, 2 discrepancies)
Event
  [FAIL] missing field: field 'description' of backend type 'EventModel' is missing from 'Event'
  [FAIL] unexpected optional: field 'participants' is optional in 'Event' but required in backend type 'EventModel'
");
    }

    #[test]
    fn clean_pair_is_one_line() {
        let outcome = PairOutcome {
            name: "events".to_string(),
            report: Report::new(),
        };

        let rendered = render_pair_report(&outcome, 0, false, false);
        assert_eq!(rendered, "\n[OK] events (0 types, no drift)\n");
    }

    #[test]
    fn summary_counts_kinds() {
        let result = CheckResult {
            pairs: vec![drifted()],
        };

        let rendered = render_check_summary(&result, false, false);
        assert!(rendered.contains("[FAIL] Drift detected"));
        assert!(rendered.contains("1 pairs, 2 types checked, 1 missing field, 1 unexpected optional"));
    }

    #[test]
    fn summary_success() {
        let rendered = render_check_summary(&CheckResult::default(), false, false);
        assert!(rendered.contains("[OK] No drift detected"));
        assert!(!rendered.contains("Next:"));
    }
}
