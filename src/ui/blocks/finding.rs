use shapesync::domain::value_objects::{Discrepancy, Severity};

use crate::ui::components::diff::render_order_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One reported discrepancy, as a line under its type group
#[derive(Debug, Clone, Copy)]
pub struct FindingItem<'a> {
    discrepancy: &'a Discrepancy,
}

impl<'a> FindingItem<'a> {
    pub fn new(discrepancy: &'a Discrepancy) -> Self {
        Self { discrepancy }
    }

    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let d = self.discrepancy;
        let icon = match d.severity() {
            Severity::Hard => Icon::Error,
            Severity::Soft => Icon::Warning,
        };
        let label = match d.severity() {
            Severity::Hard => ColoredText::error(d.kind.label()),
            Severity::Soft => ColoredText::warning(d.kind.label()),
        };

        let mut out = format!(
            "  {} {}: {}\n",
            icon.colored(supports_color, supports_unicode),
            label.render(supports_color),
            d.detail
        );

        if !verbose {
            return out;
        }

        if let Some(order) = &d.order {
            let diff = render_order_diff(&order.expected, &order.actual, supports_color);
            for line in diff.lines() {
                out.push_str(&format!("      {}\n", line));
            }
        }
        out
    }
}
