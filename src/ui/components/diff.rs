use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Line diff of two field orders, backend (`-`) against frontend (`+`)
pub fn render_order_diff(expected: &[String], actual: &[String], supports_color: bool) -> String {
    let old = lines_of(expected);
    let new = lines_of(actual);
    let diff = TextDiff::from_lines(&old, &new);

    let mut out = String::new();
    out.push_str(&color_line("--- backend", ChangeTag::Equal, supports_color, LineStyle::Header));
    out.push('\n');
    out.push_str(&color_line("+++ frontend", ChangeTag::Equal, supports_color, LineStyle::Header));
    out.push('\n');

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        let value = change.value().trim_end_matches('\n');
        let line = format!("{sign} {value}");
        out.push_str(&color_line(&line, change.tag(), supports_color, LineStyle::Body));
        out.push('\n');
    }

    out
}

fn lines_of(fields: &[String]) -> String {
    let mut s = String::new();
    for field in fields {
        s.push_str(field);
        s.push('\n');
    }
    s
}

#[derive(Debug, Clone, Copy)]
enum LineStyle {
    Header,
    Body,
}

fn color_line(s: &str, tag: ChangeTag, supports_color: bool, style: LineStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    match style {
        LineStyle::Header => format!("{}", s.with(theme::colors::INFO)),
        LineStyle::Body => match tag {
            ChangeTag::Delete => format!("{}", s.with(theme::colors::ERROR)),
            ChangeTag::Insert => format!("{}", s.with(theme::colors::SUCCESS)),
            ChangeTag::Equal => format!("{}", s.with(theme::colors::DIM)),
        },
    }
}
