use shapesync::application::ParsedSide;
use shapesync::domain::entities::FieldDeclaration;
use shapesync::domain::value_objects::IgnoreDirective;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_parsed_side(parsed: &ParsedSide, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Parse, format!("{} declarations", parsed.side));
    header.add("Types", parsed.declarations.len().to_string());
    let mut out = header.render(supports_color, supports_unicode);

    for (decl, flat) in parsed.declarations.iter().zip(&parsed.flattened) {
        let mut title = ColoredText::info(decl.name()).bold().render(supports_color);
        if !decl.extends().is_empty() {
            title.push_str(&format!(" extends {}", decl.extends().join(", ")));
        }
        if let Some(origin) = decl.origin() {
            title.push_str(&format!(
                " {}",
                ColoredText::dim(origin.display().to_string()).render(supports_color)
            ));
        }
        out.push_str(&format!("\n{}\n", title));

        for field in flat.fields() {
            out.push_str(&format!("  {}\n", describe_field(field)));
        }
        for parent in flat.unresolved_parents() {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!("unresolved parent '{}'", parent))
                    .render(supports_color)
            ));
        }
    }

    out
}

fn describe_field(field: &FieldDeclaration) -> String {
    let mut s = field.name.clone();
    if field.optional {
        s.push('?');
    }
    let mut notes = Vec::new();
    if field.source_name != field.name {
        notes.push(format!("as {}", field.source_name));
    }
    match field.ignore {
        IgnoreDirective::None => {}
        IgnoreDirective::SuppressMissing => notes.push("ignore field".to_string()),
        IgnoreDirective::SuppressOrder => notes.push("ignore order".to_string()),
    }
    if field.placeholder {
        notes.push("directive only".to_string());
    }
    if !notes.is_empty() {
        s.push_str(&format!(" [{}]", notes.join(", ")));
    }
    s
}
