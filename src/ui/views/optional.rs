use shapesync::application::OptionalField;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Optional backend fields, grouped by model
pub fn render_optional_fields(
    fields: &[OptionalField],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if fields.is_empty() {
        return format!(
            "{} No optional backend fields\n",
            Icon::Success.colored(supports_color, supports_unicode)
        );
    }

    let mut out = String::new();
    let mut current: Option<&str> = None;
    for field in fields {
        if current != Some(field.type_name.as_str()) {
            let origin = match &field.origin {
                Some(path) => format!(
                    " {}",
                    ColoredText::dim(path.display().to_string()).render(supports_color)
                ),
                None => String::new(),
            };
            out.push_str(&format!(
                "{}{}\n",
                ColoredText::info(field.type_name.as_str()).render(supports_color),
                origin
            ));
            current = Some(field.type_name.as_str());
        }

        let spelled = if field.source_name != field.field {
            format!("{} ({})", field.field, field.source_name)
        } else {
            field.field.clone()
        };
        out.push_str(&format!(
            "  {} {}?\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            spelled
        ));
    }

    out.push_str(&format!(
        "\n{} optional fields; mark the matching interface properties with `?`\n",
        fields.len()
    ));
    out
}
