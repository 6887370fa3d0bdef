use std::path::Path;

use shapesync::{ExtractError, GraphError, ShapesyncError};

use crate::ui::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::FatalEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Stable machine-readable code for `fatal` events
pub fn error_code(err: &anyhow::Error) -> &'static str {
    let Some(err) = err.downcast_ref::<ShapesyncError>() else {
        return "INTERNAL";
    };
    match err {
        ShapesyncError::Graph(GraphError::CyclicInheritance { .. }) => "CYCLIC_INHERITANCE",
        ShapesyncError::Graph(GraphError::DuplicateType { .. }) => "DUPLICATE_TYPE",
        ShapesyncError::Graph(GraphError::SideMismatch { .. }) => "SIDE_MISMATCH",
        ShapesyncError::Extract(ExtractError::Read { .. }) => "READ_FAILED",
        ShapesyncError::Extract(ExtractError::Unterminated { .. }) => "UNTERMINATED_DECLARATION",
        ShapesyncError::Extract(ExtractError::NoSources { .. }) => "NO_SOURCES",
        ShapesyncError::Extract(ExtractError::InvalidMarker { .. }) => "INVALID_MARKER",
        ShapesyncError::InvalidConfig { .. } | ShapesyncError::Yaml(_) => "INVALID_CONFIG",
        ShapesyncError::MissingPairFile { .. } => "MISSING_PAIR_FILE",
        ShapesyncError::UnknownPair { .. } => "UNKNOWN_PAIR",
        ShapesyncError::ConfigExists { .. } => "CONFIG_EXISTS",
        ShapesyncError::Io(_) => "IO",
    }
}

/// File and line the error points at, when it has one
fn error_location(err: &anyhow::Error) -> (Option<&Path>, Option<usize>) {
    match err.downcast_ref::<ShapesyncError>() {
        Some(ShapesyncError::Extract(ExtractError::Unterminated { path, line, .. })) => {
            (Some(path.as_path()), Some(*line))
        }
        Some(ShapesyncError::Extract(ExtractError::Read { path, .. })) => {
            (Some(path.as_path()), None)
        }
        Some(ShapesyncError::InvalidConfig { file, .. }) => (Some(file.as_path()), None),
        _ => (None, None),
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(cause.to_string()).render(supports_color)
        ));
    }
    out
}

/// Report a fatal error on the channel the run uses
pub fn print_error(err: &anyhow::Error, ui: &UiContext, command: &str) {
    if ui.json {
        let _ = emit_event(&FatalEvent::new(command, error_code(err), err.to_string()));
        return;
    }

    if ui.caps.is_ci && is_github_actions() {
        let (file, line) = error_location(err);
        let file = file.map(|p| p.to_string_lossy().to_string());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                line,
                Some("shapesync"),
            )
        );
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
