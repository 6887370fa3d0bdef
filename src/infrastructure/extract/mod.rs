//! Declaration extractors
//!
//! Lexical readers that lift source text into `TypeDeclaration`s:
//! - `typescript` - frontend interfaces
//! - `django` - backend model classes
//!
//! Neither does real parsing; they recognize the declaration shapes the
//! check needs and ignore everything else.

mod django;
mod naming;
mod typescript;

use regex::Regex;

use crate::domain::ports::ExtractError;
use crate::domain::value_objects::IgnoreDirective;

pub use django::{resolve_models, DjangoExtractor, ModelClass};
pub use naming::snake_to_camel;
pub use typescript::TypeScriptExtractor;

/// Marker recognized in addition to the configured one, so existing
/// annotated sources keep working.
pub const LEGACY_MARKER: &str = "ts-backend-check";

pub const DEFAULT_MARKER: &str = "shapesync";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Comment marker introducing an ignore directive (`// <marker>: ignore field x`)
    pub marker: String,
    /// Convert backend snake_case field names to camelCase
    pub camel_case_backend: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            camel_case_backend: true,
        }
    }
}

/// An ignore directive found in a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Directive {
    pub kind: IgnoreDirective,
    pub field: Option<String>,
}

pub(crate) fn directive_regex(marker: &str) -> Result<Regex, ExtractError> {
    let marker = marker.trim();
    if marker.is_empty() {
        return Err(ExtractError::InvalidMarker {
            marker: marker.to_string(),
            message: "marker must not be empty".to_string(),
        });
    }
    let pattern = format!(
        r"(?:{}|{})\s*:\s*ignore\s+(field|order)\b(?:\s+([A-Za-z_$][\w$]*))?",
        regex::escape(marker),
        regex::escape(LEGACY_MARKER)
    );
    Regex::new(&pattern).map_err(|e| ExtractError::InvalidMarker {
        marker: marker.to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn parse_directive(re: &Regex, comment: &str) -> Option<Directive> {
    let caps = re.captures(comment)?;
    let kind = match &caps[1] {
        "order" => IgnoreDirective::SuppressOrder,
        _ => IgnoreDirective::SuppressMissing,
    };
    Some(Directive {
        kind,
        field: caps.get(2).map(|m| m.as_str().to_string()),
    })
}

/// 1-indexed line of a byte offset
pub(crate) fn line_of(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())].matches('\n').count() + 1
}
