//! Ignore directive value object
//!
//! A field-scoped override lifted out of a source comment by the extractor.
//! The reconciler never looks at comment text, only at this attribute.

use serde::{Deserialize, Serialize};

/// Which checks an ignore directive suppresses for its field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IgnoreDirective {
    #[default]
    None,
    /// `ignore field X`: presence, optionality and order are not checked
    SuppressMissing,
    /// `ignore order X`: the field must still be present, but its position is free
    SuppressOrder,
}

impl IgnoreDirective {
    /// Presence and optionality checks are skipped
    pub fn suppresses_missing(&self) -> bool {
        matches!(self, IgnoreDirective::SuppressMissing)
    }

    /// The field is left out of the order comparison.
    ///
    /// `SuppressMissing` implies this.
    pub fn suppresses_order(&self) -> bool {
        matches!(
            self,
            IgnoreDirective::SuppressMissing | IgnoreDirective::SuppressOrder
        )
    }

    pub fn is_none(&self) -> bool {
        matches!(self, IgnoreDirective::None)
    }

    /// Combine two directives, keeping the stronger one
    pub fn strongest(self, other: IgnoreDirective) -> IgnoreDirective {
        match (self, other) {
            (IgnoreDirective::SuppressMissing, _) | (_, IgnoreDirective::SuppressMissing) => {
                IgnoreDirective::SuppressMissing
            }
            (IgnoreDirective::SuppressOrder, _) | (_, IgnoreDirective::SuppressOrder) => {
                IgnoreDirective::SuppressOrder
            }
            _ => IgnoreDirective::None,
        }
    }
}

impl std::fmt::Display for IgnoreDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreDirective::None => write!(f, "none"),
            IgnoreDirective::SuppressMissing => write!(f, "ignore field"),
            IgnoreDirective::SuppressOrder => write!(f, "ignore order"),
        }
    }
}
