//! Side value object - which declaration space a type belongs to
//!
//! - `Frontend`: interface-style declarations consumed by the UI
//! - `Backend`: canonical model definitions (the ground truth)

use serde::{Deserialize, Serialize};

/// Declaration space of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Frontend,
    Backend,
}

impl Side {
    /// The opposite declaration space
    pub fn other(&self) -> Side {
        match self {
            Side::Frontend => Side::Backend,
            Side::Backend => Side::Frontend,
        }
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, Side::Backend)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Frontend => write!(f, "frontend"),
            Side::Backend => write!(f, "backend"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_other_flips() {
        assert_eq!(Side::Frontend.other(), Side::Backend);
        assert_eq!(Side::Backend.other(), Side::Frontend);
    }

    #[test]
    fn side_display_is_lowercase() {
        assert_eq!(Side::Frontend.to_string(), "frontend");
        assert_eq!(Side::Backend.to_string(), "backend");
    }

    #[test]
    fn side_serde_lowercase() {
        let json = serde_json::to_string(&Side::Backend).unwrap();
        assert_eq!(json, "\"backend\"");
    }
}
