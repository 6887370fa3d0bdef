//! Parse query
//!
//! Extracts one side and flattens it, for inspecting what the checker sees.

use serde::Serialize;

use crate::domain::entities::{FlattenedType, TypeDeclaration};
use crate::domain::ports::DeclarationSource;
use crate::domain::services::TypeGraph;
use crate::domain::value_objects::Side;
use crate::error::ShapesyncResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSide {
    pub side: Side,
    pub declarations: Vec<TypeDeclaration>,
    /// Same order as `declarations`
    pub flattened: Vec<FlattenedType>,
}

pub fn parse_side(source: &dyn DeclarationSource, side: Side) -> ShapesyncResult<ParsedSide> {
    let declarations = source.list_declarations(side)?;
    let graph = TypeGraph::build(side, &declarations)?;
    let flattened = graph.iter().cloned().collect();

    Ok(ParsedSide {
        side,
        declarations,
        flattened,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldDeclaration;
    use crate::domain::ports::StaticDeclarations;
    use crate::domain::services::GraphError;
    use crate::error::ShapesyncError;

    #[test]
    fn flattens_children() {
        let source = StaticDeclarations {
            frontend: vec![
                TypeDeclaration::new("Event", Side::Frontend)
                    .with_field(FieldDeclaration::new("title")),
                TypeDeclaration::new("EventExtended", Side::Frontend)
                    .with_extends("Event")
                    .with_field(FieldDeclaration::new("isPrivate")),
            ],
            backend: Vec::new(),
        };

        let parsed = parse_side(&source, Side::Frontend).unwrap();

        assert_eq!(parsed.declarations.len(), 2);
        assert_eq!(
            parsed.flattened[1].field_names(),
            vec!["title", "isPrivate"]
        );
    }

    #[test]
    fn cycle_is_fatal() {
        let source = StaticDeclarations {
            frontend: vec![TypeDeclaration::new("A", Side::Frontend).with_extends("A")],
            backend: Vec::new(),
        };

        let err = parse_side(&source, Side::Frontend).unwrap_err();
        assert!(matches!(
            err,
            ShapesyncError::Graph(GraphError::CyclicInheritance { .. })
        ));
    }
}
