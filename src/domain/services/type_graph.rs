//! Type graph builder
//!
//! Resolves `extends` chains per side into flattened, ordered field lists:
//! - Parents are flattened before children (topological order)
//! - Inherited fields keep the position of their first occurrence
//! - A field re-declared at a more derived level overrides optionality and
//!   ignore directive
//! - Fields new at this level are appended in declared order
//!
//! Cycles and duplicate type names are fatal: they are authoring bugs, not drift.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::entities::{FieldDeclaration, FlattenedType, TypeDeclaration};
use crate::domain::value_objects::Side;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("cyclic inheritance among {side} types: {}", .chain.join(" -> "))]
    CyclicInheritance { side: Side, chain: Vec<String> },

    #[error("duplicate {side} type '{name}'{}", describe_origins(.first, .second))]
    DuplicateType {
        side: Side,
        name: String,
        first: Option<PathBuf>,
        second: Option<PathBuf>,
    },

    #[error("type '{name}' is declared on the {actual} side but was passed as a {expected} declaration")]
    SideMismatch {
        name: String,
        expected: Side,
        actual: Side,
    },
}

fn describe_origins(first: &Option<PathBuf>, second: &Option<PathBuf>) -> String {
    match (first, second) {
        (Some(a), Some(b)) => format!(" (in {} and {})", a.display(), b.display()),
        (Some(a), None) | (None, Some(a)) => format!(" (in {})", a.display()),
        (None, None) => String::new(),
    }
}

/// Every declared type of one side, flattened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGraph {
    side: Side,
    /// Declaration order, as the extractor listed the types
    order: Vec<String>,
    flattened: HashMap<String, FlattenedType>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

impl TypeGraph {
    pub fn build(side: Side, declarations: &[TypeDeclaration]) -> Result<Self, GraphError> {
        let by_name = index_declarations(side, declarations)?;

        let mut state: HashMap<&str, Visit> = HashMap::new();
        let mut stack: Vec<&str> = Vec::new();
        let mut topo: Vec<&str> = Vec::with_capacity(declarations.len());
        for decl in declarations {
            visit(side, decl.name(), &by_name, &mut state, &mut stack, &mut topo)?;
        }

        let mut flattened: HashMap<String, FlattenedType> = HashMap::with_capacity(topo.len());
        for name in topo {
            let decl = by_name[name];
            let flat = flatten_one(decl, &by_name, &flattened);
            if !flat.unresolved_parents().is_empty() {
                tracing::warn!(
                    side = %side,
                    r#type = name,
                    parents = ?flat.unresolved_parents(),
                    "extends references a type that is not declared; it contributes no fields"
                );
            }
            flattened.insert(name.to_string(), flat);
        }

        tracing::debug!(side = %side, types = flattened.len(), "type graph built");

        Ok(Self {
            side,
            order: declarations.iter().map(|d| d.name().to_string()).collect(),
            flattened,
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn get(&self, name: &str) -> Option<&FlattenedType> {
        self.flattened.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.flattened.contains_key(name)
    }

    /// Flattened types in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &FlattenedType> {
        self.order.iter().filter_map(|name| self.flattened.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn index_declarations(
    side: Side,
    declarations: &[TypeDeclaration],
) -> Result<HashMap<&str, &TypeDeclaration>, GraphError> {
    let mut by_name: HashMap<&str, &TypeDeclaration> = HashMap::with_capacity(declarations.len());
    for decl in declarations {
        if decl.side() != side {
            return Err(GraphError::SideMismatch {
                name: decl.name().to_string(),
                expected: side,
                actual: decl.side(),
            });
        }
        if let Some(previous) = by_name.insert(decl.name(), decl) {
            return Err(GraphError::DuplicateType {
                side,
                name: decl.name().to_string(),
                first: previous.origin().map(PathBuf::from),
                second: decl.origin().map(PathBuf::from),
            });
        }
    }
    Ok(by_name)
}

fn visit<'a>(
    side: Side,
    name: &'a str,
    by_name: &HashMap<&'a str, &'a TypeDeclaration>,
    state: &mut HashMap<&'a str, Visit>,
    stack: &mut Vec<&'a str>,
    topo: &mut Vec<&'a str>,
) -> Result<(), GraphError> {
    match state.get(name) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            let start = stack.iter().position(|n| *n == name).unwrap_or(0);
            let mut chain: Vec<String> = stack[start..].iter().map(|n| n.to_string()).collect();
            chain.push(name.to_string());
            return Err(GraphError::CyclicInheritance { side, chain });
        }
        None => {}
    }

    let decl: &'a TypeDeclaration = match by_name.get(name) {
        Some(decl) => *decl,
        None => return Ok(()),
    };

    state.insert(name, Visit::InProgress);
    stack.push(name);
    for parent in decl.extends() {
        if by_name.contains_key(parent.as_str()) {
            visit(side, parent.as_str(), by_name, state, stack, topo)?;
        }
    }
    stack.pop();
    state.insert(name, Visit::Done);
    topo.push(name);
    Ok(())
}

/// Parents must already be present in `done`.
fn flatten_one(
    decl: &TypeDeclaration,
    by_name: &HashMap<&str, &TypeDeclaration>,
    done: &HashMap<String, FlattenedType>,
) -> FlattenedType {
    let mut fields: Vec<FieldDeclaration> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut unresolved: Vec<String> = Vec::new();

    let mut merge = |field: &FieldDeclaration| match position.get(&field.name) {
        Some(&idx) => fields[idx].override_with(field),
        None => {
            position.insert(field.name.clone(), fields.len());
            fields.push(field.clone());
        }
    };

    for parent in decl.extends() {
        match done.get(parent) {
            Some(flat) if by_name.contains_key(parent.as_str()) => {
                flat.fields().iter().for_each(&mut merge);
            }
            _ => unresolved.push(parent.clone()),
        }
    }
    decl.own_fields().iter().for_each(&mut merge);

    for (idx, field) in fields.iter_mut().enumerate() {
        field.source_order_index = idx;
    }

    FlattenedType::new(decl.name(), decl.side(), fields, unresolved)
}
