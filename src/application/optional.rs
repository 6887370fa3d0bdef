//! Optional fields query
//!
//! Lists backend fields declared optional (`blank=True` / `null=True`), so the
//! matching frontend properties can be marked `?` by hand.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ports::DeclarationSource;
use crate::domain::value_objects::Side;
use crate::error::ShapesyncResult;

/// One optional backend field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionalField {
    pub type_name: String,
    /// Name as compared against the frontend
    pub field: String,
    /// Name as written in the model
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<PathBuf>,
}

/// Optional fields of every backend type, in declaration order.
///
/// Only fields a type declares itself are listed; inherited ones are listed
/// under the type that declares them.
pub fn optional_fields(source: &dyn DeclarationSource) -> ShapesyncResult<Vec<OptionalField>> {
    let backend = source.list_declarations(Side::Backend)?;

    let fields = backend
        .iter()
        .flat_map(|decl| {
            decl.own_fields()
                .iter()
                .filter(|f| f.optional && !f.placeholder)
                .map(move |f| OptionalField {
                    type_name: decl.name().to_string(),
                    field: f.name.clone(),
                    source_name: f.source_name.clone(),
                    origin: decl.origin().map(|p| p.to_path_buf()),
                })
        })
        .collect();

    Ok(fields)
}
