//! Discrepancy value object - one detected drift between a frontend type and
//! its backend counterpart.

use serde::{Deserialize, Serialize};

use super::Side;

/// Kind of structural mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscrepancyKind {
    /// A backend field has no frontend counterpart
    MissingField,
    /// Frontend field is optional while the backend field is required
    UnexpectedOptional,
    /// Co-present fields appear in a different relative order
    OrderMismatch,
    /// A type has no counterpart on the other side
    UnmatchedType,
}

impl DiscrepancyKind {
    pub const ALL: [DiscrepancyKind; 4] = [
        DiscrepancyKind::MissingField,
        DiscrepancyKind::UnexpectedOptional,
        DiscrepancyKind::OrderMismatch,
        DiscrepancyKind::UnmatchedType,
    ];

    pub fn severity(&self) -> Severity {
        match self {
            DiscrepancyKind::OrderMismatch => Severity::Soft,
            _ => Severity::Hard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscrepancyKind::MissingField => "missing field",
            DiscrepancyKind::UnexpectedOptional => "unexpected optional",
            DiscrepancyKind::OrderMismatch => "order mismatch",
            DiscrepancyKind::UnmatchedType => "unmatched type",
        }
    }
}

impl std::fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How strongly a discrepancy signals broken contracts.
///
/// Both severities fail the check; severity only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Hard,
    Soft,
}

/// A single drift finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub kind: DiscrepancyKind,
    /// Frontend type name for pair findings, or the orphaned type's own name
    pub type_name: String,
    /// Backend type of the reconciled pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub detail: String,
    /// Compared field orders, for order mismatches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<FieldOrder>,
}

/// Backend and frontend order of the fields an order check compared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOrder {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl Discrepancy {
    pub fn missing_field(
        frontend_type: &str,
        backend_type: &str,
        field: &str,
        source_name: &str,
    ) -> Self {
        let spelled = if source_name != field {
            format!("'{}' (declared as '{}')", field, source_name)
        } else {
            format!("'{}'", field)
        };
        Self {
            kind: DiscrepancyKind::MissingField,
            type_name: frontend_type.to_string(),
            backend_type: Some(backend_type.to_string()),
            field_name: Some(field.to_string()),
            detail: format!(
                "field {} of backend type '{}' is missing from '{}'",
                spelled, backend_type, frontend_type
            ),
            order: None,
        }
    }

    pub fn unexpected_optional(frontend_type: &str, backend_type: &str, field: &str) -> Self {
        Self {
            kind: DiscrepancyKind::UnexpectedOptional,
            type_name: frontend_type.to_string(),
            backend_type: Some(backend_type.to_string()),
            field_name: Some(field.to_string()),
            detail: format!(
                "field '{}' is optional in '{}' but required in backend type '{}'",
                field, frontend_type, backend_type
            ),
            order: None,
        }
    }

    pub fn order_mismatch(
        frontend_type: &str,
        backend_type: &str,
        field: &str,
        expected: &[&str],
        actual: &[&str],
    ) -> Self {
        Self {
            kind: DiscrepancyKind::OrderMismatch,
            type_name: frontend_type.to_string(),
            backend_type: Some(backend_type.to_string()),
            field_name: Some(field.to_string()),
            detail: format!(
                "fields of '{}' are out of order starting at '{}': expected [{}], found [{}]",
                frontend_type,
                field,
                expected.join(", "),
                actual.join(", ")
            ),
            order: Some(FieldOrder {
                expected: expected.iter().map(|s| s.to_string()).collect(),
                actual: actual.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    pub fn unmatched_type(type_name: &str, side: Side) -> Self {
        let detail = match side {
            Side::Frontend => format!(
                "no backend type matches frontend type '{}'; name them identically or add a [names.map] entry",
                type_name
            ),
            Side::Backend => format!(
                "backend type '{}' is not checked by any frontend type; add a [names.map] entry or list it in [names] exclude",
                type_name
            ),
        };
        Self {
            kind: DiscrepancyKind::UnmatchedType,
            type_name: type_name.to_string(),
            backend_type: side.is_backend().then(|| type_name.to_string()),
            field_name: None,
            detail,
            order: None,
        }
    }

    /// A name mapping points at a backend type that is not declared
    pub fn undeclared_mapping(frontend_type: &str, backend_type: &str) -> Self {
        Self {
            kind: DiscrepancyKind::UnmatchedType,
            type_name: frontend_type.to_string(),
            backend_type: Some(backend_type.to_string()),
            field_name: None,
            detail: format!(
                "'{}' is mapped to backend type '{}', which is not declared",
                frontend_type, backend_type
            ),
            order: None,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Whether this finding names the given field
    pub fn references_field(&self, field: &str) -> bool {
        self.field_name.as_deref() == Some(field)
    }
}

impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.detail)
    }
}
