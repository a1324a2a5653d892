//! Field descriptors and runtime field values.
//!
//! Record types publish a compile-time descriptor table in declaration
//! order and extract field values by ordinal. The table is the explicit
//! substitute for runtime reflection: derived once per type, never per row.

use std::fmt;

use thiserror::Error;

use crate::convert::{TemporalKind, TemporalValue};

/// Declared type of a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Boolean flag.
    Bool,
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Fixed-point decimal number.
    Decimal,
    /// Free text.
    Text,
    /// One of the supported temporal representations.
    Temporal(TemporalKind),
}

impl FieldType {
    /// Check if this is a temporal type.
    #[inline]
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Temporal(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Decimal => f.write_str("decimal"),
            Self::Text => f.write_str("text"),
            Self::Temporal(kind) => write!(f, "{kind}"),
        }
    }
}

/// Runtime value extracted from a record field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Fixed-point decimal number.
    Decimal(f64),
    /// Free text.
    Text(String),
    /// Temporal value.
    Temporal(TemporalValue),
}

impl FieldValue {
    /// The declared-type tag matching this value.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Bool(_) => FieldType::Bool,
            Self::Int(_) => FieldType::Int,
            Self::Float(_) => FieldType::Float,
            Self::Decimal(_) => FieldType::Decimal,
            Self::Text(_) => FieldType::Text,
            Self::Temporal(value) => FieldType::Temporal(value.kind()),
        }
    }

    /// Check if this is a temporal value.
    #[inline]
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Temporal(_))
    }
}

/// Metadata for one serializable field of a record type.
///
/// The ordinal fixes both header and data-cell order; it matches the
/// position in the descriptor table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared.
    pub name: &'static str,
    /// Declared type.
    pub ty: FieldType,
    /// Position in declaration order.
    pub ordinal: usize,
}

impl FieldDescriptor {
    /// Create a descriptor.
    pub const fn new(name: &'static str, ty: FieldType, ordinal: usize) -> Self {
        Self { name, ty, ordinal }
    }
}

/// A single field could not be read from a record.
///
/// Recovered locally during export: the cell stays empty and the error is
/// collected into the diagnostics list returned next to the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot read field `{field}` ({ty}): {reason}")]
pub struct FieldAccessError {
    /// Field name from the descriptor.
    pub field: &'static str,
    /// Declared field type.
    pub ty: FieldType,
    /// What went wrong.
    pub reason: String,
}

impl FieldAccessError {
    /// Create a field access error.
    pub fn new(field: &'static str, ty: FieldType, reason: impl Into<String>) -> Self {
        Self {
            field,
            ty,
            reason: reason.into(),
        }
    }
}

/// Result of a single field extraction. `Ok(None)` means the field is
/// unset.
pub type FieldResult = Result<Option<FieldValue>, FieldAccessError>;

/// A record type that can be enumerated field by field.
///
/// `fields` returns the descriptor table in declaration order, including
/// any embedded fields. `field` extracts one value by ordinal; an unset
/// field renders as an empty cell.
pub trait Record {
    /// Descriptor table, one entry per field, declaration order.
    fn fields() -> &'static [FieldDescriptor];

    /// Extract the value at `ordinal`.
    fn field(&self, ordinal: usize) -> FieldResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_display() {
        assert_eq!(FieldType::Bool.to_string(), "bool");
        assert_eq!(FieldType::Decimal.to_string(), "decimal");
        assert_eq!(
            FieldType::Temporal(TemporalKind::Date).to_string(),
            "date"
        );
    }

    #[test]
    fn test_field_value_type_tag() {
        assert_eq!(FieldValue::Int(7).field_type(), FieldType::Int);
        assert_eq!(
            FieldValue::Text("x".into()).field_type(),
            FieldType::Text
        );
        assert!(
            FieldValue::Temporal(TemporalValue::UnixMillis(0))
                .field_type()
                .is_temporal()
        );
    }

    #[test]
    fn test_access_error_display() {
        let err = FieldAccessError::new("orderId", FieldType::Int, "poisoned");
        let text = err.to_string();
        assert!(text.contains("orderId"));
        assert!(text.contains("int"));
        assert!(text.contains("poisoned"));
    }
}
