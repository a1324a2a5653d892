//! Per-type cell formatting.

use std::collections::HashMap;
use std::fmt;

use crate::schema::{FieldType, FieldValue};

/// A cell formatting rule: renders a field value for display.
pub type StyleRule = Box<dyn Fn(&FieldValue) -> String + Send + Sync>;

/// Formatting rules keyed by declared field type.
///
/// The standard set carries one rule: decimal fields render fixed-point
/// with two decimals, independent of the value's natural precision.
/// Additional rules are inserted per type and override the type-directed
/// default rendering.
pub struct CellStyles {
    rules: HashMap<FieldType, StyleRule>,
}

impl CellStyles {
    /// Rules with the predefined decimal formatting.
    pub fn standard() -> Self {
        let mut styles = Self::empty();
        styles.insert(FieldType::Decimal, |value| match value {
            FieldValue::Decimal(d) => format!("{d:.2}"),
            other => default_render(other),
        });
        styles
    }

    /// No rules at all; every type renders through the default.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Insert or replace the rule for a type.
    pub fn insert(
        &mut self,
        ty: FieldType,
        rule: impl Fn(&FieldValue) -> String + Send + Sync + 'static,
    ) {
        self.rules.insert(ty, Box::new(rule));
    }

    /// Render a value declared as `ty`: the type's rule if present, else
    /// the type-directed default.
    pub fn render(&self, ty: FieldType, value: &FieldValue) -> String {
        match self.rules.get(&ty) {
            Some(rule) => rule(value),
            None => default_render(value),
        }
    }
}

impl Default for CellStyles {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for CellStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellStyles")
            .field("types", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Type-directed default rendering: booleans as single-character flags,
/// everything else through its natural text form.
pub fn default_render(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(true) => "Y".to_string(),
        FieldValue::Bool(false) => "N".to_string(),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::Float(x) => x.to_string(),
        FieldValue::Decimal(d) => d.to_string(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::Temporal(t) => t.to_string(),
    }
}
