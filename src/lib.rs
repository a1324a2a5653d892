//! # Tabula
//!
//! Typed temporal conversion and reflective tabular export to legacy
//! binary workbooks.
//!
//! Two loosely-coupled components with no shared mutable state:
//!
//! - [`convert`] - type-directed conversion across temporal
//!   representations through a canonical instant
//! - [`export`] - serialization of uniformly-typed record sequences into a
//!   workbook document written to any byte sink
//!
//! Supporting modules:
//!
//! - [`schema`] - per-record-type field descriptors, the explicit
//!   substitute for runtime reflection
//! - [`biff`] - the legacy binary worksheet stream
//! - [`util`] - errors
//!
//! ## Example
//!
//! ```ignore
//! use tabula::prelude::*;
//!
//! let exporter = Exporter::new();
//! let mut sink = Vec::new();
//! let skipped = exporter.write(&orders, &mut sink, "jdoe")?;
//! ```

pub mod biff;
pub mod convert;
pub mod export;
pub mod schema;
pub mod util;

// Re-export commonly used types
pub use convert::{TemporalConverter, TemporalKind, TemporalValue};
pub use export::Exporter;
pub use util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::convert::{TemporalConverter, TemporalKind, TemporalValue};
    pub use crate::export::{CellStyles, ExportDocument, Exporter, Row};
    pub use crate::schema::{
        FieldAccessError, FieldDescriptor, FieldResult, FieldType, FieldValue, Record,
    };
    pub use crate::util::{Error, Result};
}
