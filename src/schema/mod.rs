//! Record schema descriptors.
//!
//! The converter and the exporter are independent consumers of the same
//! field-enumeration facility: a per-record-type descriptor table plus
//! ordinal-based value extraction, with humanized header labels cached per
//! type.

mod cache;
mod field;

pub use cache::HeaderCache;
pub use field::{FieldAccessError, FieldDescriptor, FieldResult, FieldType, FieldValue, Record};
