//! Type-directed value conversion.
//!
//! - [`TemporalConverter`] - conversion across temporal representations
//!   through a canonical instant
//! - [`boolean`] - Yes/No text flags for mapping layers

pub mod boolean;
mod temporal;
mod value;

pub use temporal::TemporalConverter;
pub use value::{TemporalKind, TemporalValue};
