//! Utility types shared across the library.

mod error;

pub use error::*;
