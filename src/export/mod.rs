//! Tabular export: document model, cell styling, and the exporter.

mod document;
mod exporter;
mod style;

pub use document::{ExportDocument, Row};
pub use exporter::{humanize_header, Exporter};
pub use style::{default_render, CellStyles, StyleRule};
