//! Legacy binary workbook (BIFF) writing.
//!
//! Write-only: the exporter's boundary artifact is the worksheet byte
//! stream consumers feed to spreadsheet readers; reading it back is out of
//! scope.

mod format;
mod stream;
mod writer;

pub use format::*;
pub use stream::RecordStream;
pub use writer::write_worksheet;

#[cfg(test)]
mod tests;
