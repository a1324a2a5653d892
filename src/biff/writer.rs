//! Worksheet serialization.

use std::io::Write;

use crate::export::ExportDocument;
use crate::util::{Error, Result};

use super::format::{
    BOF_VERSION, BOF_WORKSHEET, CELL_ATTRS, MAX_COLUMNS, MAX_LABEL_BYTES, MAX_ROWS,
    REC_BLANK, REC_BOF, REC_EOF, REC_LABEL, REPLACEMENT_BYTE,
};
use super::stream::RecordStream;

/// Serialize a document as a BIFF worksheet stream on `sink`.
///
/// One LABEL record per non-empty cell, one BLANK per empty cell,
/// row-major in document order. Limits are enforced up front so a
/// too-large document fails before any byte is written. The sink stays
/// open for the caller.
pub fn write_worksheet<W: Write>(document: &ExportDocument, sink: &mut W) -> Result<()> {
    if document.num_rows() > MAX_ROWS {
        return Err(Error::RowLimitExceeded {
            rows: document.num_rows(),
            max: MAX_ROWS,
        });
    }
    if let Some(wide) = document.rows().iter().find(|row| row.len() > MAX_COLUMNS) {
        return Err(Error::ColumnLimitExceeded {
            cols: wide.len(),
            max: MAX_COLUMNS,
        });
    }

    let mut stream = RecordStream::new(sink);

    let mut bof = Vec::with_capacity(4);
    bof.extend_from_slice(&BOF_VERSION.to_le_bytes());
    bof.extend_from_slice(&BOF_WORKSHEET.to_le_bytes());
    stream.record(REC_BOF, &bof)?;

    for (row_idx, row) in document.rows().iter().enumerate() {
        for (col_idx, cell) in row.cells().iter().enumerate() {
            if cell.is_empty() {
                stream.record(REC_BLANK, &cell_prefix(row_idx, col_idx))?;
            } else {
                let text = encode_label(cell);
                let mut payload = cell_prefix(row_idx, col_idx);
                payload.push(text.len() as u8);
                payload.extend_from_slice(&text);
                stream.record(REC_LABEL, &payload)?;
            }
        }
    }

    stream.record(REC_EOF, &[])?;
    stream.flush()
}

/// Row/column/attribute prefix shared by all cell records.
fn cell_prefix(row: usize, col: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(7);
    buf.extend_from_slice(&(row as u16).to_le_bytes());
    buf.extend_from_slice(&(col as u16).to_le_bytes());
    buf.extend_from_slice(&CELL_ATTRS);
    buf
}

/// Encode label text as a byte string: Latin-1 with a replacement byte for
/// anything outside, clamped to the record's length limit.
fn encode_label(text: &str) -> Vec<u8> {
    let mut bytes: Vec<u8> = text
        .chars()
        .map(|c| {
            if (c as u32) < 0x100 {
                c as u8
            } else {
                REPLACEMENT_BYTE
            }
        })
        .collect();
    bytes.truncate(MAX_LABEL_BYTES);
    bytes
}
