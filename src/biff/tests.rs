use super::format::{
    MAX_COLUMNS, MAX_LABEL_BYTES, MAX_ROWS, REC_BLANK, REC_BOF, REC_EOF, REC_LABEL,
};
use super::write_worksheet;
use crate::export::{ExportDocument, Row};
use crate::util::Error;

/// Walk the framed records of a serialized stream.
fn records(bytes: &[u8]) -> Vec<(u16, Vec<u8>)> {
    let mut out = Vec::new();
    let mut at = 0;
    while at < bytes.len() {
        let id = u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let len = u16::from_le_bytes([bytes[at + 2], bytes[at + 3]]) as usize;
        out.push((id, bytes[at + 4..at + 4 + len].to_vec()));
        at += 4 + len;
    }
    out
}

fn doc(rows: Vec<Vec<&str>>) -> ExportDocument {
    let mut document = ExportDocument::new();
    for row in rows {
        document.push_row(Row::from_cells(
            row.into_iter().map(String::from).collect(),
        ));
    }
    document
}

#[test]
fn test_empty_document_is_bof_eof() {
    let mut sink = Vec::new();
    write_worksheet(&ExportDocument::new(), &mut sink).unwrap();

    let recs = records(&sink);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].0, REC_BOF);
    assert_eq!(recs[0].1, [0x02, 0x00, 0x10, 0x00]);
    assert_eq!(recs[1].0, REC_EOF);
    assert!(recs[1].1.is_empty());
}

#[test]
fn test_one_record_per_cell() {
    let mut sink = Vec::new();
    let document = doc(vec![vec!["a", "b"], vec!["", "d"]]);
    write_worksheet(&document, &mut sink).unwrap();

    let recs = records(&sink);
    // BOF + 4 cells + EOF
    assert_eq!(recs.len(), 6);
    assert_eq!(recs[1].0, REC_LABEL);
    assert_eq!(recs[2].0, REC_LABEL);
    assert_eq!(recs[3].0, REC_BLANK);
    assert_eq!(recs[4].0, REC_LABEL);
}

#[test]
fn test_label_layout() {
    let mut sink = Vec::new();
    let document = doc(vec![vec!["", "hi"]]);
    write_worksheet(&document, &mut sink).unwrap();

    let recs = records(&sink);
    let (id, payload) = &recs[2];
    assert_eq!(*id, REC_LABEL);
    // row 0, col 1, zeroed attrs, length, text
    assert_eq!(payload[0..2], [0, 0]);
    assert_eq!(payload[2..4], [1, 0]);
    assert_eq!(payload[4..7], [0, 0, 0]);
    assert_eq!(payload[7], 2);
    assert_eq!(&payload[8..], b"hi");
}

#[test]
fn test_blank_layout() {
    let mut sink = Vec::new();
    let document = doc(vec![vec![""]]);
    write_worksheet(&document, &mut sink).unwrap();

    let recs = records(&sink);
    let (id, payload) = &recs[1];
    assert_eq!(*id, REC_BLANK);
    assert_eq!(payload.len(), 7);
}

#[test]
fn test_label_clamped_to_limit() {
    let long = "x".repeat(MAX_LABEL_BYTES + 40);
    let mut sink = Vec::new();
    write_worksheet(&doc(vec![vec![&long]]), &mut sink).unwrap();

    let recs = records(&sink);
    let payload = &recs[1].1;
    assert_eq!(payload[7] as usize, MAX_LABEL_BYTES);
    assert_eq!(payload.len(), 8 + MAX_LABEL_BYTES);
}

#[test]
fn test_non_latin1_degrades() {
    let mut sink = Vec::new();
    write_worksheet(&doc(vec![vec!["a\u{2603}b"]]), &mut sink).unwrap();

    let recs = records(&sink);
    assert_eq!(&recs[1].1[8..], b"a?b");
}

#[test]
fn test_row_limit_rejected() {
    let mut document = ExportDocument::new();
    for _ in 0..=MAX_ROWS {
        document.push_row(Row::new());
    }

    let mut sink = Vec::new();
    let result = write_worksheet(&document, &mut sink);

    assert!(matches!(result, Err(Error::RowLimitExceeded { .. })));
}

#[test]
fn test_column_limit_rejected() {
    let row: Vec<&str> = vec!["c"; MAX_COLUMNS + 1];
    let mut sink = Vec::new();
    let result = write_worksheet(&doc(vec![row]), &mut sink);

    assert!(matches!(result, Err(Error::ColumnLimitExceeded { .. })));
    // Nothing was written before the limit check.
    assert!(sink.is_empty());
}
