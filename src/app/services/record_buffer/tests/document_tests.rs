//! Tests for line splitting, span access and commit/restore

use super::super::{Document, LineEnding, TextEncoding, split_lines};
use super::{basin_text, write_fixture};
use crate::Error;

#[test]
fn test_split_lines_keeps_terminators() {
    let lines = split_lines("a\r\nb\nc");

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text, "a");
    assert_eq!(lines[0].ending, LineEnding::CrLf);
    assert_eq!(lines[1].ending, LineEnding::Lf);
    assert_eq!(lines[2].text, "c");
    assert_eq!(lines[2].ending, LineEnding::None);
}

#[test]
fn test_split_lines_trailing_newline() {
    let lines = split_lines("a\n");
    assert_eq!(lines.len(), 1);
    assert!(split_lines("").is_empty());
}

#[test]
fn test_probe_length_counts_line_break() {
    let lines = split_lines("abcd\r\nabcd");
    assert_eq!(lines[0].probe_len(), 5);
    assert_eq!(lines[1].probe_len(), 4);
}

#[test]
fn test_read_span() {
    let doc = Document::from_text("basins.bsn", &basin_text(), TextEncoding::Latin1);

    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.read_span(3, 0, 16).unwrap(), "           4.000");
    assert_eq!(doc.read_span(3, 0, 16).unwrap().trim(), "4.000");
    // Spans past the end of a line are clamped
    assert_eq!(doc.read_span(2, 18, 200).unwrap(), "Land Area");
    assert_eq!(doc.read_span(2, 500, 510).unwrap(), "");
}

#[test]
fn test_read_span_out_of_range() {
    let doc = Document::from_text("basins.bsn", &basin_text(), TextEncoding::Latin1);

    assert!(matches!(doc.read_span(0, 0, 4), Err(Error::OutOfRange { .. })));
    assert!(matches!(doc.read_span(5, 0, 4), Err(Error::OutOfRange { .. })));
}

#[test]
fn test_write_span_right_justifies() {
    let mut doc = Document::from_text("basins.bsn", &basin_text(), TextEncoding::Latin1);

    doc.write_span(3, 0, 16, "-1.500").unwrap();

    assert_eq!(
        doc.read_working_span(3, 0, 20).unwrap(),
        "          -1.500    "
    );
    // Reads still see committed text until commit
    assert_eq!(doc.read_span(3, 0, 16).unwrap().trim(), "4.000");
    assert!(doc.is_dirty());
}

#[test]
fn test_write_span_overflow_leaves_line_untouched() {
    let mut doc = Document::from_text("basins.bsn", &basin_text(), TextEncoding::Latin1);

    let result = doc.write_span(3, 10, 16, "1234.5678");

    match result {
        Err(Error::FormatOverflow { line, width, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(width, 6);
        }
        other => panic!("expected overflow, got {:?}", other),
    }
    assert!(!doc.is_dirty());
}

#[test]
fn test_write_span_pads_short_line() {
    let mut doc = Document::from_text("x.rte", "ab\n", TextEncoding::Latin1);

    doc.write_span(1, 4, 8, "1.5").unwrap();

    assert_eq!(doc.working_text(), "ab   1.5\n");
}

#[test]
fn test_write_span_keeps_tail() {
    let mut doc = Document::from_text("x.rte", "0123456789\n", TextEncoding::Latin1);

    doc.write_span(1, 2, 5, "x").unwrap();

    assert_eq!(doc.working_text(), "01  x56789\n");
}

#[test]
fn test_commit_without_edits_is_byte_identical() {
    let bytes = b"header \xe9t\xe9\r\n     1.000\r\nno newline";
    let (_dir, path) = write_fixture("000010001.gw", bytes);

    let mut doc = Document::load(&path, TextEncoding::Latin1).unwrap();
    doc.commit(&path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), bytes.to_vec());
}

#[test]
fn test_commit_promotes_working_text() {
    let (_dir, path) = write_fixture("basins.bsn", basin_text().as_bytes());
    let mut doc = Document::load(&path, TextEncoding::Latin1).unwrap();

    doc.write_span(4, 0, 16, "0.750").unwrap();
    doc.commit(&path).unwrap();

    assert!(!doc.is_dirty());
    assert_eq!(doc.read_span(4, 0, 16).unwrap().trim(), "0.750");

    let first = std::fs::read(&path).unwrap();
    doc.commit(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[test]
fn test_restore_writes_initial_text() {
    let original = basin_text();
    let (_dir, path) = write_fixture("basins.bsn", original.as_bytes());
    let mut doc = Document::load(&path, TextEncoding::Latin1).unwrap();

    doc.write_span(3, 0, 16, "9.000").unwrap();
    doc.commit(&path).unwrap();
    doc.restore(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    assert_eq!(doc.read_span(3, 0, 16).unwrap().trim(), "4.000");
}

#[test]
fn test_discard_changes() {
    let mut doc = Document::from_text("basins.bsn", &basin_text(), TextEncoding::Latin1);
    doc.write_span(3, 0, 16, "9.000").unwrap();

    doc.discard_changes();

    assert!(!doc.is_dirty());
    assert_eq!(doc.working_text(), basin_text());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = Document::load(&dir.path().join("absent.bsn"), TextEncoding::Latin1);
    assert!(matches!(result, Err(Error::Io { .. })));
}
