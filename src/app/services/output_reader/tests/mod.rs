//! Test utilities for the output reader
//!
//! Output rows are assembled by placing right-aligned text into the spans
//! of the layout, so every fixture row matches the reader's columns.

use std::path::Path;
use tempfile::TempDir;

use crate::app::services::output_reader::{ColumnSpan, OutputKind};

mod efficiency_tests;

/// One data row with `area`, its size and the given column values
pub fn output_row(kind: OutputKind, area: u32, size: f64, values: &[(&str, f64)]) -> String {
    let width = kind
        .columns()
        .iter()
        .map(|(_, span)| span.end)
        .max()
        .unwrap_or(0);
    let mut row: Vec<char> = vec![' '; width + 1];

    let label = match kind {
        OutputKind::Reach => "REACH ",
        OutputKind::Subbasin => "BIGSUB",
        OutputKind::Hru => "AGR",
    };
    place(&mut row, ColumnSpan::new(0, label.len()), label);
    place(&mut row, kind.area_span(), &area.to_string());
    place(&mut row, kind.area_size_span(), &format!("{:.4E}", size));

    for (name, value) in values {
        let span = kind.column(name).unwrap();
        place(&mut row, span, &format!("{:.3E}", value));
    }

    row.into_iter().collect::<String>().trim_end().to_string()
}

fn place(row: &mut [char], span: ColumnSpan, text: &str) {
    let width = span.end - span.start;
    let justified = format!("{:>width$}", text, width = width);
    assert_eq!(justified.len(), width, "'{}' does not fit {:?}", text, span);
    for (offset, c) in justified.chars().enumerate() {
        row[span.start + offset] = c;
    }
}

/// Output file text: nine header lines followed by `rows`
pub fn output_file(rows: &[String]) -> String {
    let mut lines: Vec<String> = (1..=8).map(|i| format!("SWAT output header line {}", i)).collect();
    lines.push(String::new());
    lines.extend(rows.iter().cloned());
    lines.join("\n") + "\n"
}

pub fn write_output(dir: &Path, kind: OutputKind, rows: &[String]) {
    std::fs::write(dir.join(kind.file_name()), output_file(rows)).unwrap();
}

pub fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}
