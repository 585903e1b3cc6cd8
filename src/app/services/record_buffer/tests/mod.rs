//! Test utilities for the record buffer
//!
//! Fixture text mirrors the layout of a SWAT basin file: a free-text header
//! followed by right-aligned values and a `| NAME : description` trailer.

use std::path::PathBuf;
use tempfile::TempDir;

// Test modules
mod document_tests;

/// Three-line basin-style fixture with LF terminators
pub fn basin_text() -> String {
    [
        "Basin data           .bsn file Thu Jan 01 00:00:00 2020 ArcSWAT 2012.10_4.19",
        "Modeling Options: Land Area",
        "           4.000    | SFTMP : Snowfall temperature [deg C]",
        "           0.500    | SMTMP : Snow melt base temperature [deg C]",
    ]
    .join("\n")
        + "\n"
}

/// Write raw bytes into a fresh temp dir and return both
pub fn write_fixture(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    (dir, path)
}
