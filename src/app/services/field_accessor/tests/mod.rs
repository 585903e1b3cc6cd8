//! Test utilities for field access
//!
//! Soil lines are built with `format!` so that the first horizon value sits
//! in columns 27..39 and every further horizon twelve columns to the right.

use crate::app::services::record_buffer::{Document, TextEncoding};

mod accessor_tests;
mod change_tests;

/// One layered soil line: a 27-character label followed by 12-wide values
pub fn soil_line(label: &str, values: &[&str]) -> String {
    let slots: String = values.iter().map(|v| format!("{:>12}", v)).collect();
    format!("{:<27}{}", label, slots)
}

/// Minimal soil document whose depth and clay rows carry `values`
pub fn soil_document(depths: &[&str], clay: &[&str]) -> Document {
    let mut lines = vec![
        " .Sol file Watershed HRU:1 Subbasin:1 HRU:1 Luse:AGRL Soil: 1".to_string(),
        " Soil Name: TestSoil".to_string(),
        " Soil Hydrologic Group: B".to_string(),
        format!("{:<28}{:>8}", " Maximum rooting depth(m) :", "1500.00"),
        " Porosity fraction from which anions are excluded:  0.500".to_string(),
        " Crack volume potential of soil:  0.500".to_string(),
        " Texture 1                :".to_string(),
        soil_line(" Depth                [mm]:", depths),
    ];
    for row in 9..=12 {
        lines.push(soil_line(&format!(" Row {}", row), &vec!["0.0000"; depths.len()]));
    }
    lines.push(soil_line(" Clay           [%]       :", clay));
    let text = lines.join("\n") + "\n";
    Document::from_text("000010001.sol", &text, TextEncoding::Latin1)
}
