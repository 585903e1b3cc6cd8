//! Tests for reading and writing registry fields

use super::super::{format_fixed, occurrence_count, read_raw, read_value, write_value};
use super::{soil_document, soil_line};
use crate::Error;
use crate::app::services::field_registry::{BasinParameter, Parameter, SoilParameter};
use crate::app::services::record_buffer::{Document, TextEncoding};

fn basin_document() -> Document {
    let mut lines = vec![
        "Basin data           .bsn file".to_string(),
        "Modeling Options: Land Area".to_string(),
        "Water Balance:".to_string(),
    ];
    lines.push(format!("{:>16}    | SFTMP : Snowfall temperature [deg C]", "1.0000"));
    lines.push(format!("{:>16}    | SMTMP : Snow melt base temperature [deg C]", "0.5000"));
    Document::from_text("basins.bsn", &(lines.join("\n") + "\n"), TextEncoding::Latin1)
}

#[test]
fn test_read_scalar_value() {
    let doc = basin_document();

    let sftmp = read_value(&doc, "SFTMP", BasinParameter::Sftmp.descriptor()).unwrap();
    let smtmp = read_value(&doc, "SMTMP", BasinParameter::Smtmp.descriptor()).unwrap();

    assert_eq!(sftmp, vec![1.0]);
    assert_eq!(smtmp, vec![0.5]);
}

#[test]
fn test_read_missing_line_is_out_of_range() {
    let doc = basin_document();
    let result = read_value(&doc, "ESCO", BasinParameter::Esco.descriptor());
    assert!(matches!(result, Err(Error::OutOfRange { .. })));
}

#[test]
fn test_layered_probe_reads_every_horizon() {
    let doc = soil_document(&["300.00", "1000.00", "1500.00"], &["20.0000", "25.0000", "30.0000"]);

    let depths = read_value(&doc, "SOL_Z", SoilParameter::SolZ.descriptor()).unwrap();
    let clay = read_value(&doc, "CLAY", SoilParameter::Clay.descriptor()).unwrap();

    assert_eq!(depths, vec![300.0, 1000.0, 1500.0]);
    assert_eq!(clay, vec![20.0, 25.0, 30.0]);
}

#[test]
fn test_layered_probe_single_horizon() {
    let doc = soil_document(&["1500.00"], &["20.0000"]);
    assert_eq!(occurrence_count(&doc, SoilParameter::SolZ.descriptor()).unwrap(), 1);
}

#[test]
fn test_layered_probe_on_last_line_without_newline() {
    let text = soil_line(" Depth                [mm]:", &["100.00", "200.00"]);
    let padded = (1..8).map(|_| "x\n").collect::<String>() + &text;
    let doc = Document::from_text("x.sol", &padded, TextEncoding::Latin1);

    let raw = read_raw(&doc, SoilParameter::SolZ.descriptor()).unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[1].1.trim(), "200.00");
}

#[test]
fn test_parse_failures_are_collected() {
    let doc = soil_document(&["300.00", "abc", "1500.00"], &["20.0000", "25.0000", "30.0000"]);

    match read_value(&doc, "SOL_Z", SoilParameter::SolZ.descriptor()) {
        Err(Error::FieldParse { kind, failures, .. }) => {
            assert_eq!(kind, ".sol");
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].parameter, "SOL_Z");
            assert_eq!(failures[0].line, 8);
            assert_eq!(failures[0].col_start, 39);
            assert_eq!(failures[0].text.trim(), "abc");
        }
        other => panic!("expected parse failure, got {:?}", other),
    }
}

#[test]
fn test_scalar_soil_field() {
    let doc = soil_document(&["1500.00"], &["20.0000"]);
    let zmx = read_value(&doc, "SOL_ZMX", SoilParameter::SolZmx.descriptor()).unwrap();
    assert_eq!(zmx, vec![1500.0]);
}

#[test]
fn test_write_value_formats_fixed_decimals() {
    let mut doc = basin_document();

    write_value(&mut doc, BasinParameter::Sftmp.descriptor(), 0, -2.25).unwrap();

    assert_eq!(
        doc.read_working_span(4, 0, 16).unwrap(),
        format!("{:>16}", "-2.2500")
    );
    // Everything after the slot is untouched
    assert_eq!(
        doc.read_working_span(4, 16, 100).unwrap(),
        "    | SFTMP : Snowfall temperature [deg C]"
    );
}

#[test]
fn test_write_value_only_touches_one_horizon() {
    let mut doc = soil_document(&["300.00", "1000.00", "1500.00"], &["20.0000", "25.0000", "30.0000"]);
    let before = doc.working_text();

    write_value(&mut doc, SoilParameter::Clay.descriptor(), 1, 40.0).unwrap();

    let after = doc.working_text();
    assert_eq!(before.len(), after.len());
    assert_eq!(doc.read_working_span(13, 39, 51).unwrap(), "     40.0000");
    assert_eq!(doc.read_working_span(13, 27, 39).unwrap(), "     20.0000");
    assert_eq!(doc.read_working_span(13, 51, 63).unwrap(), "     30.0000");
}

#[test]
fn test_write_value_beyond_occurrences() {
    let mut doc = soil_document(&["300.00", "1500.00"], &["20.0000", "30.0000"]);

    let result = write_value(&mut doc, SoilParameter::Clay.descriptor(), 2, 1.0);
    assert!(matches!(result, Err(Error::OutOfRange { .. })));

    let scalar = write_value(&mut doc, SoilParameter::SolZmx.descriptor(), 1, 1.0);
    assert!(matches!(scalar, Err(Error::OutOfRange { .. })));
}

#[test]
fn test_write_value_overflow() {
    let mut doc = soil_document(&["1500.00"], &["20.0000"]);

    // SOL_ZMX is eight columns wide with two decimals
    let result = write_value(&mut doc, SoilParameter::SolZmx.descriptor(), 0, 123456.0);
    assert!(matches!(result, Err(Error::FormatOverflow { .. })));
}

#[test]
fn test_format_fixed() {
    assert_eq!(format_fixed(1.0, 4), "1.0000");
    assert_eq!(format_fixed(2.0, 0), "2");
    assert_eq!(format_fixed(-3.14159, 3), "-3.142");
}
