//! Tests for the generic manipulator lifecycle

use super::{ModelDir, SoilProfile, hru_header, scalar_file};
use crate::Error;
use crate::app::models::ChangeMode;
use crate::app::services::field_registry::{
    BasinParameter, ControlParameter, GroundwaterParameter, HruParameter, ManagementParameter,
    RoutingParameter, SoilParameter, SubbasinParameter,
};
use crate::app::services::file_manipulator::hru::subbasin_file_name;
use crate::app::services::file_manipulator::{
    BasinFile, FileBehaviour, FileManipulator, GroundwaterFile, ManipulatorState,
};

const GW: &str = "000120001.gw";

fn write_gw(model: &ModelDir) -> String {
    let text = scalar_file(
        &hru_header("gw", 12, "AGRL"),
        &[
            (GroundwaterParameter::GwDelay, "31.00000"),
            (GroundwaterParameter::AlphaBf, "0.04800"),
            (GroundwaterParameter::Gwqmn, "1000.00000"),
        ],
    );
    model.write(GW, &text);
    text
}

#[test]
fn test_open_loads_values_and_header() {
    let model = ModelDir::new();
    write_gw(&model);

    let gw = GroundwaterFile::open(
        GW,
        &[GroundwaterParameter::GwDelay, GroundwaterParameter::AlphaBf],
        &model.options(),
    )
    .unwrap();

    assert_eq!(gw.value(GroundwaterParameter::GwDelay), Some(&[31.0][..]));
    assert_eq!(gw.value(GroundwaterParameter::AlphaBf), Some(&[0.048][..]));
    assert_eq!(gw.value(GroundwaterParameter::Gwqmn), None);
    assert_eq!(gw.subbasin(), Some(12));
    assert_eq!(gw.landuse(), Some("AGRL"));
    assert_eq!(gw.state(), ManipulatorState::Loaded);
}

#[test]
fn test_commit_without_changes_is_byte_identical() {
    let model = ModelDir::new();
    let text = write_gw(&model).replace('\n', "\r\n");
    model.write(GW, &text);

    let mut gw = GroundwaterFile::open(GW, &[GroundwaterParameter::GwDelay], &model.options()).unwrap();
    gw.commit().unwrap();

    assert_eq!(model.read(GW), text);
}

/// The text with LF, CRLF and without its final line ending
fn line_ending_variants(text: &str) -> Vec<String> {
    vec![
        text.to_string(),
        text.replace('\n', "\r\n"),
        text.trim_end_matches('\n').to_string(),
    ]
}

/// Commit `name` twice without edits in each line ending variant of `text`
fn assert_untouched_round_trip<P: FileBehaviour>(model: &ModelDir, name: &str, text: &str) {
    let path = model.path().join(name);
    for variant in line_ending_variants(text) {
        model.write(name, &variant);

        let mut file = FileManipulator::<P>::open(name, &[], &model.options()).unwrap();
        file.commit().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), variant.as_bytes(), "{} after one commit", name);

        file.commit().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), variant.as_bytes(), "{} after two commits", name);
    }
}

#[test]
fn test_commit_without_changes_round_trips_every_kind() {
    let model = ModelDir::new();
    model.write(
        &subbasin_file_name(1),
        &scalar_file(" .sub file Subbasin: 1", &[(SubbasinParameter::SubKm, "12.500000")]),
    );

    assert_untouched_round_trip::<ControlParameter>(
        &model,
        "file.cio",
        &scalar_file::<ControlParameter>(" Master Watershed File: file.cio", &[]),
    );
    assert_untouched_round_trip::<BasinParameter>(
        &model,
        "basins.bsn",
        &scalar_file::<BasinParameter>(" Basin data", &[]),
    );
    assert_untouched_round_trip::<SubbasinParameter>(
        &model,
        "000020000.sub",
        &scalar_file::<SubbasinParameter>(" .sub file Subbasin: 2", &[]),
    );
    assert_untouched_round_trip::<RoutingParameter>(
        &model,
        "000010001.rte",
        &scalar_file::<RoutingParameter>(" .rte file Subbasin: 1", &[]),
    );
    assert_untouched_round_trip::<GroundwaterParameter>(
        &model,
        "000010001.gw",
        &scalar_file::<GroundwaterParameter>(&hru_header("gw", 1, "AGRL"), &[]),
    );
    assert_untouched_round_trip::<ManagementParameter>(
        &model,
        "000010001.mgt",
        &scalar_file::<ManagementParameter>(&hru_header("mgt", 1, "AGRL"), &[]),
    );
    assert_untouched_round_trip::<HruParameter>(
        &model,
        "000010001.hru",
        &scalar_file(&hru_header("hru", 1, "AGRL"), &[(HruParameter::HruFr, "0.4000000")]),
    );
    assert_untouched_round_trip::<SoilParameter>(
        &model,
        "000010001.sol",
        &SoilProfile::loam().text(),
    );
}

#[test]
fn test_change_touches_only_its_span() {
    let model = ModelDir::new();
    let before = write_gw(&model);

    let mut gw = GroundwaterFile::open(GW, &[GroundwaterParameter::GwDelay], &model.options()).unwrap();
    gw.set_change(GroundwaterParameter::GwDelay, 0.5, ChangeMode::Multiplicative)
        .unwrap();
    gw.commit().unwrap();

    let after = model.read(GW);
    let before_lines: Vec<&str> = before.lines().collect();
    let after_lines: Vec<&str> = after.lines().collect();
    assert_eq!(before_lines.len(), after_lines.len());

    for (number, (old, new)) in before_lines.iter().zip(&after_lines).enumerate() {
        if number + 1 == 4 {
            assert_eq!(&new[..16], "        46.50000");
            assert_eq!(&old[16..], &new[16..]);
        } else {
            assert_eq!(old, new, "line {} changed", number + 1);
        }
    }
    assert_eq!(gw.value(GroundwaterParameter::GwDelay), Some(&[46.5][..]));
}

#[test]
fn test_double_commit_is_idempotent() {
    let model = ModelDir::new();
    write_gw(&model);

    let mut gw = GroundwaterFile::open(GW, &[GroundwaterParameter::AlphaBf], &model.options()).unwrap();
    gw.set_change(GroundwaterParameter::AlphaBf, 0.1, ChangeMode::Substitute)
        .unwrap();
    gw.commit().unwrap();
    let first = model.read(GW);

    gw.commit().unwrap();

    assert_eq!(model.read(GW), first);
    assert_eq!(gw.state(), ManipulatorState::Committed);
}

#[test]
fn test_changes_start_from_committed_values() {
    let model = ModelDir::new();
    write_gw(&model);

    let mut gw = GroundwaterFile::open(GW, &[GroundwaterParameter::GwDelay], &model.options()).unwrap();
    gw.set_change(GroundwaterParameter::GwDelay, 10.0, ChangeMode::Additive)
        .unwrap();
    gw.set_change(GroundwaterParameter::GwDelay, 20.0, ChangeMode::Additive)
        .unwrap();
    gw.commit().unwrap();
    assert_eq!(gw.value(GroundwaterParameter::GwDelay), Some(&[51.0][..]));

    gw.set_change(GroundwaterParameter::GwDelay, 1.0, ChangeMode::Additive)
        .unwrap();
    gw.commit().unwrap();
    assert_eq!(gw.value(GroundwaterParameter::GwDelay), Some(&[52.0][..]));
}

#[test]
fn test_restore_writes_load_time_text() {
    let model = ModelDir::new();
    let original = write_gw(&model);

    let mut gw = GroundwaterFile::open(GW, &[GroundwaterParameter::GwDelay], &model.options()).unwrap();
    gw.set_change(GroundwaterParameter::GwDelay, 5.0, ChangeMode::Substitute)
        .unwrap();
    gw.commit().unwrap();
    assert_ne!(model.read(GW), original);

    gw.restore().unwrap();

    assert_eq!(model.read(GW), original);
    assert_eq!(gw.value(GroundwaterParameter::GwDelay), Some(&[31.0][..]));
    assert_eq!(gw.state(), ManipulatorState::Loaded);
}

#[test]
fn test_unloaded_parameter_is_read_on_demand() {
    let model = ModelDir::new();
    write_gw(&model);

    let mut gw = GroundwaterFile::open(GW, &[], &model.options()).unwrap();
    gw.set_change(GroundwaterParameter::Gwqmn, 0.1, ChangeMode::Multiplicative)
        .unwrap();
    gw.commit().unwrap();

    assert_eq!(gw.value(GroundwaterParameter::Gwqmn), Some(&[1100.0][..]));
}

#[test]
fn test_overflow_leaves_working_text_unchanged() {
    let model = ModelDir::new();
    write_gw(&model);

    let mut gw = GroundwaterFile::open(GW, &[GroundwaterParameter::Gwqmn], &model.options()).unwrap();
    let result = gw.set_change(GroundwaterParameter::Gwqmn, 1.0e12, ChangeMode::Substitute);

    assert!(matches!(result, Err(Error::FormatOverflow { .. })));
    assert!(!gw.is_dirty());
    assert_eq!(gw.state(), ManipulatorState::Loaded);
}

#[test]
fn test_parse_failures_are_reported_together() {
    let model = ModelDir::new();
    let text = scalar_file(
        &hru_header("gw", 12, "AGRL"),
        &[
            (GroundwaterParameter::GwDelay, "n/a"),
            (GroundwaterParameter::AlphaBf, ""),
        ],
    );
    model.write(GW, &text);

    let result = GroundwaterFile::open(
        GW,
        &[
            GroundwaterParameter::GwDelay,
            GroundwaterParameter::AlphaBf,
            GroundwaterParameter::Gwqmn,
        ],
        &model.options(),
    );

    match result {
        Err(Error::FieldParse { kind, file, failures }) => {
            assert_eq!(kind, ".gw");
            assert_eq!(file, GW);
            let names: Vec<&str> = failures.iter().map(|f| f.parameter.as_str()).collect();
            assert_eq!(names, vec!["GW_DELAY", "ALPHA_BF"]);
        }
        other => panic!("expected field parse error, got {:?}", other),
    }
}

#[test]
fn test_header_without_tokens_is_rejected() {
    let model = ModelDir::new();
    model.write(GW, &scalar_file::<GroundwaterParameter>("Groundwater file", &[]));

    let result = GroundwaterFile::open(GW, &[], &model.options());
    assert!(matches!(result, Err(Error::HeaderParse { .. })));
}

#[test]
fn test_basin_file_has_no_header_metadata() {
    let model = ModelDir::new();
    model.write(
        "basins.bsn",
        &scalar_file(
            "Basin data           .bsn file",
            &[(BasinParameter::Sftmp, "1.0000")],
        ),
    );

    let bsn = BasinFile::open("basins.bsn", &[BasinParameter::Sftmp], &model.options()).unwrap();

    assert!(bsn.header().is_none());
    assert_eq!(bsn.value(BasinParameter::Sftmp), Some(&[1.0][..]));
}

#[test]
fn test_open_by_names() {
    let model = ModelDir::new();
    write_gw(&model);

    let gw = GroundwaterFile::open_by_names(GW, &["GW_DELAY", "GWQMN"], &model.options()).unwrap();
    assert_eq!(gw.values().len(), 2);

    let unknown = GroundwaterFile::open_by_names(GW, &["CN2"], &model.options());
    assert!(matches!(unknown, Err(Error::UnknownParameter { .. })));
}

#[test]
fn test_set_named_change() {
    let model = ModelDir::new();
    write_gw(&model);

    let mut gw = GroundwaterFile::open(GW, &[], &model.options()).unwrap();
    gw.set_named_change("ALPHA_BF", 0.5, ChangeMode::Substitute)
        .unwrap();
    assert_eq!(gw.state(), ManipulatorState::Changed);
    assert!(gw.set_named_change("SFTMP", 1.0, ChangeMode::Additive).is_err());
}

#[test]
fn test_missing_file() {
    let model = ModelDir::new();
    let result = GroundwaterFile::open("absent.gw", &[], &model.options());
    assert!(matches!(result, Err(Error::Io { .. })));
}
