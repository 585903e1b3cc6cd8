//! Tests for texture correction and porosity checks

use super::{ModelDir, SoilProfile};
use crate::Error;
use crate::app::services::field_registry::SoilParameter;
use crate::app::services::file_manipulator::{
    SoilFile, apply_texture_correction, check_porosity, plan_texture_correction,
};

const SOL: &str = "000010001.sol";

#[test]
fn test_plan_keeps_clay_and_rescales_silt_and_sand() {
    let plan = plan_texture_correction(&[20.0, 30.0], &[30.0, 30.0], &[30.0, 40.0]).unwrap();

    assert_eq!(plan.len(), 2);
    assert!((plan[0].factor - 80.0 / 60.0).abs() < 1e-12);
    assert!((plan[0].corrected_silt() - 40.0).abs() < 1e-9);
    assert!((plan[0].corrected_sand() - 40.0).abs() < 1e-9);
    assert_eq!(plan[1].factor, 1.0);

    for correction in &plan {
        let total = correction.clay + correction.corrected_silt() + correction.corrected_sand();
        assert!((total - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_plan_rejects_bad_input() {
    assert!(matches!(
        plan_texture_correction(&[20.0, 30.0], &[30.0], &[30.0, 40.0]),
        Err(Error::ShapeMismatch { .. })
    ));
    assert!(matches!(
        plan_texture_correction(&[100.0], &[0.0], &[0.0]),
        Err(Error::DataValidation { .. })
    ));
}

#[test]
fn test_apply_texture_correction_writes_file() {
    let model = ModelDir::new();
    model.write(SOL, &SoilProfile::loam().text());
    let mut soil = SoilFile::open(SOL, &[], &model.options()).unwrap();

    let corrections = apply_texture_correction(&mut soil).unwrap();
    assert_eq!(corrections.len(), 2);

    let reopened = SoilFile::open(
        SOL,
        &[SoilParameter::Silt, SoilParameter::Sand],
        &model.options(),
    )
    .unwrap();
    let clay = reopened.value(SoilParameter::Clay).unwrap();
    let silt = reopened.value(SoilParameter::Silt).unwrap();
    let sand = reopened.value(SoilParameter::Sand).unwrap();

    assert_eq!(clay, &[20.0, 30.0]);
    for i in 0..2 {
        assert!((clay[i] + silt[i] + sand[i] - 100.0).abs() < 1e-3);
    }
}

#[test]
fn test_failed_texture_correction_leaves_profile_untouched() {
    let model = ModelDir::new();
    // clay of horizon 2 pushes its corrected silt past the slot width
    let text = SoilProfile::loam()
        .with(SoilParameter::Clay, &[20.0, 7777.0])
        .text()
        .replace("   7777.0000", "-99999999.00");
    model.write(SOL, &text);
    let mut soil = SoilFile::open(SOL, &[], &model.options()).unwrap();

    let result = apply_texture_correction(&mut soil);

    assert!(matches!(result, Err(Error::FormatOverflow { .. })));
    assert!(!soil.is_dirty());
    assert_eq!(soil.value(SoilParameter::Silt), Some(&[30.0, 30.0][..]));
    assert_eq!(model.read(SOL), text);

    soil.commit().unwrap();
    assert_eq!(model.read(SOL), text);
}

#[test]
fn test_check_porosity_reports_without_correcting() {
    let model = ModelDir::new();
    let profile = SoilProfile::loam()
        .with(SoilParameter::SolBd, &[1.4, 2.0])
        .with(SoilParameter::SolAwc, &[0.15, 0.2])
        .with(SoilParameter::Clay, &[20.0, 30.0]);
    let text = profile.text();
    model.write(SOL, &text);
    let soil = SoilFile::open(SOL, &[], &model.options()).unwrap();

    let violations = check_porosity(&soil);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].horizon, 2);
    assert!(violations[0].properties.field_capacity >= violations[0].properties.saturation);
    assert_eq!(model.read(SOL), text);
}

#[test]
fn test_check_porosity_consistent_profile() {
    let model = ModelDir::new();
    model.write(SOL, &SoilProfile::loam().text());
    let soil = SoilFile::open(SOL, &[], &model.options()).unwrap();

    assert!(check_porosity(&soil).is_empty());
}
