//! Tests for change arithmetic

use super::super::{apply_change, changed_value, spread_depth};
use crate::app::models::ChangeMode;

#[test]
fn test_substitute() {
    assert_eq!(apply_change(0.95, 0.5, ChangeMode::Substitute), 0.5);
}

#[test]
fn test_additive() {
    assert!((apply_change(0.95, -0.1, ChangeMode::Additive) - 0.85).abs() < 1e-12);
}

#[test]
fn test_multiplicative_is_fractional_delta() {
    assert!((apply_change(10.0, 0.1, ChangeMode::Multiplicative) - 11.0).abs() < 1e-12);
    assert!((apply_change(10.0, -0.5, ChangeMode::Multiplicative) - 5.0).abs() < 1e-12);
    assert_eq!(apply_change(10.0, 0.0, ChangeMode::Multiplicative), 10.0);
}

#[test]
fn test_depth_spreading() {
    assert_eq!(spread_depth(100.0, 0, 2), 50.0);
    assert_eq!(spread_depth(100.0, 1, 2), 100.0);

    let depths = [300.0, 600.0, 900.0];
    let spread: Vec<f64> = (0..3)
        .map(|i| changed_value(&depths, i, 1200.0, ChangeMode::Substitute, true).unwrap())
        .collect();
    assert_eq!(spread, vec![400.0, 800.0, 1200.0]);
}

#[test]
fn test_depth_spreading_only_for_substitution() {
    let depths = [300.0, 600.0];
    assert_eq!(
        changed_value(&depths, 1, 100.0, ChangeMode::Additive, true).unwrap(),
        700.0
    );
    assert_eq!(
        changed_value(&depths, 1, 100.0, ChangeMode::Substitute, false).unwrap(),
        100.0
    );
}

#[test]
fn test_changed_value_out_of_range() {
    assert!(changed_value(&[1.0], 3, 1.0, ChangeMode::Additive, false).is_err());
}
