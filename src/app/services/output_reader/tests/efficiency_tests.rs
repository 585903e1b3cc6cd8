use super::temp_dir;
use crate::Error;
use crate::app::services::output_reader::{ObservedSeries, evaluate, index_of_agreement, nash_sutcliffe};
use crate::app::services::record_buffer::TextEncoding;

#[test]
fn test_perfect_fit() {
    let observed = [1.0, 2.0, 3.0, 4.0];

    assert_eq!(nash_sutcliffe(&observed, &observed).unwrap(), 1.0);
    assert_eq!(index_of_agreement(&observed, &observed).unwrap(), 1.0);
}

#[test]
fn test_mean_prediction_scores_zero() {
    let observed = [1.0, 2.0, 3.0, 4.0];
    let simulated = [2.5; 4];

    assert!(nash_sutcliffe(&observed, &simulated).unwrap().abs() < 1e-12);
}

#[test]
fn test_index_of_agreement_value() {
    let observed = [1.0, 3.0];
    let simulated = [2.0, 2.0];

    // mean 2, errors 1 + 1, potential (0 + 1)^2 + (0 + 1)^2
    assert_eq!(index_of_agreement(&observed, &simulated).unwrap(), 0.0);
}

#[test]
fn test_constant_observations_are_rejected() {
    let observed = [2.0, 2.0, 2.0];

    assert!(matches!(
        nash_sutcliffe(&observed, &[1.0, 2.0, 3.0]),
        Err(Error::DataValidation { .. })
    ));
    assert!(matches!(
        nash_sutcliffe(&observed, &observed),
        Err(Error::DataValidation { .. })
    ));
    assert!(matches!(
        index_of_agreement(&observed, &observed),
        Err(Error::DataValidation { .. })
    ));
    assert!(matches!(
        evaluate(&[5.0, 2.0, 2.0], &[5.0, 2.0, 2.0], 1),
        Err(Error::DataValidation { .. })
    ));

    // the agreement index stays defined while the simulation varies
    let agreement = index_of_agreement(&observed, &[1.0, 2.0, 3.0]).unwrap();
    assert!(agreement.is_finite());
}

#[test]
fn test_length_mismatch() {
    let result = nash_sutcliffe(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
    match result {
        Err(Error::ShapeMismatch { expected, found, .. }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected a shape mismatch, got {:?}", other),
    }
}

#[test]
fn test_missing_observations_are_masked() {
    let observed = [1.0, -9999.0, 3.0, 4.0, 2.0];
    let simulated = [1.0, 50.0, 3.0, 4.0, 2.0];

    let efficiency = evaluate(&observed, &simulated, 0).unwrap();
    assert_eq!(efficiency.nash_sutcliffe, 1.0);
    assert_eq!(efficiency.pairs, 4);
}

#[test]
fn test_simulated_sentinel_is_not_masked() {
    let observed = [1.0, 2.0, 3.0];
    let simulated = [1.0, -9999.0, 3.0];

    let efficiency = evaluate(&observed, &simulated, 0).unwrap();
    assert_eq!(efficiency.pairs, 3);
    assert!(efficiency.nash_sutcliffe < 0.0);
}

#[test]
fn test_evaluate_skips_before_comparing_lengths() {
    let observed = [9.0, 9.0, 1.0, 2.0];
    let simulated = [0.0, 0.0, 1.0, 2.0];

    let efficiency = evaluate(&observed, &simulated, 2).unwrap();
    assert_eq!(efficiency.nash_sutcliffe, 1.0);
    assert_eq!(efficiency.pairs, 2);
}

#[test]
fn test_all_observations_missing() {
    let result = evaluate(&[-9999.0, -9999.0], &[1.0, 2.0], 0);
    assert!(matches!(result, Err(Error::EmptySeries { .. })));
}

#[test]
fn test_observed_series_from_file() {
    let dir = temp_dir();
    let path = dir.path().join("observed.txt");
    std::fs::write(&path, "2001-01-01;1.5;x\n2001-01-02;-9999;x\n2001-01-03; 2.5 ;x\n").unwrap();

    let observed = ObservedSeries::from_path(&path, 2, TextEncoding::Latin1).unwrap();

    assert_eq!(observed.values, vec![1.5, -9999.0, 2.5]);
    assert_eq!(observed.valid_count(), 2);
}

#[test]
fn test_observed_series_rejects_bad_column() {
    let dir = temp_dir();
    let path = dir.path().join("observed.txt");
    std::fs::write(&path, "2001-01-01;1.5\n").unwrap();

    assert!(matches!(
        ObservedSeries::from_path(&path, 0, TextEncoding::Latin1),
        Err(Error::Configuration { .. })
    ));
    assert!(matches!(
        ObservedSeries::from_path(&path, 3, TextEncoding::Latin1),
        Err(Error::CsvParsing { .. })
    ));
}
