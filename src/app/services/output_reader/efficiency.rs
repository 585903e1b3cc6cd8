//! Goodness of fit of simulated against observed series
//!
//! Observed series come from `;`-delimited text files with the measured
//! value in one designated column. The `-9999` no-data sentinel is masked
//! from the observed side only: a pair is dropped when its observation is
//! missing, whatever the simulated value.

use crate::app::services::record_buffer::TextEncoding;
use crate::constants::{NO_DATA_SENTINEL, OBSERVED_DELIMITER};
use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Observed values read from one column of a delimited file
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedSeries {
    pub values: Vec<f64>,
}

impl ObservedSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Read the 1-indexed `column` of every row of `path`
    pub fn from_path(path: &Path, column: usize, encoding: TextEncoding) -> Result<Self> {
        let file = path.display().to_string();
        if column == 0 {
            return Err(Error::configuration("observed column numbers start at 1"));
        }

        let bytes =
            std::fs::read(path).map_err(|e| Error::io(format!("Failed to read {}", file), e))?;
        let text = encoding.decode(&file, &bytes)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(OBSERVED_DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut values = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                Error::csv_parsing(&file, format!("Failed to read row {}", row + 1), Some(e))
            })?;
            let field = record.get(column - 1).ok_or_else(|| {
                Error::csv_parsing(
                    &file,
                    format!("row {} has {} columns, expected at least {}", row + 1, record.len(), column),
                    None,
                )
            })?;
            let value = field.trim().parse::<f64>().map_err(|_| {
                Error::csv_parsing(
                    &file,
                    format!("row {} column {}: '{}' is not a number", row + 1, column, field),
                    None,
                )
            })?;
            values.push(value);
        }

        debug!("Read {} observations from {}", values.len(), file);
        Ok(Self { values })
    }

    /// Observations that are not the no-data sentinel
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| !is_missing(**v)).count()
    }
}

/// Fit criteria of one simulated series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Efficiency {
    pub nash_sutcliffe: f64,
    pub index_of_agreement: f64,
    /// Pairs left after skipping and masking
    pub pairs: usize,
}

fn is_missing(value: f64) -> bool {
    value == NO_DATA_SENTINEL
}

/// Pairs with a valid observation, after checking lengths
fn masked_pairs(observed: &[f64], simulated: &[f64]) -> Result<Vec<(f64, f64)>> {
    if observed.len() != simulated.len() {
        return Err(Error::shape_mismatch(
            "observed and simulated series",
            observed.len(),
            simulated.len(),
        ));
    }

    let pairs: Vec<(f64, f64)> = observed
        .iter()
        .zip(simulated)
        .filter(|(o, _)| !is_missing(**o))
        .map(|(o, s)| (*o, *s))
        .collect();

    if pairs.is_empty() {
        return Err(Error::empty_series("no observation left after masking"));
    }
    Ok(pairs)
}

fn observed_mean(pairs: &[(f64, f64)]) -> f64 {
    pairs.iter().map(|(o, _)| o).sum::<f64>() / pairs.len() as f64
}

fn squared_error(pairs: &[(f64, f64)]) -> f64 {
    pairs.iter().map(|(o, s)| (o - s).powi(2)).sum()
}

/// `1 - Σ(obs - sim)² / Σ(obs - mean(obs))²`
pub fn nash_sutcliffe(observed: &[f64], simulated: &[f64]) -> Result<f64> {
    let pairs = masked_pairs(observed, simulated)?;
    let mean = observed_mean(&pairs);
    let variance: f64 = pairs.iter().map(|(o, _)| (o - mean).powi(2)).sum();
    if variance == 0.0 {
        return Err(Error::data_validation(format!(
            "Nash-Sutcliffe efficiency is undefined for constant observations ({})",
            mean
        )));
    }
    Ok(1.0 - squared_error(&pairs) / variance)
}

/// `1 - Σ(obs - sim)² / Σ(|sim - mean(obs)| + |obs - mean(obs)|)²`
pub fn index_of_agreement(observed: &[f64], simulated: &[f64]) -> Result<f64> {
    let pairs = masked_pairs(observed, simulated)?;
    let mean = observed_mean(&pairs);
    let potential: f64 = pairs
        .iter()
        .map(|(o, s)| ((s - mean).abs() + (o - mean).abs()).powi(2))
        .sum();
    if potential == 0.0 {
        return Err(Error::data_validation(format!(
            "index of agreement is undefined when both series equal the observed mean ({})",
            mean
        )));
    }
    Ok(1.0 - squared_error(&pairs) / potential)
}

/// Both criteria after dropping the first `skip` samples of each series
pub fn evaluate(observed: &[f64], simulated: &[f64], skip: usize) -> Result<Efficiency> {
    let observed = observed.get(skip..).unwrap_or(&[]);
    let simulated = simulated.get(skip..).unwrap_or(&[]);
    let pairs = masked_pairs(observed, simulated)?.len();

    Ok(Efficiency {
        nash_sutcliffe: nash_sutcliffe(observed, simulated)?,
        index_of_agreement: index_of_agreement(observed, simulated)?,
        pairs,
    })
}
