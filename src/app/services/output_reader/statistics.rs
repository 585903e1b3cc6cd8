//! Summary statistics of output series

use crate::{Error, Result};
use serde::Serialize;

/// Mean, median and population variance of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStatistics {
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    /// Samples the statistics were computed over
    pub samples: usize,
}

impl SeriesStatistics {
    /// Statistics of `values` after dropping the first `skip` samples
    ///
    /// # Errors
    /// `Error::EmptySeries` if no sample remains
    pub fn compute(values: &[f64], skip: usize, context: &str) -> Result<Self> {
        let kept = values.get(skip..).unwrap_or(&[]);
        if kept.is_empty() {
            return Err(Error::empty_series(format!(
                "{}: {} samples, {} skipped",
                context,
                values.len(),
                skip
            )));
        }

        let n = kept.len() as f64;
        let mean = kept.iter().sum::<f64>() / n;
        let variance = kept.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            mean,
            median: median(kept),
            variance,
            samples: kept.len(),
        })
    }
}

/// Middle value, or the mean of the two middle values of an even count
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => f64::NAN,
        len if len % 2 == 0 => (sorted[mid - 1] + sorted[mid]) / 2.0,
        _ => sorted[mid],
    }
}
