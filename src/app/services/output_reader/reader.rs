//! Extraction of per-area series from SWAT output files

use super::efficiency::{Efficiency, ObservedSeries, evaluate};
use super::layout::{ColumnSpan, OutputKind};
use super::statistics::SeriesStatistics;
use crate::app::models::ReportingPeriod;
use crate::app::services::record_buffer::{Document, Line, TextEncoding};
use crate::constants::{MM_KM2_PER_DAY_TO_M3_PER_S, MONTHLY_ROWS_PER_YEAR, OUTPUT_FIRST_DATA_ROW};
use crate::{Error, FieldParseFailure, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Where the reader finds output files and how they are laid out in time
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// SWAT `TxtInOut` directory
    pub working_dir: PathBuf,
    pub encoding: TextEncoding,
    pub period: ReportingPeriod,
}

impl OutputOptions {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            encoding: TextEncoding::default(),
            period: ReportingPeriod::default(),
        }
    }

    pub fn with_period(mut self, period: ReportingPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Summed flow series with its statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReducedSeries {
    pub output: String,
    /// Flow in m3/s per time step, warm-up samples included
    pub series: Vec<f64>,
    /// Statistics over the series without the warm-up samples
    pub statistics: SeriesStatistics,
}

/// Series of selected outputs and areas read from one output file
#[derive(Debug, Clone)]
pub struct OutputReader {
    kind: OutputKind,
    period: ReportingPeriod,
    areas: Vec<u32>,
    area_sizes: BTreeMap<u32, f64>,
    series: BTreeMap<String, BTreeMap<u32, Vec<f64>>>,
    consistency_warnings: Vec<String>,
}

impl OutputReader {
    /// Read `outputs` of the declared `areas` from the kind's output file
    ///
    /// # Errors
    /// * `Error::UnknownParameter` for an output the kind has no column for
    /// * `Error::Io` / `Error::Decode` if the file cannot be read
    /// * `Error::FieldParse` listing every value that is not a number
    /// * `Error::DataValidation` for an unreadable area id or a declared area
    ///   that never appears
    pub fn open(kind: OutputKind, outputs: &[&str], areas: &[u32], options: &OutputOptions) -> Result<Self> {
        let columns: Vec<(String, ColumnSpan)> = outputs
            .iter()
            .map(|name| Ok((name.trim().to_string(), kind.column(name)?)))
            .collect::<Result<_>>()?;

        let path = options.working_dir.join(kind.file_name());
        let document = Document::load(&path, options.encoding)?;

        let mut reader = Self {
            kind,
            period: options.period,
            areas: areas.to_vec(),
            area_sizes: BTreeMap::new(),
            series: columns
                .iter()
                .map(|(name, _)| {
                    let per_area = areas.iter().map(|area| (*area, Vec::new())).collect();
                    (name.clone(), per_area)
                })
                .collect(),
            consistency_warnings: Vec::new(),
        };

        reader.read_rows(&document, &columns)?;

        if let Some(missing) = areas.iter().find(|area| !reader.area_sizes.contains_key(*area)) {
            return Err(Error::data_validation(format!(
                "area {} does not appear in {}",
                missing,
                kind.file_name()
            )));
        }

        if reader.period == ReportingPeriod::Monthly {
            reader.drop_annual_rows();
        }

        info!(
            "Read {} outputs for {} areas from {}",
            reader.series.len(),
            reader.areas.len(),
            kind.file_name()
        );
        Ok(reader)
    }

    fn read_rows(&mut self, document: &Document, columns: &[(String, ColumnSpan)]) -> Result<()> {
        let declared: BTreeSet<u32> = self.areas.iter().copied().collect();
        let mut reported: BTreeSet<u32> = BTreeSet::new();
        let mut failures = Vec::new();

        for number in OUTPUT_FIRST_DATA_ROW..=document.line_count() {
            let line = document.line(number)?;
            if line.text.trim().is_empty() {
                continue;
            }

            let area = self.area_id(line, number)?;
            if !declared.contains(&area) {
                continue;
            }

            let size_span = self.kind.area_size_span();
            match parse_span(line, number, "AREAkm2", size_span) {
                Ok(size) => match self.area_sizes.get(&area).copied() {
                    None => {
                        self.area_sizes.insert(area, size);
                    }
                    Some(first) if first != size && reported.insert(area) => {
                        let message = format!(
                            "{} line {}: area {} has size {} but {} on its first row",
                            self.kind.file_name(),
                            number,
                            area,
                            size,
                            first
                        );
                        warn!("{}", message);
                        self.consistency_warnings.push(message);
                    }
                    Some(_) => {}
                },
                Err(failure) => failures.push(failure),
            }

            for (name, span) in columns {
                match parse_span(line, number, name, *span) {
                    Ok(value) => {
                        if let Some(values) = self.series.get_mut(name).and_then(|s| s.get_mut(&area)) {
                            values.push(value);
                        }
                    }
                    Err(failure) => failures.push(failure),
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::FieldParse {
                kind: self.kind.extension().to_string(),
                file: self.kind.file_name().to_string(),
                failures,
            })
        }
    }

    fn area_id(&self, line: &Line, number: usize) -> Result<u32> {
        let span = self.kind.area_span();
        let text = line.span(span.start, span.end);
        text.trim().parse::<u32>().map_err(|_| {
            Error::data_validation(format!(
                "{} line {}: '{}' in columns {}..{} is not an area id",
                self.kind.file_name(),
                number,
                text,
                span.start,
                span.end
            ))
        })
    }

    /// Drop the annual summary row closing every simulated year
    fn drop_annual_rows(&mut self) {
        for per_area in self.series.values_mut() {
            for values in per_area.values_mut() {
                let before = values.len();
                *values = values
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| (i + 1) % MONTHLY_ROWS_PER_YEAR != 0)
                    .map(|(_, v)| *v)
                    .collect();
                debug!("Monthly re-binning kept {} of {} samples", values.len(), before);
            }
        }
    }

    pub fn kind(&self) -> OutputKind {
        self.kind
    }

    pub fn period(&self) -> ReportingPeriod {
        self.period
    }

    pub fn areas(&self) -> &[u32] {
        &self.areas
    }

    /// Names of the outputs that were read
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(|name| name.as_str())
    }

    /// Area size in km2 from the first row of an area
    pub fn area_size(&self, area: u32) -> Option<f64> {
        self.area_sizes.get(&area).copied()
    }

    pub fn area_sizes(&self) -> &BTreeMap<u32, f64> {
        &self.area_sizes
    }

    /// Rows whose area size disagreed with the first row of their area
    pub fn consistency_warnings(&self) -> &[String] {
        &self.consistency_warnings
    }

    /// Samples of one output and area
    pub fn series(&self, output: &str, area: u32) -> Option<&[f64]> {
        self.series
            .get(output.trim())
            .and_then(|per_area| per_area.get(&area))
            .map(|values| values.as_slice())
    }

    fn output_series(&self, output: &str) -> Result<&BTreeMap<u32, Vec<f64>>> {
        self.series
            .get(output.trim())
            .ok_or_else(|| Error::unknown_parameter(self.kind, output))
    }

    fn area_series(&self, output: &str, area: u32) -> Result<&[f64]> {
        self.output_series(output)?
            .get(&area)
            .map(|values| values.as_slice())
            .ok_or_else(|| Error::data_validation(format!("area {} was not declared", area)))
    }

    /// Flow in m3/s summed over all declared areas
    ///
    /// Each area's mm/day values are scaled by `area * 1000 / 86400`.
    pub fn sum_series(&self, output: &str) -> Result<Vec<f64>> {
        let per_area = self.output_series(output)?;
        let length = per_area.values().map(|values| values.len()).next().unwrap_or(0);
        let mut summed = vec![0.0; length];

        for (area, values) in per_area {
            if values.len() != length {
                return Err(Error::shape_mismatch(
                    format!("{} series of area {}", output, area),
                    length,
                    values.len(),
                ));
            }
            let factor = self.area_size(*area).unwrap_or(0.0) * MM_KM2_PER_DAY_TO_M3_PER_S;
            for (total, value) in summed.iter_mut().zip(values) {
                *total += value * factor;
            }
        }

        Ok(summed)
    }

    /// Summed flow of an output with statistics after `days_skip` samples
    pub fn reduce_sum(&self, output: &str, days_skip: usize) -> Result<ReducedSeries> {
        let series = self.sum_series(output)?;
        let statistics =
            SeriesStatistics::compute(&series, days_skip, &format!("summed {}", output))?;

        Ok(ReducedSeries {
            output: output.trim().to_string(),
            series,
            statistics,
        })
    }

    /// Statistics of one area's unconverted series after `days_skip` samples
    pub fn area_statistics(&self, output: &str, area: u32, days_skip: usize) -> Result<SeriesStatistics> {
        let values = self.area_series(output, area)?;
        SeriesStatistics::compute(values, days_skip, &format!("{} of area {}", output, area))
    }

    /// Fit of one area's series against observations, both skipping `days_skip`
    pub fn efficiency(
        &self,
        output: &str,
        area: u32,
        observed: &ObservedSeries,
        days_skip: usize,
    ) -> Result<Efficiency> {
        let simulated = self.area_series(output, area)?;
        evaluate(&observed.values, simulated, days_skip)
    }
}

fn parse_span(line: &Line, number: usize, name: &str, span: ColumnSpan) -> std::result::Result<f64, FieldParseFailure> {
    let text = line.span(span.start, span.end);
    text.trim().parse::<f64>().map_err(|_| FieldParseFailure {
        parameter: name.to_string(),
        line: number,
        col_start: span.start,
        col_end: span.end,
        text,
    })
}
