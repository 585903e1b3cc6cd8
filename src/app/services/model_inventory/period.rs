//! Simulated period from `file.cio`

use crate::app::models::ReportingPeriod;
use crate::app::services::field_registry::ControlParameter;
use crate::app::services::file_manipulator::ControlFile;
use crate::constants::MONTHLY_ROWS_PER_YEAR;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Years simulated by SWAT and the part of them that is read out
///
/// SWAT simulates `NBYR` years starting on January 1st of `IYR`. The first
/// `NYSKIP` years are warm-up and are not compared against observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationPeriod {
    pub first_year: i32,
    /// Last simulated year, inclusive
    pub last_year: i32,
    pub warm_up_years: i32,
    pub reporting: ReportingPeriod,
    /// First day after the warm-up
    pub readout_start: NaiveDate,
    /// Last simulated day
    pub readout_end: NaiveDate,
    /// Days from the simulation start to `readout_start`
    pub days_skip: usize,
    /// Years from `readout_start` to `readout_end`, inclusive
    pub readout_years: i32,
    /// Days from `readout_start` to `readout_end`, inclusive
    pub readout_days: usize,
}

impl SimulationPeriod {
    /// Derive the period from `NBYR`, `IYR`, `IPRINT` and `NYSKIP`
    pub fn from_control(control: &ControlFile) -> Result<Self> {
        let nbyr = control_integer(control, ControlParameter::Nbyr)?;
        let iyr = control_integer(control, ControlParameter::Iyr)?;
        let iprint = control_integer(control, ControlParameter::Iprint)?;
        let nyskip = control_integer(control, ControlParameter::Nyskip)?;

        Self::new(iyr, nbyr, nyskip, ReportingPeriod::from_print_code(iprint)?)
    }

    pub fn new(first_year: i64, years: i64, warm_up_years: i64, reporting: ReportingPeriod) -> Result<Self> {
        if years < 1 {
            return Err(Error::data_validation(format!(
                "NBYR must be at least 1, found {}",
                years
            )));
        }
        if warm_up_years < 0 || warm_up_years >= years {
            return Err(Error::data_validation(format!(
                "NYSKIP {} leaves no simulated year to read out of {}",
                warm_up_years, years
            )));
        }

        let first_year = to_year(first_year)?;
        let last_year = first_year + to_year(years)? - 1;
        let warm_up_years = to_year(warm_up_years)?;

        let start = january_first(first_year)?;
        let readout_start = january_first(first_year + warm_up_years)?;
        let readout_end = NaiveDate::from_ymd_opt(last_year, 12, 31)
            .ok_or_else(|| Error::data_validation(format!("year {} is out of range", last_year)))?;

        let days_skip = (readout_start - start).num_days() as usize;
        let readout_days = (readout_end - readout_start).num_days() as usize + 1;

        Ok(Self {
            first_year,
            last_year,
            warm_up_years,
            reporting,
            readout_start,
            readout_end,
            days_skip,
            readout_years: last_year - (first_year + warm_up_years) + 1,
            readout_days,
        })
    }

    /// Warm-up length in samples of `period` output
    ///
    /// Monthly series are counted after re-binning, which keeps
    /// `MONTHLY_ROWS_PER_YEAR - 1` samples per year.
    pub fn warm_up_samples(&self, period: ReportingPeriod) -> usize {
        let years = self.warm_up_years as usize;
        match period {
            ReportingPeriod::Daily => self.days_skip,
            ReportingPeriod::Monthly => years * (MONTHLY_ROWS_PER_YEAR - 1),
            ReportingPeriod::Yearly => years,
        }
    }
}

fn control_integer(control: &ControlFile, parameter: ControlParameter) -> Result<i64> {
    let value = control
        .value(parameter)
        .and_then(|values| values.first().copied())
        .ok_or_else(|| {
            Error::data_validation(format!("{} carries no {}", control.file_name(), parameter))
        })?;

    if value.fract() != 0.0 {
        return Err(Error::data_validation(format!(
            "{} in {} must be a whole number, found {}",
            parameter,
            control.file_name(),
            value
        )));
    }
    Ok(value as i64)
}

fn to_year(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::data_validation(format!("year {} is out of range", value)))
}

fn january_first(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| Error::data_validation(format!("year {} is out of range", year)))
}
