//! Command-line argument definitions for SWAT processor
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Options shared by every command (working directory, config file,
//! encoding, verbosity and output format) are global and may be given
//! before or after the subcommand.

use crate::app::models::{ChangeMode, ReportingPeriod};
use crate::app::services::output_reader::OutputKind;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the SWAT processor
///
/// Edits the fixed-column input files of a SWAT2012 model in place and
/// reads its simulation output.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "swat-processor",
    version,
    about = "Edit SWAT2012 input files and evaluate SWAT output",
    long_about = "Reads and edits the fixed-column text input files of a SWAT2012 TxtInOut \
                  directory without disturbing a single untouched byte, derives soil and HRU \
                  properties, and reduces output.rch / output.sub / output.hru series to \
                  statistics and goodness-of-fit criteria."
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options accepted by every command
#[derive(Debug, Clone, clap::Args)]
pub struct GlobalArgs {
    /// SWAT TxtInOut directory
    ///
    /// Overrides the configuration file and SWAT_PROCESSOR_WORKING_DIR.
    #[arg(
        short = 'w',
        long = "working-dir",
        value_name = "PATH",
        global = true,
        help = "SWAT TxtInOut directory"
    )]
    pub working_dir: Option<PathBuf>,

    /// Configuration file path
    ///
    /// JSON file with default settings. Defaults to
    /// <config dir>/swat-processor/config.json when that file exists.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Configuration file path"
    )]
    pub config_file: Option<PathBuf>,

    /// Text encoding of the model files ("auto" detects it from file.cio)
    #[arg(
        short = 'e',
        long = "encoding",
        value_name = "LABEL",
        global = true,
        help = "Text encoding of the model files, or auto"
    )]
    pub encoding: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Available subcommands for the SWAT processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show the files of the model, or the parameters of one file
    Inspect(InspectArgs),
    /// Change a parameter in one file or in every file of a kind
    Edit(EditArgs),
    /// Show the simulated period from file.cio
    Period,
    /// Statistics of an output series
    Stats(StatsArgs),
    /// Nash-Sutcliffe efficiency and index of agreement against observations
    Efficiency(EfficiencyArgs),
    /// Report soil horizons whose field capacity reaches saturation
    CheckSoil(SoilArgs),
    /// Rescale silt and sand so that every horizon sums to 100 %
    CorrectTexture(CorrectTextureArgs),
    /// Convert a SWAT-CUP parameter file to parameter names
    Convert(ConvertArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input file to show, e.g. 000010001.sol; the whole model when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Parameters to show (comma-separated); the usual set of the kind when omitted
    #[arg(short = 'p', long = "parameters", value_name = "LIST")]
    pub parameters: Option<NameList>,
}

/// Arguments for the edit command
///
/// Either `--file` and `--parameter` address one file, or `--change`
/// addresses every file of a kind with a calibration name such as
/// `r__SOL_AWC__sol`.
#[derive(Debug, Clone, Parser)]
pub struct EditArgs {
    /// Calibration name <how>__<PARAM>__<ext> applied to every file of the kind
    #[arg(
        long = "change",
        value_name = "NAME",
        conflicts_with_all = ["file", "parameter", "mode", "layer"]
    )]
    pub change: Option<String>,

    /// Single file to edit
    #[arg(short = 'f', long = "file", value_name = "FILE", requires = "parameter")]
    pub file: Option<String>,

    /// Parameter of the single file
    #[arg(short = 'p', long = "parameter", value_name = "NAME", requires = "file")]
    pub parameter: Option<String>,

    /// How the amount is combined with the current value (s, +, *)
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        default_value = "s",
        value_parser = parse_change_mode
    )]
    pub mode: ChangeMode,

    /// Change amount
    #[arg(short = 'a', long = "amount", value_name = "VALUE", allow_negative_numbers = true)]
    pub amount: f64,

    /// 1-indexed soil horizon to change instead of all of them
    #[arg(short = 'l', long = "layer", value_name = "N")]
    pub layer: Option<usize>,

    /// Show the new values without writing any file
    #[arg(long = "dry-run", help = "Show the new values without writing any file")]
    pub dry_run: bool,

    /// Include soils of urban HRUs in model-wide changes
    #[arg(long = "include-urban", help = "Include urban soils in model-wide changes")]
    pub include_urban: bool,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Output file kind (rch, sub, hru)
    #[arg(short = 'k', long = "kind", value_name = "KIND", value_parser = parse_output_kind)]
    pub kind: OutputKind,

    /// Output column, e.g. FLOW_OUT or WYLD
    #[arg(short = 'o', long = "output", value_name = "NAME")]
    pub output: String,

    /// Areas to read (comma-separated ids)
    #[arg(long = "areas", value_name = "LIST")]
    pub areas: AreaList,

    /// Sum the areas into one flow series in m3/s
    #[arg(long = "sum", help = "Sum the areas into one flow series in m3/s")]
    pub sum: bool,

    /// Samples to skip before computing statistics; from file.cio when omitted
    #[arg(long = "days-skip", value_name = "N")]
    pub days_skip: Option<usize>,

    /// Reporting period of the output file; from file.cio when omitted
    #[arg(long = "period", value_name = "PERIOD", value_parser = parse_reporting_period)]
    pub period: Option<ReportingPeriod>,
}

/// Arguments for the efficiency command
#[derive(Debug, Clone, Parser)]
pub struct EfficiencyArgs {
    /// Output file kind (rch, sub, hru)
    #[arg(short = 'k', long = "kind", value_name = "KIND", value_parser = parse_output_kind)]
    pub kind: OutputKind,

    /// Output column, e.g. FLOW_OUT
    #[arg(short = 'o', long = "output", value_name = "NAME")]
    pub output: String,

    /// Area whose series is compared
    #[arg(long = "area", value_name = "ID")]
    pub area: u32,

    /// `;`-delimited file of observations
    #[arg(long = "observed", value_name = "FILE")]
    pub observed: PathBuf,

    /// 1-indexed column of the observed values
    #[arg(long = "column", value_name = "N", default_value_t = 2)]
    pub column: usize,

    /// Samples to skip on both series; from file.cio when omitted
    #[arg(long = "days-skip", value_name = "N")]
    pub days_skip: Option<usize>,

    /// Reporting period of the output file; from file.cio when omitted
    #[arg(long = "period", value_name = "PERIOD", value_parser = parse_reporting_period)]
    pub period: Option<ReportingPeriod>,
}

/// Arguments for soil checks
#[derive(Debug, Clone, Parser)]
pub struct SoilArgs {
    /// Soil files to check; every *.sol file when omitted
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

/// Arguments for the correct-texture command
#[derive(Debug, Clone, Parser)]
pub struct CorrectTextureArgs {
    #[command(flatten)]
    pub soils: SoilArgs,

    /// Show the corrections without writing any file
    #[arg(long = "dry-run", help = "Show the corrections without writing any file")]
    pub dry_run: bool,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// SWAT-CUP parameter file (e.g. par_inf.txt)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// File to write the names to; printed when omitted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated parameter names
#[derive(Debug, Clone, PartialEq)]
pub struct NameList {
    pub names: Vec<String>,
}

impl FromStr for NameList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let names: Vec<String> = s
            .split(',')
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .collect();

        if names.is_empty() {
            return Err(Error::configuration("Parameter list cannot be empty"));
        }
        Ok(Self { names })
    }
}

/// Wrapper for parsing comma-separated area ids
#[derive(Debug, Clone, PartialEq)]
pub struct AreaList {
    pub areas: Vec<u32>,
}

impl FromStr for AreaList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut areas = Vec::new();
        for part in s.split(',').map(|p| p.trim()).filter(|p| !p.is_empty()) {
            let area = part
                .parse::<u32>()
                .map_err(|_| Error::configuration(format!("Invalid area id '{}'", part)))?;
            if !areas.contains(&area) {
                areas.push(area);
            }
        }

        if areas.is_empty() {
            return Err(Error::configuration("Area list cannot be empty"));
        }
        Ok(Self { areas })
    }
}

fn parse_change_mode(s: &str) -> std::result::Result<ChangeMode, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn parse_output_kind(s: &str) -> std::result::Result<OutputKind, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn parse_reporting_period(s: &str) -> std::result::Result<ReportingPeriod, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

impl GlobalArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Validate the global arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }
}

impl EditArgs {
    /// Validate the edit command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.change.is_none() && self.file.is_none() {
            return Err(Error::configuration(
                "Either --change or --file with --parameter is required",
            ));
        }
        if self.layer == Some(0) {
            return Err(Error::configuration("Soil layers are numbered from 1"));
        }
        if !self.amount.is_finite() {
            return Err(Error::configuration("Change amount must be a finite number"));
        }
        Ok(())
    }
}

impl EfficiencyArgs {
    /// Validate the efficiency command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.column == 0 {
            return Err(Error::configuration("Observed columns are numbered from 1"));
        }
        if !self.observed.exists() {
            return Err(Error::configuration(format!(
                "Observed file does not exist: {}",
                self.observed.display()
            )));
        }
        Ok(())
    }
}
