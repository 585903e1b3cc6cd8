//! Data models for SWAT file processing
//!
//! This module contains the core enumerations shared by the registry, the
//! file manipulators and the output reader: the closed set of input file
//! kinds, edit modes, reporting periods and header metadata.

use crate::constants::header_tokens;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// File Kinds
// =============================================================================

/// Input file kinds of a SWAT2012 TxtInOut directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FileKind {
    /// Basin-wide parameters (`basins.bsn`)
    Basin,
    /// Groundwater parameters per HRU (`*.gw`)
    Groundwater,
    /// Management parameters per HRU (`*.mgt`)
    Management,
    /// Subbasin parameters (`*.sub`)
    Subbasin,
    /// Hydrologic response unit parameters (`*.hru`)
    Hru,
    /// Soil profile parameters per HRU (`*.sol`)
    Soil,
    /// Main channel routing parameters (`*.rte`)
    Routing,
    /// Control/index file (`file.cio`)
    Control,
}

/// How derived metadata is laid out on the first line of a file kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// No metadata is parsed from the header
    None,
    /// `Subbasin:<id>` and `Luse:<code>` tokens at fixed positions
    SubbasinAndLanduse,
}

impl FileKind {
    /// All file kinds in registry order
    pub const ALL: [FileKind; 8] = [
        FileKind::Basin,
        FileKind::Groundwater,
        FileKind::Management,
        FileKind::Subbasin,
        FileKind::Hru,
        FileKind::Soil,
        FileKind::Routing,
        FileKind::Control,
    ];

    /// File extension (without dot) of this kind
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Basin => "bsn",
            FileKind::Groundwater => "gw",
            FileKind::Management => "mgt",
            FileKind::Subbasin => "sub",
            FileKind::Hru => "hru",
            FileKind::Soil => "sol",
            FileKind::Routing => "rte",
            FileKind::Control => "cio",
        }
    }

    /// Detect the file kind from a file extension (case-insensitive)
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        FileKind::ALL
            .into_iter()
            .find(|kind| kind.extension() == extension)
    }

    /// Detect the file kind from a file name
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Header metadata layout of this kind
    pub fn header_layout(&self) -> HeaderLayout {
        match self {
            FileKind::Groundwater | FileKind::Management | FileKind::Hru | FileKind::Soil => {
                HeaderLayout::SubbasinAndLanduse
            }
            _ => HeaderLayout::None,
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

impl FromStr for FileKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s.trim()).ok_or_else(|| {
            Error::data_validation(format!(
                "Unknown file kind '{}': must be one of bsn, gw, mgt, sub, hru, sol, rte, cio",
                s
            ))
        })
    }
}

// =============================================================================
// Change Modes
// =============================================================================

/// How a change amount is combined with the current parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeMode {
    /// Replace the value with the change amount
    Substitute,
    /// Add the change amount to the value
    Additive,
    /// Add the value scaled by the change amount (a fractional delta)
    Multiplicative,
}

impl FromStr for ChangeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "s" | "v" | "substitute" => Ok(ChangeMode::Substitute),
            "+" | "a" | "additive" => Ok(ChangeMode::Additive),
            "*" | "r" | "multiplicative" => Ok(ChangeMode::Multiplicative),
            _ => Err(Error::data_validation(format!(
                "Invalid change mode '{}': must be s/v, +/a or */r",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            ChangeMode::Substitute => "s",
            ChangeMode::Additive => "+",
            ChangeMode::Multiplicative => "*",
        };
        write!(f, "{}", symbol)
    }
}

// =============================================================================
// Reporting Period
// =============================================================================

/// Time granularity of SWAT output files (IPRINT in file.cio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    /// Monthly rows with one annual summary row per year
    Monthly,
    /// One row per simulated day
    #[default]
    Daily,
    /// One row per simulated year
    Yearly,
}

impl ReportingPeriod {
    /// Map the IPRINT code of file.cio (0 month, 1 day, 2 year)
    pub fn from_print_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(ReportingPeriod::Monthly),
            1 => Ok(ReportingPeriod::Daily),
            2 => Ok(ReportingPeriod::Yearly),
            other => Err(Error::data_validation(format!(
                "Invalid IPRINT code {}: must be 0 (month), 1 (day) or 2 (year)",
                other
            ))),
        }
    }
}

impl FromStr for ReportingPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" | "monthly" | "0" => Ok(ReportingPeriod::Monthly),
            "day" | "daily" | "1" => Ok(ReportingPeriod::Daily),
            "year" | "yearly" | "2" => Ok(ReportingPeriod::Yearly),
            _ => Err(Error::data_validation(format!(
                "Invalid reporting period '{}': must be daily, monthly or yearly",
                s
            ))),
        }
    }
}

// =============================================================================
// Header Metadata
// =============================================================================

/// Read-only metadata parsed from the first line of HRU-level input files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMetadata {
    /// Subbasin number the HRU belongs to
    pub subbasin: u32,
    /// Land use code (e.g. "AGRL", "URBN")
    pub landuse: String,
}

impl HeaderMetadata {
    /// Parse `Subbasin:<id>` and `Luse:<code>` from a header line
    ///
    /// Tokens are split on single spaces, so the leading space of SWAT
    /// headers produces an empty token 0.
    pub fn parse(file: &str, header: &str) -> Result<Self> {
        let tokens: Vec<&str> = header.split(' ').collect();

        let subbasin_raw = token_value(file, &tokens, header_tokens::SUBBASIN, header_tokens::SUBBASIN_KEY)?;
        let subbasin = subbasin_raw.parse::<u32>().map_err(|e| {
            Error::header_parse(
                file,
                format!("invalid subbasin id '{}' in token {} ({})", subbasin_raw, header_tokens::SUBBASIN, e),
            )
        })?;

        let landuse = token_value(file, &tokens, header_tokens::LANDUSE, header_tokens::LANDUSE_KEY)?;
        if landuse.is_empty() {
            return Err(Error::header_parse(
                file,
                format!("empty landuse code in token {}", header_tokens::LANDUSE),
            ));
        }

        Ok(Self {
            subbasin,
            landuse: landuse.to_string(),
        })
    }

    /// Whether the HRU carries the urban land use code
    pub fn is_urban(&self) -> bool {
        self.landuse == crate::constants::URBAN_LANDUSE
    }
}

fn token_value<'a>(file: &str, tokens: &[&'a str], index: usize, key: &str) -> Result<&'a str> {
    let token = tokens.get(index).ok_or_else(|| {
        Error::header_parse(
            file,
            format!("expected {} token at index {}, header has {} tokens", key, index, tokens.len()),
        )
    })?;

    let (found, value) = token.split_once(header_tokens::SEPARATOR).ok_or_else(|| {
        Error::header_parse(
            file,
            format!("{} token '{}' at index {} has no '{}'", key, token, index, header_tokens::SEPARATOR),
        )
    })?;

    if !found.trim().eq_ignore_ascii_case(key) {
        return Err(Error::header_parse(
            file,
            format!("expected {} token at index {}, found '{}'", key, index, token),
        ));
    }

    Ok(value.trim())
}
