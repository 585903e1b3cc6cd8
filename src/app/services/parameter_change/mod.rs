//! Calibration parameter names
//!
//! Calibration tools address a change by a compact name:
//!
//! ```text
//! <how>__<PARAM>__<ext>[__<hydgrp>__<soltext>__<landuse>__<subbsn>__<slope>]
//! ```
//!
//! where `how` is `v` (substitute), `r` (multiplicative) or `a` (additive)
//! and `ext` the extension of the file kind holding `PARAM`. Constraint
//! fields are carried along but not evaluated. SWAT-CUP writes the same
//! change as `r__SOL_AWC().sol`, which [`ParameterChange::from_swatcup`]
//! converts.

#[cfg(test)]
pub mod tests;

use crate::app::models::{ChangeMode, FileKind};
use crate::app::services::field_registry::locations_for;
use crate::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Separator between the fields of a parameter name
pub const FIELD_SEPARATOR: &str = "__";

/// File kinds a calibration change may address
pub const CALIBRATION_KINDS: [FileKind; 7] = [
    FileKind::Basin,
    FileKind::Groundwater,
    FileKind::Management,
    FileKind::Subbasin,
    FileKind::Hru,
    FileKind::Soil,
    FileKind::Routing,
];

static SWATCUP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<how>[vVaArR])__(?P<param>[A-Za-z0-9_]+?)(?:\(\))?\.(?P<ext>[A-Za-z]+)(?P<rest>__\S*)?$")
        .expect("SWAT-CUP name pattern is valid")
});

/// One calibration change: how, what and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterChange {
    pub mode: ChangeMode,
    /// Registry name of the parameter
    pub parameter: String,
    pub kind: FileKind,
    /// Hydrologic group, soil texture, land use, subbasin and slope filters
    pub constraints: Vec<String>,
}

/// Single-letter prefix of a change mode in parameter names
pub fn mode_prefix(mode: ChangeMode) -> char {
    match mode {
        ChangeMode::Substitute => 'v',
        ChangeMode::Multiplicative => 'r',
        ChangeMode::Additive => 'a',
    }
}

fn mode_from_prefix(prefix: &str) -> Option<ChangeMode> {
    match prefix {
        "v" => Some(ChangeMode::Substitute),
        "r" => Some(ChangeMode::Multiplicative),
        "a" => Some(ChangeMode::Additive),
        _ => None,
    }
}

impl ParameterChange {
    /// Build a change, checking the parameter against the registry
    pub fn new(mode: ChangeMode, parameter: &str, kind: FileKind) -> Result<Self> {
        if !CALIBRATION_KINDS.contains(&kind) {
            return Err(Error::data_validation(format!(
                "{} files are not calibrated",
                kind
            )));
        }
        locations_for(kind, parameter)?;

        Ok(Self {
            mode,
            parameter: parameter.trim().to_string(),
            kind,
            constraints: Vec::new(),
        })
    }

    /// Convert one SWAT-CUP parameter name, e.g. `r__SOL_AWC().sol`
    ///
    /// Only the first whitespace-separated token of `line` is read, so the
    /// value ranges SWAT-CUP puts behind the name are ignored.
    pub fn from_swatcup(line: &str) -> Result<Self> {
        let token = line.split_whitespace().next().unwrap_or("");
        let captures = SWATCUP_NAME.captures(token).ok_or_else(|| {
            Error::data_validation(format!("'{}' is not a SWAT-CUP parameter name", token))
        })?;

        let how = captures["how"].to_ascii_lowercase();
        let ext = captures["ext"].to_ascii_lowercase();
        let rest = captures.name("rest").map_or("", |m| m.as_str());

        format!("{how}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{ext}{rest}", &captures["param"]).parse()
    }

    /// Convert every parameter line of a SWAT-CUP parameter file
    ///
    /// Comments (`#`, `//`) and blank lines are skipped. Lines that do not
    /// convert, and repeats of an already converted parameter, are skipped
    /// with a warning.
    pub fn from_swatcup_file(text: &str) -> Vec<Self> {
        let mut changes: Vec<Self> = Vec::new();
        let mut seen = BTreeSet::new();

        for (index, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }

            match Self::from_swatcup(trimmed) {
                Ok(change) => {
                    if seen.insert(change.parameter.clone()) {
                        debug!("Line {}: {}", index + 1, change);
                        changes.push(change);
                    } else {
                        warn!("Line {}: {} already used before, skipped", index + 1, change.parameter);
                    }
                }
                Err(e) => warn!("Line {}: {}", index + 1, e),
            }
        }

        changes
    }

    pub fn with_constraints(mut self, constraints: Vec<String>) -> Self {
        self.constraints = constraints;
        self
    }
}

impl FromStr for ParameterChange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.split_whitespace().next().unwrap_or("");
        let fields: Vec<&str> = name.split(FIELD_SEPARATOR).collect();
        if fields.len() < 3 {
            return Err(Error::data_validation(format!(
                "'{}' is not a parameter name: expected <how>__<PARAM>__<ext>",
                name
            )));
        }

        let mode = mode_from_prefix(fields[0]).ok_or_else(|| {
            Error::data_validation(format!(
                "'{}' has modifier '{}': must be v, r or a",
                name, fields[0]
            ))
        })?;
        let kind = FileKind::from_extension(fields[2]).ok_or_else(|| {
            Error::data_validation(format!("'{}' has unknown file type '{}'", name, fields[2]))
        })?;

        let constraints = fields[3..].iter().map(|c| c.to_string()).collect();
        Ok(Self::new(mode, fields[1], kind)?.with_constraints(constraints))
    }
}

impl std::fmt::Display for ParameterChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            mode_prefix(self.mode),
            self.parameter,
            self.kind.extension(),
            sep = FIELD_SEPARATOR
        )?;
        for constraint in &self.constraints {
            write!(f, "{}{}", FIELD_SEPARATOR, constraint)?;
        }
        Ok(())
    }
}
