//! Test utilities for file manipulators
//!
//! Fixture files are generated from the registry so that every value sits
//! exactly in its declared columns. Lines without a registered parameter
//! are filled with opaque text that must survive every edit.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::app::services::field_accessor::format_fixed;
use crate::app::services::field_registry::{Parameter, SoilParameter};
use crate::app::services::file_manipulator::ManipulatorOptions;

mod manipulator_tests;
mod validators_tests;

/// Header line in the ArcSWAT layout, tokens 5 and 7 carry subbasin and land use
pub fn hru_header(extension: &str, subbasin: u32, landuse: &str) -> String {
    format!(
        " .{} file Watershed HRU:1 Subbasin:{} HRU:1 Luse:{} Soil: TestSoil Slope: 0-9999 1/1/2020 12:00:00 AM ArcSWAT 2012.10_4.19",
        extension, subbasin, landuse
    )
}

/// File text of a scalar-only kind with the given values, every other
/// registered parameter set to 1
pub fn scalar_file<P: Parameter>(header: &str, values: &[(P, &str)]) -> String {
    let given: HashMap<P, &str> = values.iter().copied().collect();
    let last_line = P::all()
        .iter()
        .map(|p| p.descriptor().base().line)
        .max()
        .unwrap_or(1);

    let mut lines = vec![header.to_string()];
    for line in 2..=last_line {
        let parameter = P::all().iter().find(|p| p.descriptor().base().line == line);
        match parameter {
            Some(parameter) => {
                let location = parameter.descriptor().base();
                let value = given
                    .get(parameter)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| format_fixed(1.0, location.decimals));
                lines.push(format!(
                    "{:>width$}    | {} : fixture value",
                    value,
                    parameter.name(),
                    width = location.col_end
                ));
            }
            None => lines.push(format!("Section header on line {}:", line)),
        }
    }

    lines.join("\n") + "\n"
}

/// Soil profile values by parameter, one entry per horizon
pub struct SoilProfile {
    pub landuse: &'static str,
    pub rows: HashMap<SoilParameter, Vec<f64>>,
}

impl SoilProfile {
    /// Two horizons with plausible loam values
    pub fn loam() -> Self {
        let mut rows = HashMap::new();
        rows.insert(SoilParameter::SolZ, vec![300.0, 1000.0]);
        rows.insert(SoilParameter::SolBd, vec![1.4, 1.5]);
        rows.insert(SoilParameter::SolAwc, vec![0.15, 0.12]);
        rows.insert(SoilParameter::SolK, vec![20.0, 10.0]);
        rows.insert(SoilParameter::Clay, vec![20.0, 30.0]);
        rows.insert(SoilParameter::Silt, vec![30.0, 30.0]);
        rows.insert(SoilParameter::Sand, vec![30.0, 40.0]);
        Self {
            landuse: "AGRL",
            rows,
        }
    }

    pub fn with(mut self, parameter: SoilParameter, values: &[f64]) -> Self {
        self.rows.insert(parameter, values.to_vec());
        self
    }

    fn horizons(&self) -> usize {
        self.rows.get(&SoilParameter::SolZ).map_or(1, |z| z.len())
    }

    pub fn text(&self) -> String {
        let mut lines = vec![
            hru_header("Sol", 1, self.landuse),
            " Soil Name: TestSoil".to_string(),
            " Soil Hydrologic Group: B".to_string(),
            format!("{:<28}{:>8.2}", " Maximum rooting depth(m) :", 1500.0),
            format!("{:<50}{:>6.3}", " Porosity fraction from which anions are excluded:", 0.5),
            format!("{:<32}{:>6.3}", " Crack volume potential of soil:", 0.5),
            " Texture 1                :".to_string(),
        ];

        for parameter in SoilParameter::all().iter().filter(|p| p.descriptor().is_layered()) {
            let decimals = parameter.descriptor().base().decimals;
            let values = self
                .rows
                .get(parameter)
                .cloned()
                .unwrap_or_else(|| vec![0.0; self.horizons()]);
            let slots: String = values
                .iter()
                .map(|v| format!("{:>12}", format_fixed(*v, decimals)))
                .collect();
            lines.push(format!("{:<27}{}", format!(" {}:", parameter.name()), slots));
        }

        lines.join("\n") + "\n"
    }
}

/// Temp directory holding model files
pub struct ModelDir {
    pub dir: TempDir,
}

impl ModelDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    pub fn options(&self) -> ManipulatorOptions {
        ManipulatorOptions::new(self.dir.path())
    }
}

/// Byte positions where two equally long texts differ
pub fn differing_positions(a: &str, b: &str) -> Vec<usize> {
    assert_eq!(a.len(), b.len());
    a.bytes()
        .zip(b.bytes())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}
