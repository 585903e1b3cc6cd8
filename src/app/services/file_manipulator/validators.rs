//! Consistency checks and corrections of soil profiles
//!
//! Scaling texture or water parameters by factors easily leaves a profile
//! that SWAT would reject or silently clip. These helpers renormalise the
//! texture of every horizon and report horizons whose field capacity reaches
//! the total pore volume.

use super::manipulator::FileManipulator;
use super::soil::HydraulicProperties;
use crate::app::models::ChangeMode;
use crate::app::services::field_registry::SoilParameter;
use crate::constants::TEXTURE_TOTAL;
use crate::{Error, Result};
use serde::Serialize;
use tracing::{info, warn};

/// Texture of one horizon before and after renormalisation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextureCorrection {
    /// 0-indexed horizon
    pub horizon: usize,
    pub clay: f64,
    pub silt: f64,
    pub sand: f64,
    /// Factor applied to silt and sand
    pub factor: f64,
}

impl TextureCorrection {
    pub fn corrected_silt(&self) -> f64 {
        self.silt * self.factor
    }

    pub fn corrected_sand(&self) -> f64 {
        self.sand * self.factor
    }
}

/// Horizon whose field capacity reaches or exceeds saturation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PorosityViolation {
    /// 1-indexed horizon
    pub horizon: usize,
    pub properties: HydraulicProperties,
}

/// Factors that bring clay + silt + sand to 100 in every horizon
///
/// Clay is kept; silt and sand are scaled by `(100 - clay) / (silt + sand)`.
///
/// # Errors
/// * `Error::ShapeMismatch` if the three rows have different horizon counts
/// * `Error::DataValidation` if a horizon has neither silt nor sand
pub fn plan_texture_correction(clay: &[f64], silt: &[f64], sand: &[f64]) -> Result<Vec<TextureCorrection>> {
    if silt.len() != clay.len() {
        return Err(Error::shape_mismatch("SILT horizons", clay.len(), silt.len()));
    }
    if sand.len() != clay.len() {
        return Err(Error::shape_mismatch("SAND horizons", clay.len(), sand.len()));
    }

    clay.iter()
        .zip(silt)
        .zip(sand)
        .enumerate()
        .map(|(horizon, ((&clay, &silt), &sand))| {
            let coarse = silt + sand;
            if coarse == 0.0 {
                return Err(Error::data_validation(format!(
                    "horizon {} has no silt or sand to rescale",
                    horizon + 1
                )));
            }
            Ok(TextureCorrection {
                horizon,
                clay,
                silt,
                sand,
                factor: (TEXTURE_TOTAL - clay) / coarse,
            })
        })
        .collect()
}

/// Renormalise the texture of every horizon and commit the file
pub fn apply_texture_correction(soil: &mut FileManipulator<SoilParameter>) -> Result<Vec<TextureCorrection>> {
    let clay = soil.ensure_loaded(SoilParameter::Clay)?.to_vec();
    let silt = soil.ensure_loaded(SoilParameter::Silt)?.to_vec();
    let sand = soil.ensure_loaded(SoilParameter::Sand)?.to_vec();

    let corrections = plan_texture_correction(&clay, &silt, &sand)?;
    let changes: Vec<_> = corrections
        .iter()
        .flat_map(|correction| {
            [
                (SoilParameter::Silt, correction.horizon, correction.corrected_silt(), ChangeMode::Substitute),
                (SoilParameter::Sand, correction.horizon, correction.corrected_sand(), ChangeMode::Substitute),
            ]
        })
        .collect();
    soil.set_layer_changes(&changes)?;

    soil.commit()?;
    info!(
        "Renormalised texture of {} horizons in {}",
        corrections.len(),
        soil.file_name()
    );
    Ok(corrections)
}

/// Horizons where SWAT would compute a field capacity at or above the
/// total pore volume
///
/// Violations are reported and logged, never corrected.
pub fn check_porosity(soil: &FileManipulator<SoilParameter>) -> Vec<PorosityViolation> {
    soil.hydraulic_properties()
        .into_iter()
        .enumerate()
        .filter(|(_, properties)| properties.field_capacity >= properties.saturation)
        .map(|(index, properties)| {
            warn!(
                "{}: field capacity {:.4} reaches saturation {:.4} in horizon {}",
                soil.file_name(),
                properties.field_capacity,
                properties.saturation,
                index + 1
            );
            PorosityViolation {
                horizon: index + 1,
                properties,
            }
        })
        .collect()
}
