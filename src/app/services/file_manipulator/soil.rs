//! Soil files: horizons, profile means and hydraulic properties

use super::manipulator::FileManipulator;
use crate::app::services::field_registry::{Parameter, SoilParameter};
use crate::constants::{CLAY_WILTING_COEFFICIENT, PARTICLE_DENSITY};
use serde::Serialize;

/// Water-holding properties of one soil horizon, as volume fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydraulicProperties {
    /// `SOL_AWC + 0.4 * CLAY / 100 * SOL_BD`
    pub field_capacity: f64,
    /// `1 - SOL_BD / 2.65`
    pub saturation: f64,
    /// Saturation minus field capacity
    pub air_capacity: f64,
}

impl HydraulicProperties {
    pub fn from_horizon(awc: f64, bulk_density: f64, clay: f64) -> Self {
        let field_capacity = awc + CLAY_WILTING_COEFFICIENT * clay / 100.0 * bulk_density;
        let saturation = 1.0 - bulk_density / PARTICLE_DENSITY;
        Self {
            field_capacity,
            saturation,
            air_capacity: saturation - field_capacity,
        }
    }
}

impl FileManipulator<SoilParameter> {
    /// Number of horizons, taken from the depth row
    pub fn horizon_count(&self) -> usize {
        self.value(SoilParameter::SolZ).map_or(0, |depths| depths.len())
    }

    /// Depth-weighted mean of a layered parameter over the whole profile
    ///
    /// Each horizon is weighted by its thickness. For `SOL_Z` this is the
    /// depth of the deepest horizon. Scalar parameters, parameters that were
    /// never loaded and rows shorter than the depth row give `None`.
    pub fn profile_mean(&self, parameter: SoilParameter) -> Option<f64> {
        let depths = self.value(SoilParameter::SolZ)?;
        let deepest = *depths.last()?;

        if parameter == SoilParameter::SolZ {
            return Some(deepest);
        }
        if !parameter.descriptor().is_layered() {
            return None;
        }

        let values = self.value(parameter)?;
        if values.len() < depths.len() {
            return None;
        }
        if depths.len() == 1 {
            return Some(values[0]);
        }

        let weighted = values[0] * depths[0]
            + (1..depths.len())
                .map(|n| values[n] * (depths[n] - depths[n - 1]))
                .sum::<f64>();
        Some(weighted / deepest)
    }

    /// Field capacity, saturation and air capacity of every horizon
    pub fn hydraulic_properties(&self) -> Vec<HydraulicProperties> {
        let (Some(awc), Some(bd), Some(clay)) = (
            self.value(SoilParameter::SolAwc),
            self.value(SoilParameter::SolBd),
            self.value(SoilParameter::Clay),
        ) else {
            return Vec::new();
        };

        (0..self.horizon_count())
            .filter_map(|i| {
                Some(HydraulicProperties::from_horizon(
                    *awc.get(i)?,
                    *bd.get(i)?,
                    *clay.get(i)?,
                ))
            })
            .collect()
    }
}
