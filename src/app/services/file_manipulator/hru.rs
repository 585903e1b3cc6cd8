//! HRU files: absolute area from the parent subbasin

use super::manipulator::{FileManipulator, ManipulatorOptions};
use crate::app::services::field_registry::{HruParameter, SubbasinParameter};
use crate::constants::SUBBASIN_FILE_DIGITS;
use crate::{Error, Result};
use tracing::debug;

/// Name of the subbasin file holding `SUB_KM`, e.g. `000120000.sub`
pub fn subbasin_file_name(subbasin: u32) -> String {
    format!("{:0width$}0000.sub", subbasin, width = SUBBASIN_FILE_DIGITS)
}

pub(super) fn attach_subbasin_area(
    hru: &mut FileManipulator<HruParameter>,
    options: &ManipulatorOptions,
) -> Result<()> {
    let subbasin = hru.subbasin().ok_or_else(|| {
        Error::header_parse(hru.file_name(), "HRU file header carries no subbasin")
    })?;

    let sub_name = subbasin_file_name(subbasin);
    let sub = FileManipulator::<SubbasinParameter>::open(&sub_name, &[SubbasinParameter::SubKm], options)?;
    let area = sub
        .value(SubbasinParameter::SubKm)
        .and_then(|values| values.first().copied())
        .ok_or_else(|| Error::data_validation(format!("{} carries no SUB_KM", sub_name)))?;

    debug!("{} belongs to {} ({} km2)", hru.file_name(), sub_name, area);
    hru.subbasin_area = Some(area);
    Ok(())
}

impl FileManipulator<HruParameter> {
    /// Fraction of the subbasin area covered by this HRU
    pub fn hru_fraction(&self) -> Option<f64> {
        self.value(HruParameter::HruFr)
            .and_then(|values| values.first().copied())
    }

    /// Area of the parent subbasin in km2
    pub fn subbasin_area(&self) -> Option<f64> {
        self.subbasin_area
    }

    /// Absolute HRU area in km2 (`SUB_KM * HRU_FR`)
    pub fn absolute_area(&self) -> Option<f64> {
        Some(self.subbasin_area? * self.hru_fraction()?)
    }
}
