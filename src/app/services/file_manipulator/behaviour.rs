//! Per-kind behaviour of file manipulators

use super::manipulator::{FileManipulator, ManipulatorOptions};
use crate::Result;
use crate::app::services::field_registry::{
    BasinParameter, ControlParameter, GroundwaterParameter, HruParameter, ManagementParameter,
    Parameter, RoutingParameter, SoilParameter, SubbasinParameter,
};

/// Hooks a file kind can override
pub trait FileBehaviour: Parameter {
    /// Parameters loaded whether requested or not
    fn mandatory() -> &'static [Self] {
        &[]
    }

    /// Whether a substituted value is spread over the occurrences as a
    /// cumulative depth profile
    fn spreads_depth(self) -> bool {
        false
    }

    /// Derive extra state once values and header are loaded
    fn after_load(
        _manipulator: &mut FileManipulator<Self>,
        _options: &ManipulatorOptions,
    ) -> Result<()> {
        Ok(())
    }
}

impl FileBehaviour for BasinParameter {}
impl FileBehaviour for GroundwaterParameter {}
impl FileBehaviour for ManagementParameter {}
impl FileBehaviour for SubbasinParameter {}
impl FileBehaviour for RoutingParameter {}
impl FileBehaviour for ControlParameter {}

impl FileBehaviour for SoilParameter {
    fn mandatory() -> &'static [Self] {
        &[
            SoilParameter::SolZ,
            SoilParameter::SolAwc,
            SoilParameter::SolBd,
            SoilParameter::Clay,
        ]
    }

    fn spreads_depth(self) -> bool {
        self == SoilParameter::SolZ
    }
}

impl FileBehaviour for HruParameter {
    fn mandatory() -> &'static [Self] {
        &[HruParameter::HruFr]
    }

    fn after_load(manipulator: &mut FileManipulator<Self>, options: &ManipulatorOptions) -> Result<()> {
        super::hru::attach_subbasin_area(manipulator, options)
    }
}
