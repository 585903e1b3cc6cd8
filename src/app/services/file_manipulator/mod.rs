//! File manipulators for SWAT input files
//!
//! One generic [`FileManipulator`] handles every input file kind. It loads a
//! file, caches the values of the requested parameters, applies changes to
//! the working text and writes it back on commit. Kind-specific behaviour
//! lives behind the [`FileBehaviour`] trait and in dedicated impl blocks:
//!
//! - [`soil`] - horizon count, depth-weighted profile means and hydraulic
//!   properties of `.sol` files
//! - [`hru`] - absolute HRU area derived from the parent subbasin
//! - [`validators`] - texture renormalisation and porosity checks
//!
//! # Lifecycle
//!
//! ```text
//! open -> Loaded --set_change--> Changed --commit--> Committed --set_change--> Changed ...
//!                                                       \--restore--> Loaded
//! ```
//!
//! Changes always start from the cached values, which equal the last
//! committed text. Calling `set_change` twice on the same parameter without
//! a commit in between therefore keeps only the second change.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use swat_processor::app::models::ChangeMode;
//! use swat_processor::app::services::field_registry::SoilParameter;
//! use swat_processor::app::services::file_manipulator::{ManipulatorOptions, SoilFile};
//!
//! # fn example() -> swat_processor::Result<()> {
//! let options = ManipulatorOptions::new("/models/TxtInOut");
//! let mut soil = SoilFile::open("000010001.sol", &[SoilParameter::SolK], &options)?;
//!
//! soil.set_change(SoilParameter::SolK, 0.2, ChangeMode::Multiplicative)?;
//! soil.commit()?;
//! println!("profile mean SOL_K: {:?}", soil.profile_mean(SoilParameter::SolK));
//! # Ok(())
//! # }
//! ```

pub mod behaviour;
pub mod hru;
pub mod manipulator;
pub mod soil;
pub mod validators;

#[cfg(test)]
pub mod tests;

pub use behaviour::FileBehaviour;
pub use manipulator::{FileManipulator, ManipulatorOptions, ManipulatorState};
pub use soil::HydraulicProperties;
pub use validators::{
    PorosityViolation, TextureCorrection, apply_texture_correction, check_porosity,
    plan_texture_correction,
};

use crate::app::services::field_registry::{
    BasinParameter, ControlParameter, GroundwaterParameter, HruParameter, ManagementParameter,
    RoutingParameter, SoilParameter, SubbasinParameter,
};

pub type BasinFile = FileManipulator<BasinParameter>;
pub type GroundwaterFile = FileManipulator<GroundwaterParameter>;
pub type ManagementFile = FileManipulator<ManagementParameter>;
pub type SubbasinFile = FileManipulator<SubbasinParameter>;
pub type HruFile = FileManipulator<HruParameter>;
pub type SoilFile = FileManipulator<SoilParameter>;
pub type RoutingFile = FileManipulator<RoutingParameter>;
pub type ControlFile = FileManipulator<ControlParameter>;
