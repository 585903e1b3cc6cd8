//! Inventory of the input files of a SWAT model
//!
//! Scans a `TxtInOut` directory and opens one manipulator per input file
//! with the default calibration parameters of its kind, so that a change
//! can be applied to every file of a kind at once.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use swat_processor::app::services::file_manipulator::ManipulatorOptions;
//! use swat_processor::app::services::model_inventory::{InventoryOptions, ModelInventory};
//! use swat_processor::app::services::parameter_change::ParameterChange;
//!
//! # fn example() -> swat_processor::Result<()> {
//! let options = InventoryOptions::new(ManipulatorOptions::new("/models/TxtInOut"));
//! let mut model = ModelInventory::scan(&options)?;
//!
//! let change: ParameterChange = "r__SOL_AWC__sol".parse()?;
//! model.apply(&change, 0.1)?;
//! model.commit_all()?;
//!
//! let period = model.period()?;
//! println!("read out {} days after {}", period.readout_days, period.days_skip);
//! # Ok(())
//! # }
//! ```

pub mod period;

#[cfg(test)]
pub mod tests;

pub use period::SimulationPeriod;

use crate::app::models::{ChangeMode, FileKind};
use crate::app::services::field_registry::{ControlParameter, resolve_names};
use crate::app::services::file_manipulator::{
    BasinFile, ControlFile, FileBehaviour, FileManipulator, GroundwaterFile, HruFile,
    ManagementFile, ManipulatorOptions, RoutingFile, SoilFile, SubbasinFile,
};
use crate::app::services::parameter_change::ParameterChange;
use crate::constants::{
    CONTROL_FILE_NAME, DEFAULT_BASIN_PARAMETERS, DEFAULT_CONTROL_PARAMETERS,
    DEFAULT_GROUNDWATER_PARAMETERS, DEFAULT_HRU_PARAMETERS, DEFAULT_MANAGEMENT_PARAMETERS,
    DEFAULT_ROUTING_PARAMETERS, DEFAULT_SOIL_PARAMETERS, DEFAULT_SUBBASIN_PARAMETERS,
};
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// How the inventory selects files
#[derive(Debug, Clone)]
pub struct InventoryOptions {
    pub manipulator: ManipulatorOptions,
    /// Leave out soils of urban HRUs
    pub skip_urban_soils: bool,
}

impl InventoryOptions {
    pub fn new(manipulator: ManipulatorOptions) -> Self {
        Self {
            manipulator,
            skip_urban_soils: true,
        }
    }

    pub fn with_urban_soils(mut self, include: bool) -> Self {
        self.skip_urban_soils = !include;
        self
    }
}

/// Manipulators of every input file of a model, grouped by kind
#[derive(Debug, Clone)]
pub struct ModelInventory {
    pub control: Option<ControlFile>,
    pub basins: Vec<BasinFile>,
    pub groundwater: Vec<GroundwaterFile>,
    pub soils: Vec<SoilFile>,
    pub hrus: Vec<HruFile>,
    pub routing: Vec<RoutingFile>,
    pub subbasins: Vec<SubbasinFile>,
    pub management: Vec<ManagementFile>,
}

/// Sorted names of the files in `dir` matching a glob `pattern`
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<String>> {
    let escaped = glob::Pattern::escape(&dir.display().to_string());
    let full = format!("{}/{}", escaped, pattern);

    let entries = glob::glob(&full)
        .map_err(|e| Error::configuration(format!("Invalid file pattern '{}': {}", full, e)))?;

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let context = format!("Failed to scan {}", e.path().display());
            Error::io(context, e.into_error())
        })?;
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

fn open_all<P: FileBehaviour>(
    dir: &Path,
    pattern: &str,
    defaults: &[&str],
    options: &ManipulatorOptions,
) -> Result<Vec<FileManipulator<P>>> {
    let parameters = resolve_names::<P>(defaults)?;
    let files = discover(dir, pattern)?
        .iter()
        .map(|name| FileManipulator::<P>::open(name, &parameters, options))
        .collect::<Result<Vec<_>>>()?;

    debug!("Opened {} files matching {}", files.len(), pattern);
    Ok(files)
}

fn change_all<P: FileBehaviour>(
    files: &mut [FileManipulator<P>],
    name: &str,
    amount: f64,
    mode: ChangeMode,
) -> Result<usize> {
    let parameter = P::from_name(name)?;
    for file in files.iter_mut() {
        file.set_change(parameter, amount, mode)?;
    }
    Ok(files.len())
}

fn commit_dirty<P: FileBehaviour>(files: &mut [FileManipulator<P>]) -> Result<usize> {
    let mut committed = 0;
    for file in files.iter_mut().filter(|f| f.is_dirty()) {
        file.commit()?;
        committed += 1;
    }
    Ok(committed)
}

impl ModelInventory {
    /// Open every input file of the working directory
    ///
    /// HRU and subbasin files are only picked up when their name starts
    /// with `0`, which excludes `output.hru` and `output.sub`.
    pub fn scan(options: &InventoryOptions) -> Result<Self> {
        let manipulator = &options.manipulator;
        let dir = manipulator.working_dir.as_path();
        if !dir.is_dir() {
            return Err(Error::configuration(format!(
                "Working directory {} does not exist",
                dir.display()
            )));
        }

        let control = if dir.join(CONTROL_FILE_NAME).is_file() {
            let parameters = resolve_names::<ControlParameter>(DEFAULT_CONTROL_PARAMETERS)?;
            Some(ControlFile::open(CONTROL_FILE_NAME, &parameters, manipulator)?)
        } else {
            None
        };

        let mut soils: Vec<SoilFile> = open_all(dir, "*.sol", DEFAULT_SOIL_PARAMETERS, manipulator)?;
        if options.skip_urban_soils {
            let before = soils.len();
            soils.retain(|soil| !soil.header().is_some_and(|h| h.is_urban()));
            debug!("Skipped {} urban soils", before - soils.len());
        }

        let inventory = Self {
            control,
            basins: open_all(dir, "*.bsn", DEFAULT_BASIN_PARAMETERS, manipulator)?,
            groundwater: open_all(dir, "*.gw", DEFAULT_GROUNDWATER_PARAMETERS, manipulator)?,
            soils,
            hrus: open_all(dir, "0*.hru", DEFAULT_HRU_PARAMETERS, manipulator)?,
            routing: open_all(dir, "*.rte", DEFAULT_ROUTING_PARAMETERS, manipulator)?,
            subbasins: open_all(dir, "0*.sub", DEFAULT_SUBBASIN_PARAMETERS, manipulator)?,
            management: open_all(dir, "*.mgt", DEFAULT_MANAGEMENT_PARAMETERS, manipulator)?,
        };

        info!(
            "Scanned {}: {} subbasins, {} HRUs, {} soils",
            dir.display(),
            inventory.subbasins.len(),
            inventory.hrus.len(),
            inventory.soils.len()
        );
        Ok(inventory)
    }

    /// Number of open files per kind
    pub fn counts(&self) -> BTreeMap<FileKind, usize> {
        BTreeMap::from([
            (FileKind::Control, usize::from(self.control.is_some())),
            (FileKind::Basin, self.basins.len()),
            (FileKind::Groundwater, self.groundwater.len()),
            (FileKind::Soil, self.soils.len()),
            (FileKind::Hru, self.hrus.len()),
            (FileKind::Routing, self.routing.len()),
            (FileKind::Subbasin, self.subbasins.len()),
            (FileKind::Management, self.management.len()),
        ])
    }

    /// Apply a change to every file of its kind, returning how many changed
    ///
    /// Constraint fields of the change are not evaluated.
    pub fn apply(&mut self, change: &ParameterChange, amount: f64) -> Result<usize> {
        let name = change.parameter.as_str();
        let mode = change.mode;

        let changed = match change.kind {
            FileKind::Basin => change_all(&mut self.basins, name, amount, mode)?,
            FileKind::Groundwater => change_all(&mut self.groundwater, name, amount, mode)?,
            FileKind::Management => change_all(&mut self.management, name, amount, mode)?,
            FileKind::Subbasin => change_all(&mut self.subbasins, name, amount, mode)?,
            FileKind::Hru => change_all(&mut self.hrus, name, amount, mode)?,
            FileKind::Soil => change_all(&mut self.soils, name, amount, mode)?,
            FileKind::Routing => change_all(&mut self.routing, name, amount, mode)?,
            FileKind::Control => match self.control.as_mut() {
                Some(control) => change_all(std::slice::from_mut(control), name, amount, mode)?,
                None => 0,
            },
        };

        info!("Applied {} = {} to {} files", change, amount, changed);
        Ok(changed)
    }

    /// Commit every file with uncommitted edits, returning how many were written
    pub fn commit_all(&mut self) -> Result<usize> {
        let mut committed = 0;
        if let Some(control) = self.control.as_mut() {
            committed += commit_dirty(std::slice::from_mut(control))?;
        }
        committed += commit_dirty(&mut self.basins)?;
        committed += commit_dirty(&mut self.groundwater)?;
        committed += commit_dirty(&mut self.soils)?;
        committed += commit_dirty(&mut self.hrus)?;
        committed += commit_dirty(&mut self.routing)?;
        committed += commit_dirty(&mut self.subbasins)?;
        committed += commit_dirty(&mut self.management)?;

        info!("Committed {} files", committed);
        Ok(committed)
    }

    /// Simulated period from `file.cio`
    pub fn period(&self) -> Result<SimulationPeriod> {
        let control = self.control.as_ref().ok_or_else(|| {
            Error::configuration(format!("{} not found in the working directory", CONTROL_FILE_NAME))
        })?;
        SimulationPeriod::from_control(control)
    }
}
