//! `inspect` and `period`: what the model holds and what a file carries

use super::shared::{CommandContext, format_values, print_json};
use crate::app::models::{FileKind, HeaderMetadata};
use crate::app::services::field_registry::Parameter;
use crate::app::services::file_manipulator::{
    BasinFile, ControlFile, FileBehaviour, FileManipulator, GroundwaterFile, HruFile,
    HydraulicProperties, ManagementFile, RoutingFile, SoilFile, SubbasinFile,
};
use crate::app::services::model_inventory::{InventoryOptions, ModelInventory, SimulationPeriod};
use crate::cli::args::InspectArgs;
use crate::constants::{
    CONTROL_FILE_NAME, DEFAULT_BASIN_PARAMETERS, DEFAULT_CONTROL_PARAMETERS,
    DEFAULT_GROUNDWATER_PARAMETERS, DEFAULT_HRU_PARAMETERS, DEFAULT_MANAGEMENT_PARAMETERS,
    DEFAULT_ROUTING_PARAMETERS, DEFAULT_SOIL_PARAMETERS, DEFAULT_SUBBASIN_PARAMETERS,
};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Files per kind found in the working directory
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    pub working_dir: String,
    pub encoding: String,
    pub files: BTreeMap<String, usize>,
    pub period: Option<SimulationPeriod>,
}

/// Loaded values of one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub kind: FileKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderMetadata>,
    pub values: BTreeMap<String, Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_km2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil: Option<SoilSummary>,
}

/// Derived properties of a soil profile
#[derive(Debug, Clone, Serialize)]
pub struct SoilSummary {
    pub horizons: usize,
    pub profile_means: BTreeMap<String, f64>,
    pub hydraulic: Vec<HydraulicProperties>,
}

/// Parameters loaded by default for a file kind
pub fn default_parameters(kind: FileKind) -> &'static [&'static str] {
    match kind {
        FileKind::Control => DEFAULT_CONTROL_PARAMETERS,
        FileKind::Basin => DEFAULT_BASIN_PARAMETERS,
        FileKind::Groundwater => DEFAULT_GROUNDWATER_PARAMETERS,
        FileKind::Soil => DEFAULT_SOIL_PARAMETERS,
        FileKind::Hru => DEFAULT_HRU_PARAMETERS,
        FileKind::Routing => DEFAULT_ROUTING_PARAMETERS,
        FileKind::Subbasin => DEFAULT_SUBBASIN_PARAMETERS,
        FileKind::Management => DEFAULT_MANAGEMENT_PARAMETERS,
    }
}

/// Kind of an input file, judged from its name
pub fn kind_of(file: &str) -> Result<FileKind> {
    FileKind::from_file_name(file).ok_or_else(|| {
        Error::configuration(format!("Cannot tell the file kind of '{}' from its extension", file))
    })
}

pub fn run_inspect(context: &CommandContext, args: &InspectArgs) -> Result<()> {
    match &args.file {
        Some(file) => {
            let names: Vec<&str> = match &args.parameters {
                Some(list) => list.names.iter().map(String::as_str).collect(),
                None => default_parameters(kind_of(file)?).to_vec(),
            };
            let report = inspect_file(context, file, &names)?;
            if context.is_json() {
                print_json(&report)
            } else {
                print_file_report(&report);
                Ok(())
            }
        }
        None => {
            let report = inspect_model(context)?;
            if context.is_json() {
                print_json(&report)
            } else {
                print_inventory_report(&report);
                Ok(())
            }
        }
    }
}

pub fn run_period(context: &CommandContext) -> Result<()> {
    let period = context.simulation_period()?.ok_or_else(|| {
        Error::configuration(format!(
            "{} not found in {}",
            CONTROL_FILE_NAME,
            context.config.working_dir.display()
        ))
    })?;

    if context.is_json() {
        print_json(&period)
    } else {
        print_period(&period);
        Ok(())
    }
}

/// Scan the working directory and count its files
pub fn inspect_model(context: &CommandContext) -> Result<InventoryReport> {
    let options = InventoryOptions::new(context.manipulator_options())
        .with_urban_soils(!context.config.skip_urban_soils);
    let inventory = ModelInventory::scan(&options)?;

    let period = if inventory.control.is_some() {
        Some(inventory.period()?)
    } else {
        None
    };

    Ok(InventoryReport {
        working_dir: context.config.working_dir.display().to_string(),
        encoding: context.encoding.to_string(),
        files: inventory
            .counts()
            .into_iter()
            .map(|(kind, count)| (kind.to_string(), count))
            .collect(),
        period,
    })
}

/// Load the named parameters of one file
pub fn inspect_file(context: &CommandContext, file: &str, names: &[&str]) -> Result<FileReport> {
    let options = context.manipulator_options();

    let report = match kind_of(file)? {
        FileKind::Control => file_report(&ControlFile::open_by_names(file, names, &options)?),
        FileKind::Basin => file_report(&BasinFile::open_by_names(file, names, &options)?),
        FileKind::Groundwater => file_report(&GroundwaterFile::open_by_names(file, names, &options)?),
        FileKind::Routing => file_report(&RoutingFile::open_by_names(file, names, &options)?),
        FileKind::Subbasin => file_report(&SubbasinFile::open_by_names(file, names, &options)?),
        FileKind::Management => file_report(&ManagementFile::open_by_names(file, names, &options)?),
        FileKind::Hru => {
            let hru = HruFile::open_by_names(file, names, &options)?;
            FileReport {
                area_km2: hru.absolute_area(),
                ..file_report(&hru)
            }
        }
        FileKind::Soil => {
            let soil = SoilFile::open_by_names(file, names, &options)?;
            FileReport {
                soil: Some(soil_summary(&soil)),
                ..file_report(&soil)
            }
        }
    };

    Ok(report)
}

fn file_report<P: FileBehaviour>(manipulator: &FileManipulator<P>) -> FileReport {
    FileReport {
        file: manipulator.file_name().to_string(),
        kind: P::KIND,
        header: manipulator.header().cloned(),
        values: manipulator
            .values()
            .iter()
            .map(|(parameter, values)| (parameter.name().to_string(), values.clone()))
            .collect(),
        area_km2: None,
        soil: None,
    }
}

fn soil_summary(soil: &SoilFile) -> SoilSummary {
    SoilSummary {
        horizons: soil.horizon_count(),
        profile_means: soil
            .values()
            .keys()
            .filter_map(|parameter| {
                soil.profile_mean(*parameter)
                    .map(|mean| (parameter.name().to_string(), mean))
            })
            .collect(),
        hydraulic: soil.hydraulic_properties(),
    }
}

fn print_inventory_report(report: &InventoryReport) {
    println!("{}", "SWAT Model".bold().blue());
    println!("{}", "=".repeat(50).blue());
    println!("{}: {}", "Working directory".bold(), report.working_dir);
    println!("{}: {}", "Encoding".bold(), report.encoding);
    println!();

    println!("{}", "Input files".bold());
    for (kind, count) in &report.files {
        let count = if *count == 0 {
            count.to_string().dimmed()
        } else {
            count.to_string().cyan()
        };
        println!("  {:<6} {}", kind, count);
    }

    match &report.period {
        Some(period) => {
            println!();
            print_period(period);
        }
        None => println!("\n{}", format!("No {} found", CONTROL_FILE_NAME).yellow()),
    }
}

fn print_file_report(report: &FileReport) {
    println!("{} ({})", report.file.bold().blue(), report.kind);
    if let Some(header) = &report.header {
        println!("  Subbasin {}, land use {}", header.subbasin, header.landuse.cyan());
    }

    for (name, values) in &report.values {
        println!("  {:<12} {}", name.bold(), format_values(values));
    }

    if let Some(area) = report.area_km2 {
        println!("  {:<12} {:.6} km2", "Area".bold(), area);
    }

    if let Some(soil) = &report.soil {
        println!();
        println!("{} ({} horizons)", "Soil profile".bold(), soil.horizons);
        for (name, mean) in &soil.profile_means {
            println!("  mean {:<10} {:.4}", name, mean);
        }
        for (index, horizon) in soil.hydraulic.iter().enumerate() {
            let line = format!(
                "  horizon {}: field capacity {:.4}, saturation {:.4}, air capacity {:.4}",
                index + 1,
                horizon.field_capacity,
                horizon.saturation,
                horizon.air_capacity
            );
            if horizon.air_capacity <= 0.0 {
                println!("{}", line.red());
            } else {
                println!("{}", line);
            }
        }
    }
}

fn print_period(period: &SimulationPeriod) {
    println!("{}", "Simulation period".bold());
    println!(
        "  Simulated {} to {} ({} warm-up years)",
        period.first_year, period.last_year, period.warm_up_years
    );
    println!(
        "  Read out {} to {}: {} years, {} days",
        period.readout_start.to_string().cyan(),
        period.readout_end.to_string().cyan(),
        period.readout_years,
        period.readout_days
    );
    println!("  Output rows: {:?}, warm-up samples: {}", period.reporting, period.days_skip);
}
