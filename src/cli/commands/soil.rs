//! `check-soil` and `correct-texture`: soil profile consistency

use super::shared::{CommandContext, print_json};
use crate::app::services::field_registry::SoilParameter;
use crate::app::services::file_manipulator::{
    PorosityViolation, SoilFile, TextureCorrection, apply_texture_correction, check_porosity,
    plan_texture_correction,
};
use crate::app::services::model_inventory::discover;
use crate::cli::args::{CorrectTextureArgs, SoilArgs};
use crate::Result;
use colored::*;
use serde::Serialize;
use tracing::info;

/// Porosity check of one soil file
#[derive(Debug, Clone, Serialize)]
pub struct PorosityReport {
    pub file: String,
    pub horizons: usize,
    pub violations: Vec<PorosityViolation>,
}

/// Texture renormalisation of one soil file
#[derive(Debug, Clone, Serialize)]
pub struct TextureReport {
    pub file: String,
    pub corrections: Vec<TextureCorrection>,
    pub committed: bool,
}

/// Named soil files, or every `.sol` file of the working directory
fn soil_files(context: &CommandContext, args: &SoilArgs) -> Result<Vec<String>> {
    if !args.files.is_empty() {
        return Ok(args.files.clone());
    }
    let files = discover(&context.config.working_dir, "*.sol")?;
    info!("Found {} soil files", files.len());
    Ok(files)
}

pub fn run_check_soil(context: &CommandContext, args: &SoilArgs) -> Result<()> {
    let reports = check_soils(context, args)?;
    if context.is_json() {
        return print_json(&reports);
    }

    let mut failing = 0;
    for report in &reports {
        if report.violations.is_empty() {
            println!("{} {} horizons {}", report.file.bold(), report.horizons, "ok".green());
            continue;
        }
        failing += 1;
        println!("{} {} horizons", report.file.bold(), report.horizons);
        for violation in &report.violations {
            println!(
                "  {}",
                format!(
                    "horizon {}: field capacity {:.4} >= saturation {:.4}",
                    violation.horizon,
                    violation.properties.field_capacity,
                    violation.properties.saturation
                )
                .red()
            );
        }
    }
    println!("\n{} of {} soils violate porosity", failing, reports.len());
    Ok(())
}

pub fn check_soils(context: &CommandContext, args: &SoilArgs) -> Result<Vec<PorosityReport>> {
    let options = context.manipulator_options();
    soil_files(context, args)?
        .iter()
        .map(|file| -> Result<PorosityReport> {
            let soil = SoilFile::open(file, &[], &options)?;
            Ok(PorosityReport {
                file: file.clone(),
                horizons: soil.horizon_count(),
                violations: check_porosity(&soil),
            })
        })
        .collect()
}

pub fn run_correct_texture(context: &CommandContext, args: &CorrectTextureArgs) -> Result<()> {
    let reports = correct_textures(context, args)?;
    if context.is_json() {
        return print_json(&reports);
    }

    for report in &reports {
        println!("{}", report.file.bold());
        for correction in &report.corrections {
            let line = format!(
                "  horizon {}: clay {:.2}, silt {:.2} -> {:.2}, sand {:.2} -> {:.2}",
                correction.horizon + 1,
                correction.clay,
                correction.silt,
                correction.corrected_silt(),
                correction.sand,
                correction.corrected_sand()
            );
            if (correction.factor - 1.0).abs() > f64::EPSILON {
                println!("{}", line.cyan());
            } else {
                println!("{}", line);
            }
        }
    }
    if args.dry_run {
        println!("{}", "Dry run, no file written".yellow());
    }
    Ok(())
}

pub fn correct_textures(context: &CommandContext, args: &CorrectTextureArgs) -> Result<Vec<TextureReport>> {
    let options = context.manipulator_options();
    let texture = [SoilParameter::Silt, SoilParameter::Sand];

    soil_files(context, &args.soils)?
        .iter()
        .map(|file| -> Result<TextureReport> {
            let mut soil = SoilFile::open(file, &texture, &options)?;
            let corrections = if args.dry_run {
                plan_texture_correction(
                    soil.value(SoilParameter::Clay).unwrap_or(&[]),
                    soil.value(SoilParameter::Silt).unwrap_or(&[]),
                    soil.value(SoilParameter::Sand).unwrap_or(&[]),
                )?
            } else {
                apply_texture_correction(&mut soil)?
            };
            Ok(TextureReport {
                file: file.clone(),
                corrections,
                committed: !args.dry_run,
            })
        })
        .collect()
}
