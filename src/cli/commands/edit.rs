//! `edit`: change a parameter in one file or across the model

use super::inspect::kind_of;
use super::shared::{CommandContext, format_values, print_json};
use crate::app::models::{ChangeMode, FileKind};
use crate::app::services::field_accessor::read_value;
use crate::app::services::file_manipulator::{
    BasinFile, ControlFile, FileBehaviour, FileManipulator, GroundwaterFile, HruFile,
    ManagementFile, RoutingFile, SoilFile, SubbasinFile,
};
use crate::app::services::model_inventory::{InventoryOptions, ModelInventory};
use crate::app::services::parameter_change::ParameterChange;
use crate::app::services::record_buffer::Document;
use crate::cli::args::EditArgs;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::info;

/// Outcome of a single-file edit
#[derive(Debug, Clone, Serialize)]
pub struct FileEditReport {
    pub file: String,
    pub parameter: String,
    pub mode: ChangeMode,
    pub amount: f64,
    /// 1-indexed layer, `None` when every occurrence changed
    pub layer: Option<usize>,
    pub before: Vec<f64>,
    pub after: Vec<f64>,
    pub committed: bool,
}

/// Outcome of a model-wide edit
#[derive(Debug, Clone, Serialize)]
pub struct ModelEditReport {
    pub change: String,
    pub kind: FileKind,
    pub amount: f64,
    pub changed_files: usize,
    pub committed_files: usize,
}

/// Requested edit, shared by every file kind
#[derive(Debug, Clone, Copy)]
pub struct EditRequest<'a> {
    pub parameter: &'a str,
    pub mode: ChangeMode,
    pub amount: f64,
    /// 0-indexed layer
    pub layer: Option<usize>,
    pub dry_run: bool,
}

pub fn run_edit(context: &CommandContext, args: &EditArgs) -> Result<()> {
    args.validate()?;

    match (&args.change, &args.file) {
        (Some(change), _) => {
            let report = edit_model(context, change, args.amount, args.dry_run, args.include_urban)?;
            if context.is_json() {
                print_json(&report)
            } else {
                print_model_edit(&report, args.dry_run);
                Ok(())
            }
        }
        (None, Some(file)) => {
            let parameter = args.parameter.as_deref().ok_or_else(|| {
                Error::configuration("--parameter is required when editing a single file")
            })?;
            let request = EditRequest {
                parameter,
                mode: args.mode,
                amount: args.amount,
                layer: args.layer.map(|layer| layer - 1),
                dry_run: args.dry_run,
            };
            let report = edit_file(context, file, &request)?;
            if context.is_json() {
                print_json(&report)
            } else {
                print_file_edit(&report);
                Ok(())
            }
        }
        (None, None) => Err(Error::configuration(
            "Either --change or --file with --parameter is required",
        )),
    }
}

/// Edit one file, committing unless the request is a dry run
pub fn edit_file(context: &CommandContext, file: &str, request: &EditRequest<'_>) -> Result<FileEditReport> {
    let options = context.manipulator_options();
    let name = request.parameter;

    match kind_of(file)? {
        FileKind::Control => edit_one(ControlFile::open_by_names(file, &[name], &options)?, request),
        FileKind::Basin => edit_one(BasinFile::open_by_names(file, &[name], &options)?, request),
        FileKind::Groundwater => edit_one(GroundwaterFile::open_by_names(file, &[name], &options)?, request),
        FileKind::Soil => edit_one(SoilFile::open_by_names(file, &[name], &options)?, request),
        FileKind::Hru => edit_one(HruFile::open_by_names(file, &[name], &options)?, request),
        FileKind::Routing => edit_one(RoutingFile::open_by_names(file, &[name], &options)?, request),
        FileKind::Subbasin => edit_one(SubbasinFile::open_by_names(file, &[name], &options)?, request),
        FileKind::Management => edit_one(ManagementFile::open_by_names(file, &[name], &options)?, request),
    }
}

fn edit_one<P: FileBehaviour>(
    mut manipulator: FileManipulator<P>,
    request: &EditRequest<'_>,
) -> Result<FileEditReport> {
    let parameter = P::from_name(request.parameter)?;
    let before = manipulator.ensure_loaded(parameter)?.to_vec();

    match request.layer {
        Some(layer) => manipulator.set_layer_change(parameter, layer, request.amount, request.mode)?,
        None => manipulator.set_change(parameter, request.amount, request.mode)?,
    }

    let after = if request.dry_run {
        let working = manipulator.document();
        let preview = Document::from_text(working.name(), &working.working_text(), working.encoding());
        read_value(&preview, parameter.name(), parameter.descriptor())?
    } else {
        manipulator.commit()?;
        manipulator.value(parameter).unwrap_or(&[]).to_vec()
    };

    Ok(FileEditReport {
        file: manipulator.file_name().to_string(),
        parameter: parameter.name().to_string(),
        mode: request.mode,
        amount: request.amount,
        layer: request.layer.map(|layer| layer + 1),
        before,
        after,
        committed: !request.dry_run,
    })
}

/// Apply a `how__PARAM__ext` change to every file of its kind
pub fn edit_model(
    context: &CommandContext,
    change: &str,
    amount: f64,
    dry_run: bool,
    include_urban: bool,
) -> Result<ModelEditReport> {
    let change: ParameterChange = change.parse()?;

    let options = InventoryOptions::new(context.manipulator_options())
        .with_urban_soils(include_urban || !context.config.skip_urban_soils);
    let mut inventory = ModelInventory::scan(&options)?;

    let changed_files = inventory.apply(&change, amount)?;
    let committed_files = if dry_run {
        info!("Dry run, {} changed files left unwritten", changed_files);
        0
    } else {
        inventory.commit_all()?
    };

    Ok(ModelEditReport {
        change: change.to_string(),
        kind: change.kind,
        amount,
        changed_files,
        committed_files,
    })
}

fn print_file_edit(report: &FileEditReport) {
    let target = match report.layer {
        Some(layer) => format!("{}[{}]", report.parameter, layer),
        None => report.parameter.clone(),
    };
    println!(
        "{} {} {} {}",
        report.file.bold(),
        target.cyan(),
        report.mode,
        report.amount
    );
    println!("  before: {}", format_values(&report.before));
    println!("  after:  {}", format_values(&report.after).green());
    if !report.committed {
        println!("{}", "Dry run, file left unchanged".yellow());
    }
}

fn print_model_edit(report: &ModelEditReport, dry_run: bool) {
    println!(
        "{} = {} on {} {} files",
        report.change.bold(),
        report.amount,
        report.changed_files.to_string().cyan(),
        report.kind
    );
    if dry_run {
        println!("{}", "Dry run, no file written".yellow());
    } else {
        println!("{} files written", report.committed_files.to_string().green());
    }
}
