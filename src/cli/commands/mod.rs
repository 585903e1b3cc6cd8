//! Command implementations for the SWAT processor CLI
//!
//! Each command lives in its own module. Every command resolves the same
//! [`CommandContext`] first: the layered configuration, the model's text
//! encoding and the output format.

pub mod convert;
pub mod edit;
pub mod inspect;
pub mod outputs;
pub mod shared;
pub mod soil;

pub use shared::{CommandContext, setup_logging};

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the SWAT processor
///
/// Dispatches to the handler of the parsed subcommand:
/// - `inspect` / `period`: model files, parameter values and simulated period
/// - `edit`: single-file and model-wide parameter changes
/// - `stats` / `efficiency`: output series statistics and goodness of fit
/// - `check-soil` / `correct-texture`: soil profile consistency
/// - `convert`: SWAT-CUP parameter files
pub fn run(args: Args) -> Result<()> {
    args.global.validate()?;
    let command = args
        .command
        .ok_or_else(|| Error::configuration("No command given"))?;

    let context = CommandContext::from_args(&args.global)?;

    match command {
        Commands::Inspect(inspect_args) => inspect::run_inspect(&context, &inspect_args),
        Commands::Period => inspect::run_period(&context),
        Commands::Edit(edit_args) => edit::run_edit(&context, &edit_args),
        Commands::Stats(stats_args) => outputs::run_stats(&context, &stats_args),
        Commands::Efficiency(efficiency_args) => outputs::run_efficiency(&context, &efficiency_args),
        Commands::CheckSoil(soil_args) => soil::run_check_soil(&context, &soil_args),
        Commands::CorrectTexture(texture_args) => soil::run_correct_texture(&context, &texture_args),
        Commands::Convert(convert_args) => convert::run_convert(&context, &convert_args),
    }
}
