use anyhow::Context;
use clap::Parser;
use swat_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match try_main(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn try_main(args: Args) -> anyhow::Result<()> {
    commands::setup_logging(&args.global).context("Failed to set up logging")?;
    commands::run(args).context("Command failed")
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("SWAT Processor - SWAT2012 Input Editor and Output Reader");
    println!("========================================================");
    println!();
    println!("Edit the fixed-column input files of a SWAT2012 TxtInOut directory");
    println!("byte for byte, and evaluate output.rch / output.sub / output.hru.");
    println!();
    println!("USAGE:");
    println!("    swat-processor [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    inspect          Show model files, or the parameters of one file");
    println!("    edit             Change a parameter in one file or across the model");
    println!("    period           Show the simulated period from file.cio");
    println!("    stats            Statistics of an output series");
    println!("    efficiency       Nash-Sutcliffe efficiency against observations");
    println!("    check-soil       Report horizons whose field capacity reaches saturation");
    println!("    correct-texture  Rescale silt and sand so every horizon sums to 100");
    println!("    convert          Convert a SWAT-CUP parameter file");
    println!("    help             Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -w, --working-dir <DIR>  SWAT TxtInOut directory");
    println!("    -h, --help               Show help information");
    println!("    -V, --version            Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Scale CN2 by -10 % in every management file:");
    println!("    swat-processor -w TxtInOut edit --change r__CN2__mgt --amount -0.1");
    println!();
    println!("    # Set the depth of the second horizon of one soil:");
    println!("    swat-processor -w TxtInOut edit --file 000010001.sol --parameter SOL_Z \\");
    println!("                                    --layer 2 --amount 600");
    println!();
    println!("    # Summed flow statistics of three subbasins:");
    println!("    swat-processor -w TxtInOut stats --kind sub --output WYLD --areas 1,2,3 --sum");
    println!();
    println!("For detailed help on any command, use:");
    println!("    swat-processor <COMMAND> --help");
}
