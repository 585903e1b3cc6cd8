//! `convert`: SWAT-CUP parameter files to `how__PARAM__ext` names

use super::shared::{CommandContext, print_json};
use crate::app::services::parameter_change::ParameterChange;
use crate::app::services::record_buffer::{ByteHeuristic, detect_file_encoding};
use crate::cli::args::ConvertArgs;
use crate::{Error, Result};
use tracing::info;

pub fn run_convert(context: &CommandContext, args: &ConvertArgs) -> Result<()> {
    let input = &args.input;
    let encoding = detect_file_encoding(&ByteHeuristic, input)?;
    let bytes = std::fs::read(input)
        .map_err(|e| Error::io(format!("Failed to read {}", input.display()), e))?;
    let text = encoding.decode(&input.display().to_string(), &bytes)?;

    let changes = ParameterChange::from_swatcup_file(&text);
    info!("Converted {} parameters from {}", changes.len(), input.display());

    let lines: Vec<String> = changes.iter().map(|change| change.to_string()).collect();

    match &args.output {
        Some(output) => {
            let mut body = lines.join("\n");
            body.push('\n');
            let bytes = encoding.encode(&output.display().to_string(), &body)?;
            std::fs::write(output, bytes)
                .map_err(|e| Error::io(format!("Failed to write {}", output.display()), e))?;
            info!("Wrote {}", output.display());
            Ok(())
        }
        None if context.is_json() => print_json(&changes),
        None => {
            for line in &lines {
                println!("{}", line);
            }
            Ok(())
        }
    }
}
