//! Helpers shared by every command: logging, configuration, encoding
//! resolution and report printing

use crate::app::models::ReportingPeriod;
use crate::app::services::file_manipulator::{ControlFile, ManipulatorOptions};
use crate::app::services::model_inventory::SimulationPeriod;
use crate::app::services::record_buffer::{
    ByteHeuristic, TextEncoding, detect_file_encoding, resolve_encoding,
};
use crate::cli::args::{GlobalArgs, OutputFormat};
use crate::config::Config;
use crate::constants::{CONTROL_FILE_NAME, DEFAULT_CONTROL_PARAMETERS};
use crate::{Error, Result};
use serde::Serialize;
use tracing::{debug, info};

/// Settings resolved once per invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub encoding: TextEncoding,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load the configuration and resolve the model encoding
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let config = load_configuration(args)?;
        let encoding = resolve_model_encoding(&config)?;
        info!("Model text encoding: {}", encoding);

        Ok(Self {
            config,
            encoding,
            format: args.output_format,
        })
    }

    pub fn manipulator_options(&self) -> ManipulatorOptions {
        ManipulatorOptions::new(&self.config.working_dir).with_encoding(self.encoding)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Simulated period, `None` when the model has no file.cio
    pub fn simulation_period(&self) -> Result<Option<SimulationPeriod>> {
        if !self.config.working_dir.join(CONTROL_FILE_NAME).is_file() {
            return Ok(None);
        }
        let control = ControlFile::open_by_names(
            CONTROL_FILE_NAME,
            DEFAULT_CONTROL_PARAMETERS,
            &self.manipulator_options(),
        )?;
        SimulationPeriod::from_control(&control).map(Some)
    }

    /// Warm-up samples and reporting period: command line, then
    /// configuration, then file.cio, then daily output without warm-up
    pub fn output_timing(
        &self,
        days_skip: Option<usize>,
        period: Option<ReportingPeriod>,
    ) -> Result<(usize, ReportingPeriod)> {
        let days_skip = days_skip.or(self.config.days_skip);
        let period = period.or(self.config.reporting_period);

        if let (Some(days_skip), Some(period)) = (days_skip, period) {
            return Ok((days_skip, period));
        }

        let simulated = self.simulation_period()?;
        let period = period.or(simulated.map(|p| p.reporting)).unwrap_or_default();
        let resolved = (
            days_skip
                .or(simulated.map(|p| p.warm_up_samples(period)))
                .unwrap_or(0),
            period,
        );
        debug!("Output timing: skip {} samples, {:?} rows", resolved.0, resolved.1);
        Ok(resolved)
    }
}

/// Set up tracing with the level chosen by `-v` / `--quiet`
pub fn setup_logging(args: &GlobalArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("swat_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &GlobalArgs) -> Result<Config> {
    let default_config_path = match &args.config_file {
        Some(_) => None,
        None => Config::default_config_path().ok(),
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Apply command-line flags over the loaded configuration
pub fn apply_cli_overrides(config: &mut Config, args: &GlobalArgs) {
    if let Some(dir) = &args.working_dir {
        config.working_dir = dir.clone();
    }
    if let Some(encoding) = &args.encoding {
        config.encoding = encoding.clone();
    }
}

/// Configured codec, or the one detected from file.cio
pub fn resolve_model_encoding(config: &Config) -> Result<TextEncoding> {
    if let Some(encoding) = config.fixed_encoding()? {
        return Ok(encoding);
    }

    let control = config.working_dir.join(CONTROL_FILE_NAME);
    if control.is_file() {
        detect_file_encoding(&ByteHeuristic, &control)
    } else {
        Ok(resolve_encoding(None))
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::data_validation(format!("Failed to serialise report: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// Values of a row, formatted for a terminal
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
