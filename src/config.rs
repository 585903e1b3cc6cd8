//! Configuration management and validation.
//!
//! Settings are layered, later layers overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. a JSON file (`--config`, or `swat-processor/config.json` in the user
//!    config directory when it exists)
//! 3. `SWAT_PROCESSOR_*` environment variables
//! 4. command-line flags, applied by the CLI

use crate::app::models::ReportingPeriod;
use crate::app::services::record_buffer::TextEncoding;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_WORKING_DIR, ENV_PREFIX};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SWAT `TxtInOut` directory
    pub working_dir: PathBuf,

    /// Codec label of the model text files; `auto` detects it per file
    pub encoding: String,

    /// Output samples to skip before statistics; taken from file.cio when unset
    pub days_skip: Option<usize>,

    /// Reporting period of the output files; taken from file.cio when unset
    pub reporting_period: Option<ReportingPeriod>,

    /// Leave urban soils out of model-wide edits
    pub skip_urban_soils: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from(DEFAULT_WORKING_DIR),
            encoding: "auto".to_string(),
            days_skip: None,
            reporting_period: None,
            skip_urban_soils: true,
        }
    }
}

impl Config {
    /// Location of the per-user configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;
        serde_json::from_str(&text).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Defaults, then `config_file` if given, then the environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override settings from `SWAT_PROCESSOR_*` variables looked up by `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(dir) = var("WORKING_DIR") {
            self.working_dir = PathBuf::from(dir);
        }
        if let Some(encoding) = var("ENCODING") {
            self.encoding = encoding;
        }
        if let Some(days) = var("DAYS_SKIP") {
            let days = days.trim().parse::<usize>().map_err(|_| {
                Error::configuration(format!("{}DAYS_SKIP must be a whole number, got '{}'", ENV_PREFIX, days))
            })?;
            self.days_skip = Some(days);
        }
        if let Some(period) = var("REPORTING_PERIOD") {
            self.reporting_period = Some(period.parse()?);
        }
        Ok(())
    }

    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_days_skip(mut self, days_skip: usize) -> Self {
        self.days_skip = Some(days_skip);
        self
    }

    /// Fixed codec of the configuration, `None` when detection is requested
    pub fn fixed_encoding(&self) -> Result<Option<TextEncoding>> {
        if self.is_auto_encoding() {
            return Ok(None);
        }
        TextEncoding::from_label(&self.encoding)
            .map(Some)
            .ok_or_else(|| Error::configuration(format!("Unknown text encoding '{}'", self.encoding)))
    }

    fn is_auto_encoding(&self) -> bool {
        self.encoding.trim().eq_ignore_ascii_case("auto")
    }

    /// Check the settings for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.working_dir.exists() {
            return Err(Error::configuration(format!(
                "Working directory does not exist: {}",
                self.working_dir.display()
            )));
        }

        if !self.working_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Working directory is not a directory: {}",
                self.working_dir.display()
            )));
        }

        self.fixed_encoding()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.working_dir, PathBuf::from("."));
        assert_eq!(config.encoding, "auto");
        assert_eq!(config.days_skip, None);
        assert!(config.skip_urban_soils);
        assert_eq!(config.fixed_encoding().unwrap(), None);
    }

    #[test]
    fn test_partial_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "encoding": "utf-8", "days_skip": 365 }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.encoding, "utf-8");
        assert_eq!(config.days_skip, Some(365));
        assert_eq!(config.working_dir, PathBuf::from("."));
        assert_eq!(config.fixed_encoding().unwrap(), Some(TextEncoding::Utf8));
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::from_file(&path), Err(Error::Configuration { .. })));
        assert!(matches!(
            Config::from_file(&temp_dir.path().join("missing.json")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("SWAT_PROCESSOR_WORKING_DIR", "/models/TxtInOut"),
                ("SWAT_PROCESSOR_ENCODING", "latin-1"),
                ("SWAT_PROCESSOR_DAYS_SKIP", "730"),
                ("SWAT_PROCESSOR_REPORTING_PERIOD", "monthly"),
            ]))
            .unwrap();

        assert_eq!(config.working_dir, PathBuf::from("/models/TxtInOut"));
        assert_eq!(config.fixed_encoding().unwrap(), Some(TextEncoding::Latin1));
        assert_eq!(config.days_skip, Some(730));
        assert_eq!(config.reporting_period, Some(ReportingPeriod::Monthly));
    }

    #[test]
    fn test_env_rejects_bad_days() {
        let mut config = Config::default();
        let result = config.apply_env(env(&[("SWAT_PROCESSOR_DAYS_SKIP", "a year")]));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validation() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default().with_working_dir(temp_dir.path());
        assert!(config.validate().is_ok());

        let missing = config.clone().with_working_dir(temp_dir.path().join("missing"));
        assert!(missing.validate().is_err());

        let bad_encoding = config.with_encoding("klingon-8");
        assert!(bad_encoding.validate().is_err());
    }
}
