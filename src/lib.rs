//! SWAT Processor Library
//!
//! A Rust library for editing the fixed-column text input files of the SWAT
//! hydrological model and for reading its simulation output files.
//!
//! This library provides tools for:
//! - Addressing model parameters by (line, column span, decimals) coordinates
//!   declared in static per-file-kind registries
//! - Editing those fields while reproducing every untouched byte of the file
//! - Deriving soil profile properties and HRU areas from loaded values
//! - Extracting per-area output time series and reducing them to statistics
//! - Scoring simulated series against observations (Nash-Sutcliffe, agreement)

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_accessor;
        pub mod field_registry;
        pub mod file_manipulator;
        pub mod model_inventory;
        pub mod output_reader;
        pub mod parameter_change;
        pub mod record_buffer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChangeMode, FileKind, ReportingPeriod};
pub use app::services::field_registry::{FieldDescriptor, FieldLocation, Parameter};
pub use app::services::file_manipulator::{FileManipulator, ManipulatorOptions};
pub use app::services::model_inventory::{ModelInventory, SimulationPeriod};
pub use app::services::output_reader::{OutputKind, OutputReader};
pub use app::services::parameter_change::ParameterChange;
pub use app::services::record_buffer::{Document, TextEncoding};
pub use config::Config;

/// Result type alias for the SWAT processor
pub type Result<T> = std::result::Result<T, Error>;

/// A single field that failed to parse during a load
#[derive(Debug, Clone, PartialEq)]
pub struct FieldParseFailure {
    pub parameter: String,
    pub line: usize,
    pub col_start: usize,
    pub col_end: usize,
    pub text: String,
}

impl std::fmt::Display for FieldParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {} columns {}..{}: '{}'",
            self.parameter, self.line, self.col_start, self.col_end, self.text
        )
    }
}

fn join_failures(failures: &[FieldParseFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error types for SWAT file editing and output reading
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File bytes are not valid under the chosen text encoding
    #[error("Decode error in file '{file}': bytes are not valid {encoding}")]
    Decode { file: String, encoding: String },

    /// Edited text cannot be represented in the chosen text encoding
    #[error("Encode error in file '{file}': text is not representable as {encoding}")]
    Encode { file: String, encoding: String },

    /// Parameter name is not registered for the file kind
    #[error("Unknown parameter '{name}' for {kind} files")]
    UnknownParameter { kind: String, name: String },

    /// Line or occurrence outside the loaded document
    #[error("Out of range: {message}")]
    OutOfRange { message: String },

    /// Header line does not match the expected token layout
    #[error("Header parsing failed for file '{file}': {message}")]
    HeaderParse { file: String, message: String },

    /// One or more declared fields are not valid numeric literals
    #[error("Field parsing failed in {kind} file '{file}': {}", join_failures(.failures))]
    FieldParse {
        kind: String,
        file: String,
        failures: Vec<FieldParseFailure>,
    },

    /// Formatted value is wider than its slot
    #[error("Format overflow at line {line} columns {col_start}..{col_end}: '{text}' is wider than {width} characters")]
    FormatOverflow {
        line: usize,
        col_start: usize,
        col_end: usize,
        width: usize,
        text: String,
    },

    /// Statistic computed over series of unequal length
    #[error("Shape mismatch in {context}: expected {expected} samples, found {found}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    /// No samples remain to compute a statistic over
    #[error("Empty series: {context}")]
    EmptySeries { context: String },

    /// Observed-data CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error
    pub fn decode(file: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self::Decode {
            file: file.into(),
            encoding: encoding.into(),
        }
    }

    /// Create an encode error
    pub fn encode(file: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self::Encode {
            file: file.into(),
            encoding: encoding.into(),
        }
    }

    /// Create an unknown parameter error
    pub fn unknown_parameter(kind: impl std::fmt::Display, name: impl Into<String>) -> Self {
        Self::UnknownParameter {
            kind: kind.to_string(),
            name: name.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Create a header parsing error
    pub fn header_parse(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HeaderParse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Create an empty series error
    pub fn empty_series(context: impl Into<String>) -> Self {
        Self::EmptySeries {
            context: context.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
