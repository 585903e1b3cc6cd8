//! Application constants for SWAT processor
//!
//! This module contains the fixed layout constants of the SWAT2012 text
//! files, default values, and the default calibration parameter lists used
//! throughout the SWAT processor application.

// =============================================================================
// Input File Layout
// =============================================================================

/// Column stride between successive horizons of a layered soil parameter
pub const SOIL_LAYER_STRIDE: usize = 12;

/// Extra characters a line must carry beyond a slot before the next
/// stride-offset slot is probed
pub const LAYER_PROBE_GUARD: usize = 3;

/// Header token layout of HRU-level input files (single-space tokenisation
/// of the first line, leading space yields an empty token 0)
pub mod header_tokens {
    /// Token holding `Subbasin:<id>`
    pub const SUBBASIN: usize = 5;

    /// Token holding `Luse:<code>`
    pub const LANDUSE: usize = 7;

    /// Key of the subbasin token, compared without case
    pub const SUBBASIN_KEY: &str = "Subbasin";

    /// Key of the land use token, compared without case
    pub const LANDUSE_KEY: &str = "Luse";

    /// Separator between token key and value
    pub const SEPARATOR: char = ':';
}

/// Land use code of urban HRUs
pub const URBAN_LANDUSE: &str = "URBN";

/// Digits of the zero-padded subbasin number in input file names
pub const SUBBASIN_FILE_DIGITS: usize = 5;

/// Name of the control/index file
pub const CONTROL_FILE_NAME: &str = "file.cio";

// =============================================================================
// Soil Physics
// =============================================================================

/// Particle density of mineral soil (g/cm3) used for saturation volume
pub const PARTICLE_DENSITY: f64 = 2.65;

/// Clay coefficient of the wilting point estimate used for field capacity
pub const CLAY_WILTING_COEFFICIENT: f64 = 0.4;

/// Target sum of clay, silt and sand contents (%)
pub const TEXTURE_TOTAL: f64 = 100.0;

// =============================================================================
// Output File Layout
// =============================================================================

/// First data row (1-indexed) of output.rch, output.sub and output.hru
pub const OUTPUT_FIRST_DATA_ROW: usize = 10;

/// Samples per simulated year in monthly output, the last being the annual summary
pub const MONTHLY_ROWS_PER_YEAR: usize = 12;

/// Conversion of mm/day over km2 into m3/s: area * 1000 / 86400
pub const MM_KM2_PER_DAY_TO_M3_PER_S: f64 = 1000.0 / 86_400.0;

// =============================================================================
// Observed Data
// =============================================================================

/// No-data sentinel of observed series
pub const NO_DATA_SENTINEL: f64 = -9999.0;

/// Field delimiter of observed-data files
pub const OBSERVED_DELIMITER: u8 = b';';

// =============================================================================
// Encodings
// =============================================================================

/// Encoding assumed when detection yields nothing usable
pub const FALLBACK_ENCODING: &str = "latin-1";

/// Detected encoding names that are redirected to the fallback
pub const REDIRECTED_ENCODINGS: &[&str] = &["", "ascii"];

// =============================================================================
// Default Calibration Parameter Lists
// =============================================================================

/// Parameters loaded from file.cio
pub const DEFAULT_CONTROL_PARAMETERS: &[&str] = &["NBYR", "IYR", "IPRINT", "NYSKIP"];

/// Parameters loaded from *.bsn files
pub const DEFAULT_BASIN_PARAMETERS: &[&str] = &[
    "SURLAG", "SFTMP", "SMTMP", "SMFMX", "SMFMN", "SNOCOVMX", "SNO50COV", "TIMP", "ESCO", "EPCO",
];

/// Parameters loaded from *.gw files
pub const DEFAULT_GROUNDWATER_PARAMETERS: &[&str] = &[
    "GW_DELAY", "ALPHA_BF", "GW_REVAP", "GWQMN", "RCHRG_DP", "REVAPMN",
];

/// Parameters loaded from *.sol files
pub const DEFAULT_SOIL_PARAMETERS: &[&str] = &[
    "SOL_K", "SAND", "CLAY", "SOL_CBN", "SOL_BD", "SOL_AWC", "SOL_CRK",
];

/// Parameters loaded from *.hru files
pub const DEFAULT_HRU_PARAMETERS: &[&str] = &[
    "HRU_FR", "ESCO", "EPCO", "OV_N", "CANMX", "SLSUBBSN", "SLSOIL", "LAT_TTIME",
];

/// Parameters loaded from *.rte files
pub const DEFAULT_ROUTING_PARAMETERS: &[&str] = &["CH_N2", "CH_K2", "CH_S2"];

/// Parameters loaded from *.sub files
pub const DEFAULT_SUBBASIN_PARAMETERS: &[&str] = &[
    "SUB_KM", "CH_L1", "CH_S1", "CH_W1", "CH_K1", "CH_N1", "CO2",
];

/// Parameters loaded from *.mgt files
pub const DEFAULT_MANAGEMENT_PARAMETERS: &[&str] = &["CN2"];

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default working directory (SWAT TxtInOut folder)
pub const DEFAULT_WORKING_DIR: &str = ".";

/// Configuration directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "swat-processor";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "SWAT_PROCESSOR_";
