//! Reading SWAT simulation output
//!
//! The output files are read-only fixed-column tables. This module pulls
//! the series of selected outputs for selected areas out of them and
//! reduces those series to statistics.
//!
//! # Architecture
//!
//! - [`layout`] - column spans of `output.rch`, `output.sub` and `output.hru`
//! - [`reader`] - the [`OutputReader`], area sizes and monthly re-binning
//! - [`statistics`] - mean, median and variance after a warm-up skip
//! - [`efficiency`] - observed series, Nash-Sutcliffe and index of agreement
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use swat_processor::app::services::output_reader::{OutputKind, OutputOptions, OutputReader};
//!
//! # fn example() -> swat_processor::Result<()> {
//! let options = OutputOptions::new("/models/TxtInOut");
//! let reader = OutputReader::open(OutputKind::Subbasin, &["WYLD"], &[1, 2, 3], &options)?;
//!
//! let reduced = reader.reduce_sum("WYLD", 365)?;
//! println!("mean water yield: {:.3} m3/s", reduced.statistics.mean);
//! # Ok(())
//! # }
//! ```

pub mod efficiency;
pub mod layout;
pub mod reader;
pub mod statistics;

#[cfg(test)]
pub mod tests;

pub use efficiency::{Efficiency, ObservedSeries, evaluate, index_of_agreement, nash_sutcliffe};
pub use layout::{ColumnSpan, OutputKind};
pub use reader::{OutputOptions, OutputReader, ReducedSeries};
pub use statistics::SeriesStatistics;
