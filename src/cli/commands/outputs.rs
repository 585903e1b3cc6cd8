//! `stats` and `efficiency`: reading SWAT output files

use super::shared::{CommandContext, print_json};
use crate::app::models::ReportingPeriod;
use crate::app::services::output_reader::{
    Efficiency, ObservedSeries, OutputKind, OutputOptions, OutputReader, SeriesStatistics,
};
use crate::cli::args::{EfficiencyArgs, StatsArgs};
use crate::Result;
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics of one output, summed or per area
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub file: String,
    pub output: String,
    pub period: ReportingPeriod,
    pub days_skip: usize,
    /// Statistics of the area-weighted flow sum in m3/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summed: Option<SeriesStatistics>,
    /// Statistics of each area's series in the file's own unit
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub areas: BTreeMap<u32, SeriesStatistics>,
    pub area_sizes: BTreeMap<u32, f64>,
    pub warnings: Vec<String>,
}

/// Fit of one simulated series against observations
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyReport {
    pub file: String,
    pub output: String,
    pub area: u32,
    pub observations: usize,
    pub days_skip: usize,
    pub efficiency: Efficiency,
}

fn open_reader(
    context: &CommandContext,
    kind: OutputKind,
    output: &str,
    areas: &[u32],
    period: ReportingPeriod,
) -> Result<OutputReader> {
    let options = OutputOptions::new(&context.config.working_dir)
        .with_period(period)
        .with_encoding(context.encoding);
    OutputReader::open(kind, &[output], areas, &options)
}

pub fn run_stats(context: &CommandContext, args: &StatsArgs) -> Result<()> {
    let report = output_stats(context, args)?;
    if context.is_json() {
        print_json(&report)
    } else {
        print_stats(&report);
        Ok(())
    }
}

pub fn output_stats(context: &CommandContext, args: &StatsArgs) -> Result<StatsReport> {
    let (days_skip, period) = context.output_timing(args.days_skip, args.period)?;
    let reader = open_reader(context, args.kind, &args.output, &args.areas.areas, period)?;

    let summed = if args.sum {
        Some(reader.reduce_sum(&args.output, days_skip)?.statistics)
    } else {
        None
    };

    let mut areas = BTreeMap::new();
    if !args.sum {
        for area in reader.areas() {
            areas.insert(*area, reader.area_statistics(&args.output, *area, days_skip)?);
        }
    }

    Ok(StatsReport {
        file: args.kind.file_name().to_string(),
        output: args.output.trim().to_string(),
        period,
        days_skip,
        summed,
        areas,
        area_sizes: reader.area_sizes().clone(),
        warnings: reader.consistency_warnings().to_vec(),
    })
}

pub fn run_efficiency(context: &CommandContext, args: &EfficiencyArgs) -> Result<()> {
    let report = output_efficiency(context, args)?;
    if context.is_json() {
        print_json(&report)
    } else {
        print_efficiency(&report);
        Ok(())
    }
}

pub fn output_efficiency(context: &CommandContext, args: &EfficiencyArgs) -> Result<EfficiencyReport> {
    args.validate()?;
    let (days_skip, period) = context.output_timing(args.days_skip, args.period)?;
    let reader = open_reader(context, args.kind, &args.output, &[args.area], period)?;

    let observed = ObservedSeries::from_path(&args.observed, args.column, context.encoding)?;
    let efficiency = reader.efficiency(&args.output, args.area, &observed, days_skip)?;

    Ok(EfficiencyReport {
        file: args.kind.file_name().to_string(),
        output: args.output.trim().to_string(),
        area: args.area,
        observations: observed.valid_count(),
        days_skip,
        efficiency,
    })
}

fn print_stats(report: &StatsReport) {
    println!(
        "{} {} ({:?}, {} warm-up samples skipped)",
        report.file.bold().blue(),
        report.output.bold(),
        report.period,
        report.days_skip
    );

    if let Some(summed) = &report.summed {
        println!("  {} (m3/s)", "Sum over areas".bold());
        print_statistics(summed);
    }

    for (area, statistics) in &report.areas {
        let size = report.area_sizes.get(area).copied().unwrap_or(0.0);
        println!("  {} {} ({} km2)", "Area".bold(), area, size);
        print_statistics(statistics);
    }

    for warning in &report.warnings {
        println!("{}", warning.yellow());
    }
}

fn print_statistics(statistics: &SeriesStatistics) {
    println!(
        "    mean {:.6}  median {:.6}  variance {:.6}  ({} samples)",
        statistics.mean, statistics.median, statistics.variance, statistics.samples
    );
}

fn print_efficiency(report: &EfficiencyReport) {
    println!(
        "{} {} of area {} against {} observations",
        report.file.bold().blue(),
        report.output.bold(),
        report.area,
        report.observations
    );

    let nse = report.efficiency.nash_sutcliffe;
    let nse_text = format!("{:.4}", nse);
    let nse_text = if nse >= 0.5 {
        nse_text.green()
    } else if nse >= 0.0 {
        nse_text.yellow()
    } else {
        nse_text.red()
    };

    println!("  Nash-Sutcliffe efficiency: {}", nse_text);
    println!("  Index of agreement:        {:.4}", report.efficiency.index_of_agreement);
    println!("  Pairs compared:            {}", report.efficiency.pairs);
}
