// src/reporting.rs
//! Renders query results to the terminal or as JSON.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Result of a term-pair relatedness query.
#[derive(Debug, Clone, Serialize)]
pub struct RelateReport {
    pub term_a: String,
    pub term_b: String,
    pub distance: usize,
    pub ancestor: String,
}

/// Result of an outcast selection.
#[derive(Debug, Clone, Serialize)]
pub struct OutcastReport {
    pub terms: Vec<String>,
    pub outcast: String,
}

/// Result of a raw vertex-pair query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub v: usize,
    pub w: usize,
    pub length: usize,
    pub ancestor: usize,
}

/// Prints a relatedness result in the requested format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_relate(report: &RelateReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Terminal => {
            println!(
                "{} {} {}",
                report.term_a.cyan(),
                "<->".dimmed(),
                report.term_b.cyan()
            );
            println!(
                "  {} {}",
                "distance:".dimmed(),
                report.distance.to_string().green().bold()
            );
            println!("  {} {}", "ancestor:".dimmed(), report.ancestor.yellow());
            Ok(())
        }
    }
}

/// Prints an outcast result in the requested format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_outcast(report: &OutcastReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Terminal => {
            println!("{} {}", "outcast:".dimmed(), report.outcast.red().bold());
            Ok(())
        }
    }
}

/// Prints a raw vertex query result in the requested format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_query(report: &QueryReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Terminal => {
            println!("length = {}, ancestor = {}", report.length, report.ancestor);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
