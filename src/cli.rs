use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "codejury-profileqc",
    version,
    about = "Rubric validation and radar-profile geometry for CodeJury evaluation exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate an evaluation export and emit its radar profile.
    Run {
        /// Path to the evaluation export (JSON).
        #[arg(long)]
        input: PathBuf,

        /// Output directory for profile.json, criteria.tsv and report.txt.
        #[arg(long)]
        out: PathBuf,

        /// Report mode; `summary` omits chart geometry from profile.json.
        #[arg(long, value_enum, default_value = "full")]
        mode: ReportModeArg,

        /// Side length of the square chart viewport.
        #[arg(long, default_value_t = 260.0)]
        chart_size: f64,

        /// Margin between the outer ring and the viewport edge.
        #[arg(long, default_value_t = 30.0)]
        chart_margin: f64,

        /// Distance of axis labels beyond the outer ring.
        #[arg(long, default_value_t = 20.0)]
        label_offset: f64,

        /// Number of evenly spaced grid rings.
        #[arg(long, default_value_t = 5)]
        rings: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportModeArg {
    Summary,
    Full,
}
