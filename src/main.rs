mod chart;
mod cli;
mod input;
mod logging;
mod model;
mod report;
mod rubric;

use std::path::Path;

use clap::Parser;

use crate::chart::ChartParams;
use crate::cli::{Cli, Command, ReportModeArg};
use crate::model::criteria::RubricCriterion;
use crate::model::geometry::Point;
use crate::report::ReportMode;

fn main() {
    logging::init();
    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            input,
            out,
            mode,
            chart_size,
            chart_margin,
            label_offset,
            rings,
        } => run_profile(
            &input,
            &out,
            mode,
            chart_params(chart_size, chart_margin, label_offset, rings),
        ),
    }
}

fn run_profile(
    input_path: &Path,
    out_dir: &Path,
    mode: ReportModeArg,
    params: ChartParams,
) -> Result<(), String> {
    let bundle = input::load_evaluation(input_path).map_err(|e| e.to_string())?;

    let validation = rubric::validate_criteria(&bundle.criteria);
    for v in &validation.violations {
        tracing::warn!(
            id = %v.id,
            score = v.score,
            "extreme score without justification: {}",
            v.name
        );
    }

    let axes = bundle
        .criteria
        .iter()
        .map(RubricCriterion::axis)
        .collect::<Vec<_>>();
    let geometry = chart::compute_radar_geometry(&axes, &params).map_err(|e| e.to_string())?;

    let summary = report::build_summary(
        &bundle,
        &validation,
        "codejury-profileqc",
        env!("CARGO_PKG_VERSION"),
    );
    report::write_reports(&summary, &geometry, out_dir, report_mode(mode))
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Center and radius from the square viewport, matching the mobile client's
/// layout: center at size/2, outer ring inset by the margin.
fn chart_params(size: f64, margin: f64, label_offset: f64, rings: usize) -> ChartParams {
    let center = Point::new(size / 2.0, size / 2.0);
    let mut params = ChartParams::new(center, size / 2.0 - margin).with_ring_count(rings);
    params.label_offset = label_offset;
    params
}

fn report_mode(arg: ReportModeArg) -> ReportMode {
    match arg {
        ReportModeArg::Summary => ReportMode::Summary,
        ReportModeArg::Full => ReportMode::Full,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
