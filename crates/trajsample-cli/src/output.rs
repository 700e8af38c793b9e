//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde::Serialize;
use serde_json::json;
use trajsample_curves::KinematicState1D;
use trajsample_sampler::SampleMode;

/// One evaluated point of a curve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SamplePoint {
    pub t: f64,
    #[serde(flatten)]
    pub state: KinematicState1D,
}

/// A sampled curve and its evaluations.
#[derive(Debug, Clone, Serialize)]
pub struct CurveReport {
    pub index: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub samples: Vec<SamplePoint>,
}

/// Everything `sample` prints.
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub sampler: &'static str,
    pub mode: SampleMode,
    pub candidates: usize,
    pub curves: Vec<CurveReport>,
}

fn print_json(value: &serde_json::Value, what: &str) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format {} as JSON: {}", what, e),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error, exit_code: u8) {
    print_json(
        &json!({
            "success": false,
            "error": {
                "message": error.to_string(),
                "exit_code": exit_code
            }
        }),
        "error",
    );
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print sampled curves
pub fn print_sample_report(report: &SampleReport, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "report": report
            }),
            "sample report",
        );
        return;
    }

    println!(
        "{} {} ({:?}, {} candidates, showing {})",
        "Sampler:".bold(),
        report.sampler,
        report.mode,
        report.candidates,
        report.curves.len()
    );
    for curve in &report.curves {
        println!(
            "  {} t in [{:.3}, {:.3}]",
            format!("#{}", curve.index).cyan(),
            curve.start_time,
            curve.end_time
        );
        for point in &curve.samples {
            println!(
                "    t={:>8.3}  x={:>12.6}  dx={:>12.6}  ddx={:>12.6}",
                point.t,
                point.state.value,
                point.state.first_derivative,
                point.state.second_derivative
            );
        }
    }
}

/// Print the candidate count
pub fn print_count(sampler: &str, count: usize, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "sampler": sampler,
                "candidates": count
            }),
            "count",
        );
    } else {
        println!("{}", count);
    }
}

/// Print a successful validation
pub fn print_validation_ok(sampler: &str, count: usize, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "sampler": sampler,
                "candidates": count,
                "valid": true
            }),
            "validation result",
        );
    } else {
        println!(
            "{} {} configuration is valid ({} candidates)",
            "✓".green(),
            sampler,
            count
        );
    }
}
