//! Subcommand implementations

use std::path::Path;

use anyhow::Result;
use clap::Args;
use tracing::info;
use trajsample_curves::{Curve, KinematicState1D};
use trajsample_sampler::{AnySampler, CurveSet, SampleMode, Sampler};

use crate::config::load_config;
use crate::error::CliError;
use crate::output::{self, CurveReport, SamplePoint, SampleReport};

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Sampler configuration (.yaml, .yml or .json)
    #[arg(long, env = "TRAJSAMPLE_CONFIG")]
    pub config: std::path::PathBuf,

    /// Start state as X,DX,DDX
    #[arg(long, value_parser = parse_start, allow_hyphen_values = true)]
    pub start: KinematicState1D,

    /// Build curves on access instead of up front
    #[arg(long)]
    pub lazy: bool,

    /// Evaluation points per curve, spread over its time domain
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: u32,

    /// Print at most this many curves
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Parse `X,DX,DDX` into a start state.
pub fn parse_start(s: &str) -> Result<KinematicState1D, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in start state '{}': {}", s, e))?;
    match parts.as_slice() {
        [x, dx, ddx] => Ok(KinematicState1D::new(*x, *dx, *ddx)),
        _ => Err(format!(
            "start state needs 3 comma-separated values, got {}",
            parts.len()
        )),
    }
}

/// `steps` evenly spaced times from `start` to `end` inclusive.
pub fn sample_times(start: f64, end: f64, steps: u32) -> Vec<f64> {
    if steps <= 1 {
        return vec![start];
    }
    let span = end - start;
    let last = f64::from(steps - 1);
    (0..steps)
        .map(|i| start + span * f64::from(i) / last)
        .collect()
}

fn load_sampler(path: &Path) -> Result<AnySampler, CliError> {
    let config = load_config(path)?;
    let sampler = config.build();
    info!(
        path = %path.display(),
        sampler = sampler.kind(),
        candidates = sampler.candidate_count(),
        "Loaded sampler config"
    );
    Ok(sampler)
}

fn report_curve<C: Curve>(index: usize, curve: &C, steps: u32) -> CurveReport {
    let samples = sample_times(curve.start_time(), curve.end_time(), steps)
        .into_iter()
        .map(|t| SamplePoint {
            t,
            state: curve.state_at(t),
        })
        .collect();
    CurveReport {
        index,
        start_time: curve.start_time(),
        end_time: curve.end_time(),
        samples,
    }
}

pub fn sample(args: &SampleArgs, json: bool) -> Result<()> {
    let sampler = load_sampler(&args.config)?;
    let mode = SampleMode::from(args.lazy);
    let set = sampler.sample(args.start, mode).map_err(CliError::from)?;
    let limit = args.limit.unwrap_or(usize::MAX);

    let curves = match &set {
        CurveSet::Eager(curves) => curves
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, curve)| report_curve(i, curve, args.steps))
            .collect(),
        CurveSet::Lazy(seq) => seq
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, built)| Ok(report_curve(i, &built?, args.steps)))
            .collect::<Result<Vec<_>, CliError>>()?,
    };
    info!(shown = curves.len(), candidates = set.len(), "Sampled curves");

    output::print_sample_report(
        &SampleReport {
            sampler: sampler.kind(),
            mode,
            candidates: set.len(),
            curves,
        },
        json,
    );
    Ok(())
}

pub fn count(config: &Path, json: bool) -> Result<()> {
    let sampler = load_sampler(config)?;
    output::print_count(sampler.kind(), sampler.candidate_count(), json);
    Ok(())
}

pub fn validate(config: &Path, json: bool) -> Result<()> {
    let config_data = load_config(config)?;
    config_data.validate().map_err(CliError::from)?;
    let sampler = config_data.build();
    output::print_validation_ok(sampler.kind(), sampler.candidate_count(), json);
    Ok(())
}
