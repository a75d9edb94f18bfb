//! Straight-line pipeline: locate → parse → filter → aggregate → build → write.
//!
//! Executed exactly once per process invocation. There is no partial-success
//! mode: every step either completes or aborts the run before any output
//! artifact exists.

use std::path::PathBuf;

use crate::core::clock::Clock;
use crate::core::config::Config;
use crate::core::errors::Result;
use crate::loader::discovery::InputLocator;
use crate::loader::model::{self, BandDataset};
use crate::report::builder::Report;
use crate::report::{aggregate, builder, filter, writer};

/// Everything a caller needs to report on a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Dataset file the loader resolved.
    pub input_path: PathBuf,
    /// Report file that was written.
    pub output_path: PathBuf,
    /// The report document itself.
    pub report: Report,
}

/// Build the report document for an already-loaded dataset.
///
/// Split out from [`run`] so callers (and tests) can exercise the compute
/// stage without touching the filesystem.
pub fn generate(dataset: &BandDataset, config: &Config, clock: &dyn Clock) -> Result<Report> {
    let threshold = config.report.rating_threshold;
    let subset = filter::filter_by_rating(&dataset.bands, threshold);
    let stats = aggregate::aggregate(&subset, threshold)?;
    Ok(builder::build_report(&subset, &stats, clock))
}

/// Execute the full single-shot pipeline.
pub fn run(config: &Config, clock: &dyn Clock) -> Result<RunOutcome> {
    let input_path = InputLocator::from_config(&config.input).locate()?;
    let dataset = model::load_dataset(&input_path)?;
    let report = generate(&dataset, config, clock)?;
    let output_path = writer::write_report(
        &report,
        &config.report.output_dir,
        &config.report.prefix,
        clock.today(),
    )?;
    Ok(RunOutcome {
        input_path,
        output_path,
        report,
    })
}
