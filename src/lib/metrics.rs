//! Structured run metrics and TSV output.
//!
//! The `run` command can record one [`RunMetrics`] row per invocation,
//! written as TSV so runs are easy to collect and compare across thread
//! counts and board sizes.

use anyhow::{Context, Result};
use fgoxide::io::DelimFile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A metric type that can be serialized to TSV files.
pub trait Metric: Serialize + for<'de> Deserialize<'de> + Clone + Default {
    /// Human-readable name for this metric type, used in error messages.
    fn metric_name() -> &'static str;
}

/// Summary of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Board width in cells, border included.
    pub width: usize,
    /// Board height in cells, border included.
    pub height: usize,
    /// Number of worker threads used.
    pub threads: usize,
    /// Number of generations simulated.
    pub steps: usize,
    /// Live cells before the first generation.
    pub initial_live_cells: usize,
    /// Live cells after the final generation.
    pub final_live_cells: usize,
    /// Wall-clock simulation time in seconds.
    pub elapsed_secs: f64,
    /// Interior cell updates per second (`steps * interior cells / elapsed`).
    pub cell_updates_per_sec: f64,
}

impl Metric for RunMetrics {
    fn metric_name() -> &'static str {
        "run"
    }
}

/// Write metrics to a TSV file with consistent error handling.
///
/// # Errors
/// Returns an error if the file cannot be created or written to
pub fn write_metrics<P: AsRef<Path>, T: Serialize>(
    path: P,
    metrics: &[T],
    description: &str,
) -> Result<()> {
    let path_ref = path.as_ref();
    DelimFile::default()
        .write_tsv(&path_ref, metrics)
        .with_context(|| format!("Failed to write {} metrics: {}", description, path_ref.display()))
}

/// Write metrics implementing the [`Metric`] trait to a TSV file, using the
/// metric's own name for error messages.
///
/// # Errors
/// Returns an error if the file cannot be created or written to
pub fn write_metrics_auto<P: AsRef<Path>, T: Metric>(path: P, metrics: &[T]) -> Result<()> {
    write_metrics(path, metrics, T::metric_name())
}
