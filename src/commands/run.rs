//! Simulate generations of a Game of Life pattern.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use parlife_lib::engine::simulate;
use parlife_lib::logging::OperationTimer;
use parlife_lib::metrics::{RunMetrics, write_metrics_auto};
use parlife_lib::pattern::{format_board, read_board_file, write_board_file};
use parlife_lib::validation::{validate_file_exists, validate_thread_count};
use std::path::PathBuf;

use crate::commands::command::Command;

/// Run a Game of Life simulation over a pattern file.
///
/// Reads a plain-text pattern, advances it by the requested number of
/// generations across the requested number of worker threads, and writes the
/// final pattern to a file or stdout.
#[derive(Debug, Parser)]
#[command(
    name = "run",
    about = "Simulate generations of a Game of Life pattern",
    long_about = r#"
Run a Game of Life simulation over a pattern file.

The pattern format is a 'width height' header line followed by height rows of
width characters, '1' for live and '0' for dead. The outermost rows and
columns form a permanently dead border and must be all '0'.

The final board is identical for any thread count; threads only change how the
per-generation work is divided.

Example usage:
  parlife run -i glider.txt -s 100 -o final.txt
  parlife run -i soup.txt -s 5000 -t 8 --metrics run_metrics.txt
"#
)]
pub struct Run {
    /// Input pattern file
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output pattern file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Number of generations to simulate
    #[arg(short = 's', long = "steps")]
    pub steps: usize,

    /// Number of worker threads
    #[arg(short = 't', long = "threads", default_value = "1")]
    pub threads: usize,

    /// Optional output TSV file for run metrics
    #[arg(long = "metrics")]
    pub metrics: Option<PathBuf>,
}

impl Command for Run {
    fn execute(&self) -> Result<()> {
        validate_file_exists(&self.input, "Input pattern")?;
        validate_thread_count(self.threads)?;

        let board = read_board_file(&self.input)
            .with_context(|| format!("Failed to load pattern: {}", self.input.display()))?;
        let initial_live_cells = board.live_cells();
        info!(
            "Loaded {}x{} board with {} live cells",
            board.width(),
            board.height(),
            initial_live_cells
        );

        let timer = OperationTimer::new("Simulating generations");
        simulate(self.threads, &board, self.steps)?;
        let elapsed = timer.elapsed();
        timer.log_completion(self.steps as u64, "generations");

        if let Some(path) = &self.metrics {
            let interior_cells = (board.width() - 2) * (board.height() - 2);
            let elapsed_secs = elapsed.as_secs_f64();
            let metrics = RunMetrics {
                width: board.width(),
                height: board.height(),
                threads: self.threads,
                steps: self.steps,
                initial_live_cells,
                final_live_cells: board.live_cells(),
                elapsed_secs,
                cell_updates_per_sec: if elapsed_secs > 0.0 {
                    (self.steps * interior_cells) as f64 / elapsed_secs
                } else {
                    0.0
                },
            };
            write_metrics_auto(path, &[metrics])?;
            info!("Wrote run metrics: {}", path.display());
        }

        match &self.output {
            Some(path) => {
                write_board_file(path, &board)
                    .with_context(|| format!("Failed to write pattern: {}", path.display()))?;
                info!("Wrote final pattern: {}", path.display());
            }
            None => print!("{}", format_board(&board)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlife_lib::pattern::parse_board;
    use std::fs;
    use tempfile::TempDir;

    const BLINKER: &str = "5 5\n00000\n00000\n01110\n00000\n00000\n";

    #[test]
    fn test_run_writes_stepped_pattern() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("blinker.txt");
        let output = dir.path().join("final.txt");
        fs::write(&input, BLINKER).unwrap();

        let cmd = Run {
            input: input.clone(),
            output: Some(output.clone()),
            steps: 1,
            threads: 2,
            metrics: None,
        };
        cmd.execute().unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let expected = "5 5\n00000\n00100\n00100\n00100\n00000\n";
        assert_eq!(written, expected);
    }

    #[test]
    fn test_run_records_metrics() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("blinker.txt");
        let output = dir.path().join("final.txt");
        let metrics = dir.path().join("metrics.txt");
        fs::write(&input, BLINKER).unwrap();

        let cmd = Run {
            input,
            output: Some(output),
            steps: 2,
            threads: 1,
            metrics: Some(metrics.clone()),
        };
        cmd.execute().unwrap();

        let content = fs::read_to_string(&metrics).unwrap();
        assert!(content.contains("initial_live_cells"));
        assert!(content.lines().count() >= 2, "expected header plus one row");
    }

    #[test]
    fn test_run_rejects_missing_input() {
        let cmd = Run {
            input: PathBuf::from("/nonexistent/pattern.txt"),
            output: None,
            steps: 1,
            threads: 1,
            metrics: None,
        };
        assert!(cmd.execute().is_err());
    }

    #[test]
    fn test_run_output_parses_back() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("blinker.txt");
        let output = dir.path().join("final.txt");
        fs::write(&input, BLINKER).unwrap();

        let cmd =
            Run { input, output: Some(output.clone()), steps: 2, threads: 3, metrics: None };
        cmd.execute().unwrap();

        // Two steps returns the blinker to its original orientation.
        let board = parse_board(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(parse_board(BLINKER).unwrap().snapshot(), board.snapshot());
    }
}
