//! Generate a random Game of Life starting pattern.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use parlife_lib::board::Board;
use parlife_lib::pattern::{format_board, write_board_file};
use parlife_lib::validation::{validate_density, validate_dimensions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use crate::commands::command::Command;

/// Generate a random starting pattern.
///
/// Fills the board interior with live cells at the requested density and
/// writes the result as a pattern file, for seeding runs and benchmarks.
#[derive(Debug, Parser)]
#[command(
    name = "random",
    about = "Generate a random Game of Life starting pattern",
    long_about = r#"
Generate a random starting pattern.

Each interior cell is made live independently with probability --density; the
border is left dead as required by the pattern format. Pass --seed to make the
pattern reproducible.

Example usage:
  parlife random -W 200 -H 200 -d 0.3 -o soup.txt
  parlife random -W 64 -H 64 -d 0.5 --seed 42 -o soup.txt
"#
)]
pub struct Random {
    /// Board width in cells, border included
    #[arg(short = 'W', long = "width")]
    pub width: usize,

    /// Board height in cells, border included
    #[arg(short = 'H', long = "height")]
    pub height: usize,

    /// Probability that an interior cell starts live (0.0 to 1.0)
    #[arg(short = 'd', long = "density", default_value = "0.25")]
    pub density: f64,

    /// Random seed for reproducibility
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Output pattern file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl Command for Random {
    fn execute(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        validate_density(self.density)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::new(self.width, self.height)?;
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                if rng.gen_bool(self.density) {
                    board.set(x, y, true);
                }
            }
        }
        info!(
            "Generated {}x{} board with {} live cells (density {})",
            self.width,
            self.height,
            board.live_cells(),
            self.density
        );

        match &self.output {
            Some(path) => {
                write_board_file(path, &board)
                    .with_context(|| format!("Failed to write pattern: {}", path.display()))?;
                info!("Wrote pattern: {}", path.display());
            }
            None => print!("{}", format_board(&board)),
        }
        Ok(())
    }
}
