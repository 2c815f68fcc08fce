#![deny(unsafe_code)]
#![allow(clippy::cast_precision_loss)]

//! # parlife - Parallel Game of Life Library
//!
//! This library computes successive generations of Conway's Game of Life on a
//! fixed-size board with a permanently dead border, distributing each
//! generation across a configurable number of worker threads that synchronize
//! at generation boundaries.
//!
//! ## Overview
//!
//! - **[`board`]** - Double-buffered grid with O(1) buffer promotion
//! - **[`rules`]** - The cell transition rule
//! - **[`partition`]** - Row-band assignment of interior rows to workers
//! - **[`engine`]** - Barrier-synchronized parallel stepping
//! - **[`pattern`]** - Plain-text board reading and writing
//!
//! ### Utilities
//!
//! - **[`validation`]** - Input validation for parameters and files
//! - **[`errors`]** - Structured error types
//! - **[`logging`]** - Formatting helpers and operation timing
//! - **[`metrics`]** - Run metrics and TSV output
//!
//! ## Quick Start
//!
//! ```
//! use parlife_lib::engine::simulate;
//! use parlife_lib::pattern::parse_board;
//!
//! # fn main() -> anyhow::Result<()> {
//! let board = parse_board("5 5\n00000\n00000\n01110\n00000\n00000\n")?;
//! simulate(4, &board, 2)?;
//! assert_eq!(board.live_cells(), 3);
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod partition;
pub mod pattern;
pub mod rules;
pub mod validation;
