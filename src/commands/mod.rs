//! CLI command implementations for parlife.
//!
//! Each submodule implements one subcommand:
//!
//! - [`run`] - Simulate generations of a pattern file
//! - [`random`] - Generate a random starting pattern

#![allow(clippy::cast_precision_loss)]

pub mod command;
pub mod random;
pub mod run;
