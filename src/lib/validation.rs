//! Input validation utilities
//!
//! This module provides common validation functions for command-line parameters,
//! board dimensions, and file paths with consistent error messages.
//!
//! All validation functions use structured error types from [`crate::errors`] so
//! failures carry the offending value alongside the reason.

use crate::errors::{LifeError, Result};
use std::path::Path;

/// Smallest legal board dimension: one interior row/column plus the fixed dead
/// border on each side.
pub const MIN_BOARD_DIM: usize = 3;

/// Validate that a worker thread count is usable
///
/// # Arguments
/// * `threads` - Requested number of worker threads
///
/// # Errors
/// Returns an error if `threads` is zero
///
/// # Example
/// ```
/// use parlife_lib::validation::validate_thread_count;
///
/// assert!(validate_thread_count(4).is_ok());
/// assert!(validate_thread_count(0).is_err());
/// ```
pub fn validate_thread_count(threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(LifeError::InvalidParameter {
            parameter: "threads".to_string(),
            reason: "must be >= 1".to_string(),
        });
    }
    Ok(())
}

/// Validate board dimensions
///
/// A board needs at least one interior row and column in addition to the
/// permanently dead one-cell border, so both dimensions must be at least
/// [`MIN_BOARD_DIM`].
///
/// # Arguments
/// * `width` - Board width in cells, border included
/// * `height` - Board height in cells, border included
///
/// # Errors
/// Returns an error if either dimension is below [`MIN_BOARD_DIM`]
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width < MIN_BOARD_DIM {
        return Err(LifeError::InvalidDimensions {
            width,
            height,
            reason: format!("width must be >= {MIN_BOARD_DIM}"),
        });
    }
    if height < MIN_BOARD_DIM {
        return Err(LifeError::InvalidDimensions {
            width,
            height,
            reason: format!("height must be >= {MIN_BOARD_DIM}"),
        });
    }
    Ok(())
}

/// Validate a live-cell density fraction
///
/// # Arguments
/// * `density` - Fraction of interior cells to make live (0.0 to 1.0 inclusive)
///
/// # Errors
/// Returns an error if `density` is outside `[0.0, 1.0]` or not finite
pub fn validate_density(density: f64) -> Result<()> {
    if !density.is_finite() || !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidParameter {
            parameter: "density".to_string(),
            reason: format!("must be between 0.0 and 1.0, got {density}"),
        });
    }
    Ok(())
}

/// Validate that a file exists
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the file (e.g., "Input pattern")
///
/// # Errors
/// Returns an error if the file does not exist
///
/// # Example
/// ```
/// use parlife_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/pattern.txt", "Input pattern");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        return Err(LifeError::InvalidFileFormat {
            file_type: description.to_string(),
            path: path_ref.display().to_string(),
            reason: "File does not exist".to_string(),
        });
    }
    Ok(())
}
