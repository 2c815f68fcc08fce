//! Double-buffered board of cell states.
//!
//! A [`Board`] is a fixed-size 2D grid of boolean cells with a one-cell border
//! that is permanently dead: the border is never written and always reads as
//! dead, which lets the rule evaluator examine 3x3 neighborhoods without any
//! edge special-casing.
//!
//! The board owns two equally-sized storage buffers and an index saying which
//! one is currently the front (readable) buffer. A generation is computed by
//! writing next states into the back buffer with [`Board::set_next`] and then
//! promoting it with [`Board::swap`], which flips the index in O(1) rather
//! than copying cells.
//!
//! Cells are `AtomicBool` so a board can be shared by plain reference across
//! worker threads. All atomic accesses are `Relaxed`: the engine's barrier
//! protocol (see [`crate::engine`]) supplies every ordering the simulation
//! needs, and within a phase no two writers ever touch the same cell.

use crate::errors::{LifeError, Result};
use crate::validation::validate_dimensions;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Fixed-size double-buffered grid of cells with a permanently dead border.
#[derive(Debug)]
pub struct Board {
    width: usize,
    height: usize,
    buffers: [Box<[AtomicBool]>; 2],
    /// Index of the front buffer (0 or 1); the other buffer is the back.
    front: AtomicUsize,
}

impl Board {
    /// Create an all-dead board.
    ///
    /// # Errors
    /// Returns an error if either dimension is below
    /// [`crate::validation::MIN_BOARD_DIM`], since a board must hold at least
    /// one interior cell inside its border, or if `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        let cells = width.checked_mul(height).ok_or_else(|| LifeError::InvalidDimensions {
            width,
            height,
            reason: "board size overflows usize".to_string(),
        })?;
        let alloc = || (0..cells).map(|_| AtomicBool::new(false)).collect::<Box<[AtomicBool]>>();
        Ok(Self { width, height, buffers: [alloc(), alloc()], front: AtomicUsize::new(0) })
    }

    /// Board width in cells, border included.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells, border included.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies strictly inside the border.
    #[must_use]
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && x < self.width - 1 && y >= 1 && y < self.height - 1
    }

    fn front_idx(&self) -> usize {
        self.front.load(Ordering::Relaxed)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Read a cell from the front buffer.
    ///
    /// Coordinates outside the board read as dead rather than failing, and
    /// border cells are dead by construction, so callers may probe any
    /// neighborhood without bounds checks of their own.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.buffers[self.front_idx()][self.index(x, y)].load(Ordering::Relaxed)
    }

    /// Write a cell in the front buffer.
    ///
    /// Used to populate the initial state. Border and out-of-range writes are
    /// a caller bug; they are rejected (ignored) so the border stays dead.
    pub fn set(&self, x: usize, y: usize, value: bool) {
        debug_assert!(self.is_interior(x, y), "set({x}, {y}) outside interior");
        if self.is_interior(x, y) {
            self.buffers[self.front_idx()][self.index(x, y)].store(value, Ordering::Relaxed);
        }
    }

    /// Write a cell in the back buffer, where the next generation is built.
    ///
    /// Same interior-only contract as [`Board::set`].
    pub fn set_next(&self, x: usize, y: usize, value: bool) {
        debug_assert!(self.is_interior(x, y), "set_next({x}, {y}) outside interior");
        if self.is_interior(x, y) {
            self.buffers[self.front_idx() ^ 1][self.index(x, y)].store(value, Ordering::Relaxed);
        }
    }

    /// Promote the back buffer to front in O(1).
    ///
    /// Must be called exactly once per generation, and only after every worker
    /// has finished reading the old front and writing the new back. The engine
    /// enforces this with its double-barrier protocol; the designated leader
    /// worker is the sole caller.
    pub fn swap(&self) {
        self.front.fetch_xor(1, Ordering::Relaxed);
    }

    /// Number of live cells in the front buffer.
    #[must_use]
    pub fn live_cells(&self) -> usize {
        self.buffers[self.front_idx()].iter().filter(|cell| cell.load(Ordering::Relaxed)).count()
    }

    /// Copy of the front buffer in row-major order, for comparisons.
    #[must_use]
    pub fn snapshot(&self) -> Vec<bool> {
        self.buffers[self.front_idx()].iter().map(|cell| cell.load(Ordering::Relaxed)).collect()
    }
}
