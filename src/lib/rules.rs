//! The Game of Life transition rule.

use crate::board::Board;

/// Relative coordinates of the 8 cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

/// Compute the next state of the cell at `(x, y)` from its 3x3 neighborhood.
///
/// A cell is live in the next generation iff it has exactly 3 live neighbors,
/// or it is currently live and has exactly 2. Neighbors outside the board or
/// on the border read as dead via [`Board::get`], so no edge handling is
/// needed here.
#[must_use]
pub fn next_state(board: &Board, x: usize, y: usize) -> bool {
    let mut live = 0;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let nx = x.wrapping_add_signed(dx);
        let ny = y.wrapping_add_signed(dy);
        if board.get(nx, ny) {
            live += 1;
        }
    }
    live == 3 || (live == 2 && board.get(x, y))
}
