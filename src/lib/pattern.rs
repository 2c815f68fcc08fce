//! Plain-text board format.
//!
//! A pattern is a header line holding `width height`, followed by exactly
//! `height` lines of exactly `width` characters: `1` for a live cell and `0`
//! for a dead one. The one-cell border must be all `0` since border cells are
//! permanently dead.
//!
//! ```text
//! 5 5
//! 00000
//! 00000
//! 01110
//! 00000
//! 00000
//! ```

use crate::board::Board;
use crate::errors::{LifeError, Result};
use std::fs;
use std::path::Path;

/// Parse a board from pattern text.
///
/// # Errors
/// Returns [`LifeError::InvalidPattern`] naming the offending line for any
/// malformed header, wrong row count or width, unexpected character, or live
/// border cell, and [`LifeError::InvalidDimensions`] when the header declares
/// a board too small to hold an interior.
pub fn parse_board(text: &str) -> Result<Board> {
    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| LifeError::InvalidPattern {
        line: 1,
        reason: "empty pattern, expected 'width height' header".to_string(),
    })?;
    let (width, height) = parse_header(header)?;
    let board = Board::new(width, height)?;

    let mut rows_seen = 0;
    for (line_idx, row) in lines.enumerate() {
        // Line numbers are 1-based and the header is line 1.
        let line = line_idx + 2;
        if rows_seen == height {
            if row.trim().is_empty() {
                continue;
            }
            return Err(LifeError::InvalidPattern {
                line,
                reason: format!("expected {height} rows, found more"),
            });
        }
        parse_row(&board, row, rows_seen, line)?;
        rows_seen += 1;
    }
    if rows_seen < height {
        return Err(LifeError::InvalidPattern {
            line: rows_seen + 2,
            reason: format!("expected {height} rows, found {rows_seen}"),
        });
    }
    Ok(board)
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let mut fields = header.split_whitespace();
    let parse_dim = |field: Option<&str>| -> Result<usize> {
        field
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| LifeError::InvalidPattern {
                line: 1,
                reason: format!("header must be 'width height', got '{header}'"),
            })
    };
    let width = parse_dim(fields.next())?;
    let height = parse_dim(fields.next())?;
    if fields.next().is_some() {
        return Err(LifeError::InvalidPattern {
            line: 1,
            reason: format!("header must be 'width height', got '{header}'"),
        });
    }
    Ok((width, height))
}

fn parse_row(board: &Board, row: &str, y: usize, line: usize) -> Result<()> {
    let width = board.width();
    let height = board.height();
    if row.len() != width {
        return Err(LifeError::InvalidPattern {
            line,
            reason: format!("expected {width} cells, found {}", row.len()),
        });
    }
    for (x, cell) in row.bytes().enumerate() {
        let live = match cell {
            b'0' => false,
            b'1' => true,
            other => {
                return Err(LifeError::InvalidPattern {
                    line,
                    reason: format!("unexpected character '{}'", other as char),
                });
            }
        };
        if live {
            let on_border = x == 0 || x == width - 1 || y == 0 || y == height - 1;
            if on_border {
                return Err(LifeError::InvalidPattern {
                    line,
                    reason: "live cell on the border, which is permanently dead".to_string(),
                });
            }
            board.set(x, y, true);
        }
    }
    Ok(())
}

/// Render a board as pattern text; round-trips through [`parse_board`].
#[must_use]
pub fn format_board(board: &Board) -> String {
    let width = board.width();
    let height = board.height();
    let mut out = String::with_capacity((width + 1) * (height + 1));
    out.push_str(&format!("{width} {height}\n"));
    for y in 0..height {
        for x in 0..width {
            out.push(if board.get(x, y) { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

/// Read and parse a pattern file.
///
/// # Errors
/// Returns [`LifeError::Io`] if the file cannot be read, plus any
/// [`parse_board`] error.
pub fn read_board_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let path_ref = path.as_ref();
    let text = fs::read_to_string(path_ref).map_err(|source| LifeError::Io {
        path: path_ref.display().to_string(),
        source,
    })?;
    parse_board(&text)
}

/// Write a board as a pattern file.
///
/// # Errors
/// Returns [`LifeError::Io`] if the file cannot be written.
pub fn write_board_file<P: AsRef<Path>>(path: P, board: &Board) -> Result<()> {
    let path_ref = path.as_ref();
    fs::write(path_ref, format_board(board)).map_err(|source| LifeError::Io {
        path: path_ref.display().to_string(),
        source,
    })
}
