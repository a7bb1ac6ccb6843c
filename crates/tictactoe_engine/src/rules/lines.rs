//! Enumeration of candidate winning lines.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Direction a line runs in, listed in checking order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Top-right to bottom-left.
    DiagonalUp,
}

impl Direction {
    /// Index of the `step`-th cell of a line starting at `(row, col)`.
    fn cell(self, size: usize, row: usize, col: usize, step: usize) -> usize {
        match self {
            Direction::Horizontal => row * size + col + step,
            Direction::Vertical => (row + step) * size + col,
            Direction::DiagonalDown => (row + step) * size + col + step,
            Direction::DiagonalUp => (row + step) * size + col - step,
        }
    }

    /// Start cells `(row, col)` of every line of `run_length` in this direction.
    ///
    /// Vertical lines go column by column; the other families go row by row.
    fn starts(self, size: usize, run_length: usize) -> Vec<(usize, usize)> {
        let span = if run_length == 0 || run_length > size {
            0
        } else {
            size - run_length + 1
        };
        match self {
            Direction::Horizontal => grid(0..size, 0..span),
            Direction::Vertical => grid(0..size, 0..span)
                .into_iter()
                .map(|(col, row)| (row, col))
                .collect(),
            Direction::DiagonalDown => grid(0..span, 0..span),
            Direction::DiagonalUp => {
                let first = run_length.saturating_sub(1);
                grid(0..span, first..first + span)
            }
        }
    }
}

/// Cartesian product with the outer range varying slowest.
fn grid(outer: Range<usize>, inner: Range<usize>) -> Vec<(usize, usize)> {
    outer
        .flat_map(|a| inner.clone().map(move |b| (a, b)))
        .collect()
}

/// A run of `K` contiguous, collinear cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    direction: Direction,
    cells: Vec<usize>,
}

impl WinLine {
    fn new(direction: Direction, size: usize, run_length: usize, row: usize, col: usize) -> Self {
        let cells = (0..run_length)
            .map(|step| direction.cell(size, row, col, step))
            .collect();
        Self { direction, cells }
    }

    /// Direction the line runs in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell indices from the line's start to its end.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Number of cells on the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-length line.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Every line of `run_length` cells on a `size * size` board.
///
/// Yields horizontal lines first, then vertical, then the two diagonal
/// families. Vertical lines are ordered by column, then start row; every
/// other family by start row, then column. Nothing is yielded when the run
/// does not fit.
#[instrument]
pub fn candidate_lines(size: usize, run_length: usize) -> impl Iterator<Item = WinLine> {
    Direction::iter().flat_map(move |direction| {
        direction
            .starts(size, run_length)
            .into_iter()
            .map(move |(row, col)| WinLine::new(direction, size, run_length, row, col))
    })
}
