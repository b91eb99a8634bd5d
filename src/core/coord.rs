//! Board lattice coordinates.
//!
//! A `Cell` is an integer point `(x, y)`: `x` indexes the row and `y` the
//! column of the square grid. Cells may lie off the board; transforms and
//! corner candidates routinely produce such points, and only
//! [`Cell::in_bounds`] decides whether a point is on the grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Side length of the Blokus Duo board.
pub const BOARD_SIZE: i16 = 14;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// An integer lattice point, on or off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Whether this point lies on the `BOARD_SIZE` x `BOARD_SIZE` grid.
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        0 <= self.x && self.x < BOARD_SIZE && 0 <= self.y && self.y < BOARD_SIZE
    }

    /// Row-major index into the grid, or `None` when off the board.
    #[inline]
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.in_bounds()
            .then(|| self.x as usize * BOARD_SIZE as usize + self.y as usize)
    }

    /// Inverse of [`Cell::index`].
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            x: (index / BOARD_SIZE as usize) as i16,
            y: (index % BOARD_SIZE as usize) as i16,
        }
    }

    /// On-board edge neighbours.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Cell> {
        EDGE_STEPS.iter().map(move |&step| self + step).filter(|c| c.in_bounds())
    }

    /// On-board corner neighbours.
    pub fn diagonal_neighbors(self) -> impl Iterator<Item = Cell> {
        CORNER_STEPS.iter().map(move |&step| self + step).filter(|c| c.in_bounds())
    }
}

impl Add for Cell {
    type Output = Cell;

    #[inline]
    fn add(self, rhs: Cell) -> Self::Output {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Cell;

    #[inline]
    fn sub(self, rhs: Cell) -> Self::Output {
        Cell::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The 4 edge-sharing steps.
pub const EDGE_STEPS: [Cell; 4] = [
    Cell { x: 1, y: 0 },
    Cell { x: -1, y: 0 },
    Cell { x: 0, y: -1 },
    Cell { x: 0, y: 1 },
];

/// The 4 corner-sharing steps.
pub const CORNER_STEPS: [Cell; 4] = [
    Cell { x: 1, y: 1 },
    Cell { x: -1, y: -1 },
    Cell { x: 1, y: -1 },
    Cell { x: -1, y: 1 },
];
