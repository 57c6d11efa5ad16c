// Board geometry: linear cell index <-> (row, col)
//
// The board is always square (one "board size" setting drives both dimensions).
// `to_matrix` divides by `rows` while `to_index` multiplies by `cols`; the pair is only an
// exact inverse when rows == cols.

use crate::types::{Cell, Direction};

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub rows: i32,
    pub cols: i32,
}

impl Board {
    pub fn new(rows: i32, cols: i32) -> Self {
        Board { rows, cols }
    }

    /// Square board with `size` rows and columns
    pub fn square(size: i32) -> Self {
        Board { rows: size, cols: size }
    }

    pub fn cell_count(&self) -> i32 {
        self.rows * self.cols
    }

    /// The goal cell
    pub fn last_cell(&self) -> Cell {
        self.cell_count() - 1
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell >= 0 && cell < self.cell_count()
    }

    /// Index -> (row, col). Square-board formula, see module docs.
    #[inline]
    pub fn to_matrix(&self, index: Cell) -> (i32, i32) {
        (index / self.rows, index % self.cols)
    }

    /// (row, col) -> index
    #[inline]
    pub fn to_index(&self, row: i32, col: i32) -> Cell {
        row * self.cols + col
    }

    /// Manhattan distance between two cells in matrix coordinates
    #[inline]
    pub fn manhattan(&self, a: Cell, b: Cell) -> i32 {
        let (ra, ca) = self.to_matrix(a);
        let (rb, cb) = self.to_matrix(b);
        (ra - rb).abs() + (ca - cb).abs()
    }

    /// Cell reached by moving one step in `dir`, or None when it leaves the board
    pub fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (row, col) = self.to_matrix(cell);
        let (dr, dc) = dir.delta();
        let (nr, nc) = (row + dr, col + dc);
        if nr < 0 || nr >= self.rows || nc < 0 || nc >= self.cols {
            return None;
        }
        Some(self.to_index(nr, nc))
    }
}
