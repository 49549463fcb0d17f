//! Line detection over the marked matrix.
//!
//! A line is five marked cells in a row, a column, the main diagonal
//! (top-left to bottom-right) or the anti-diagonal. A card can hold at most
//! twelve lines at once.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::GRID_SIZE;

/// Column-major marked state, as produced by `Card::marked_matrix`.
pub type MarkedMatrix = [[bool; GRID_SIZE]; GRID_SIZE];

/// A completed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Line {
    Row(u8),
    Column(u8),
    Diagonal,
    AntiDiagonal,
}

impl Line {
    /// Every possible line on a card.
    pub fn all() -> impl Iterator<Item = Line> {
        let rows = (0..GRID_SIZE as u8).map(Line::Row);
        let cols = (0..GRID_SIZE as u8).map(Line::Column);
        rows.chain(cols).chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// The `(col, row)` positions this line covers.
    #[must_use]
    pub fn positions(self) -> [(usize, usize); GRID_SIZE] {
        let mut out = [(0, 0); GRID_SIZE];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = match self {
                Line::Row(r) => (i, r as usize),
                Line::Column(c) => (c as usize, i),
                Line::Diagonal => (i, i),
                Line::AntiDiagonal => (GRID_SIZE - 1 - i, i),
            };
        }
        out
    }

    /// Is every cell of this line marked?
    #[must_use]
    pub fn is_complete(self, marked: &MarkedMatrix) -> bool {
        self.positions().iter().all(|&(col, row)| marked[col][row])
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r),
            Line::Column(c) => write!(f, "column {}", c),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// All completed lines, rows first, then columns, then diagonals.
#[must_use]
pub fn completed_lines(marked: &MarkedMatrix) -> SmallVec<[Line; 12]> {
    Line::all().filter(|line| line.is_complete(marked)).collect()
}

/// Does the matrix contain at least one completed line?
#[must_use]
pub fn has_bingo(marked: &MarkedMatrix) -> bool {
    Line::all().any(|line| line.is_complete(marked))
}
