//! The 5x5 card.
//!
//! Cells are stored column-major (`cells[col][row]`) because generation,
//! the column letters and the number ranges are all per column.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Column};
use crate::core::{BingoError, Result};

/// Width and height of a card.
pub const GRID_SIZE: usize = 5;

/// Column and row of the free cell.
pub const FREE_POS: (usize, usize) = (2, 2);

/// What a mark request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    /// The cell was called and is now marked.
    Marked,
    /// Already marked, nothing changed.
    AlreadyMarked,
    /// The cell's number has not been called, nothing changed.
    NotCalled,
    /// The session is not accepting marks, nothing changed.
    Inactive,
}

impl MarkOutcome {
    /// Did the request change the card?
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, MarkOutcome::Marked)
    }
}

/// A player's card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Card {
    /// Build a card from column-major numbers.
    ///
    /// The value at the free position is discarded. Callers are responsible
    /// for column ranges; the generator is the only public way in.
    pub(crate) fn from_columns(columns: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut cells = [[Cell::new(0); GRID_SIZE]; GRID_SIZE];
        for (col, numbers) in columns.iter().enumerate() {
            for (row, &number) in numbers.iter().enumerate() {
                cells[col][row] = if (col, row) == FREE_POS {
                    Cell::free()
                } else {
                    Cell::new(number)
                };
            }
        }
        Self { cells }
    }

    /// Look up a cell.
    pub fn cell(&self, col: usize, row: usize) -> Result<&Cell> {
        self.cells
            .get(col)
            .and_then(|c| c.get(row))
            .ok_or(BingoError::OutOfRange { col, row })
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> Result<&mut Cell> {
        self.cells
            .get_mut(col)
            .and_then(|c| c.get_mut(row))
            .ok_or(BingoError::OutOfRange { col, row })
    }

    /// The five numbers of a column in row order (0 for the free cell).
    #[must_use]
    pub fn column_numbers(&self, col: Column) -> [u8; GRID_SIZE] {
        self.cells[col.index()].map(|cell| cell.number())
    }

    /// Iterate over `(col, row, cell)`, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(col, column)| {
            column.iter().enumerate().map(move |(row, cell)| (col, row, cell))
        })
    }

    /// Where a number sits on this card, if anywhere.
    #[must_use]
    pub fn position_of(&self, number: u8) -> Option<(usize, usize)> {
        let col = Column::for_number(number)?.index();
        self.cells[col]
            .iter()
            .position(|cell| !cell.is_free() && cell.number() == number)
            .map(|row| (col, row))
    }

    /// Flag the cell carrying `number` as called.
    ///
    /// Returns its position when the number is on the card. Marking is left
    /// to the player.
    pub fn apply_call(&mut self, number: u8) -> Option<(usize, usize)> {
        let (col, row) = self.position_of(number)?;
        self.cells[col][row].set_called();
        Some((col, row))
    }

    /// Mark a called cell. Idempotent; uncalled cells are left alone.
    pub fn mark(&mut self, col: usize, row: usize) -> Result<MarkOutcome> {
        let cell = self.cell_mut(col, row)?;
        let outcome = if cell.is_marked() {
            MarkOutcome::AlreadyMarked
        } else if !cell.is_called() {
            MarkOutcome::NotCalled
        } else {
            cell.set_marked();
            MarkOutcome::Marked
        };
        Ok(outcome)
    }

    /// Marked state as a column-major matrix.
    #[must_use]
    pub fn marked_matrix(&self) -> [[bool; GRID_SIZE]; GRID_SIZE] {
        self.cells.map(|column| column.map(|cell| cell.is_marked()))
    }

    /// Numbers as a column-major matrix.
    #[must_use]
    pub fn number_matrix(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        self.cells.map(|column| column.map(|cell| cell.number()))
    }

    /// Single-line form for logs: columns separated by `|`.
    #[must_use]
    pub fn compact(&self) -> String {
        Column::ALL
            .iter()
            .map(|&col| {
                let nums: Vec<String> = self.column_numbers(col).iter().map(u8::to_string).collect();
                format!("{}:{}", col.letter(), nums.join(","))
            })
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl std::fmt::Display for Card {
    /// Row-major grid with a letter header. Marked cells carry a `*`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for col in Column::ALL {
            write!(f, "{:>6}", col.letter())?;
        }
        writeln!(f)?;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = &self.cells[col][row];
                let mark = if cell.is_marked() { "*" } else { "" };
                write!(f, "{:>6}", format!("{}{}", cell, mark))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
