//! Cells and column letters.
//!
//! ## Column ranges
//!
//! | Letter | Range  |
//! |--------|--------|
//! | B      | 1-15   |
//! | I      | 16-30  |
//! | N      | 31-45  |
//! | G      | 46-60  |
//! | O      | 61-75  |

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Highest number in the call pool.
pub const MAX_NUMBER: u8 = 75;

/// Numbers per column range.
pub const NUMBERS_PER_COLUMN: u8 = 15;

/// The number carried by the free cell.
pub const FREE_NUMBER: u8 = 0;

/// A bingo column letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    B,
    I,
    N,
    G,
    O,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; 5] = [Column::B, Column::I, Column::N, Column::G, Column::O];

    /// Column for a 0-based grid index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 0-based grid index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Header letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Column::B => 'B',
            Column::I => 'I',
            Column::N => 'N',
            Column::G => 'G',
            Column::O => 'O',
        }
    }

    /// Inclusive number range this column draws from.
    #[must_use]
    pub fn range(self) -> RangeInclusive<u8> {
        let low = self.index() as u8 * NUMBERS_PER_COLUMN + 1;
        low..=low + NUMBERS_PER_COLUMN - 1
    }

    /// Column a called number belongs to, `None` outside 1..=75.
    #[must_use]
    pub fn for_number(number: u8) -> Option<Self> {
        if number == 0 || number > MAX_NUMBER {
            return None;
        }
        Self::from_index(((number - 1) / NUMBERS_PER_COLUMN) as usize)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Announcer label for a call, e.g. `G-52`.
///
/// ```
/// use rust_bingo::cards::call_label;
///
/// assert_eq!(call_label(52).as_deref(), Some("G-52"));
/// assert_eq!(call_label(0), None);
/// ```
#[must_use]
pub fn call_label(number: u8) -> Option<String> {
    Column::for_number(number).map(|col| format!("{}-{}", col.letter(), number))
}

/// One square on a card.
///
/// `called` tracks the call feed, `marked` tracks the player. The only
/// cell that starts with both set is the free cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    number: u8,
    called: bool,
    marked: bool,
}

impl Cell {
    /// A regular, uncalled, unmarked cell.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self {
            number,
            called: false,
            marked: false,
        }
    }

    /// The free center cell.
    #[must_use]
    pub const fn free() -> Self {
        Self {
            number: FREE_NUMBER,
            called: true,
            marked: true,
        }
    }

    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    #[must_use]
    pub const fn is_called(&self) -> bool {
        self.called
    }

    #[must_use]
    pub const fn is_marked(&self) -> bool {
        self.marked
    }

    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.number == FREE_NUMBER
    }

    pub(crate) fn set_called(&mut self) {
        self.called = true;
    }

    pub(crate) fn set_marked(&mut self) {
        self.marked = true;
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_free() {
            write!(f, "FREE")
        } else {
            write!(f, "{}", self.number)
        }
    }
}
