//! Card system: cells, column letters, the 5x5 card and its generator.
//!
//! ## Key Types
//!
//! - `Column`: B/I/N/G/O with their fixed number ranges
//! - `Cell`: number plus called/marked flags
//! - `Card`: column-major 5x5 grid with a free center
//! - `generate_card`: Fisher-Yates per column over an injectable RNG

pub mod card;
pub mod cell;
pub mod generator;

pub use card::{Card, MarkOutcome, FREE_POS, GRID_SIZE};
pub use cell::{call_label, Cell, Column, FREE_NUMBER, MAX_NUMBER, NUMBERS_PER_COLUMN};
pub use generator::{fisher_yates, generate_card};
