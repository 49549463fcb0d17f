//! Python bindings for the rust-bingo engine.
//!
//! Lets a Python shell drive a game and render it.
//!
//! # Quick Start
//!
//! ```python
//! import rust_bingo as bingo
//!
//! session = bingo.BingoSession(bingo.SessionConfig(seed=7))
//! session.start()
//!
//! # Call from your frame loop with the elapsed milliseconds
//! session.advance(3000)
//! print(session.current_call_label)   # e.g. "G-52"
//! print(session.numbers_numpy())      # [5, 5] uint8, 0 = FREE
//!
//! session.mark_cell(3, 1)
//! if session.has_bingo:
//!     session.claim_bingo()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust-bingo: card generation, call sequencing and win bookkeeping.
#[pymodule]
fn rust_bingo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySessionConfig>()?;
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyBingoSession>()?;
    Ok(())
}
