//! Session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::calls::{TickOutcome, RECENT_CALLS};
use crate::cards::{MarkOutcome, GRID_SIZE};
use crate::session::{BingoSession, SessionSnapshot};

use super::py_core::{PyPlayer, PySessionConfig};

/// Python wrapper for BingoSession.
///
/// The shell owns the frame loop and calls `advance` with elapsed
/// milliseconds; nothing runs in the background.
#[pyclass(name = "BingoSession")]
pub struct PyBingoSession {
    inner: BingoSession,
}

fn mark_outcome_name(outcome: MarkOutcome) -> &'static str {
    match outcome {
        MarkOutcome::Marked => "marked",
        MarkOutcome::AlreadyMarked => "already_marked",
        MarkOutcome::NotCalled => "not_called",
        MarkOutcome::Inactive => "inactive",
    }
}

/// Row-major `[5, 5]` array from a column-major matrix.
fn grid_numpy<'py, T: numpy::Element + Copy>(
    py: Python<'py>,
    columns: [[T; GRID_SIZE]; GRID_SIZE],
) -> PyResult<Bound<'py, PyArray2<T>>> {
    let mut flat = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for row in 0..GRID_SIZE {
        for column in &columns {
            flat.push(column[row]);
        }
    }
    PyArray1::from_vec_bound(py, flat)
        .reshape([GRID_SIZE, GRID_SIZE])
        .map_err(|e| PyValueError::new_err(format!("{}", e)))
}

#[pymethods]
impl PyBingoSession {
    /// Create a session. Uses default settings when no config is given.
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PySessionConfig>) -> PyResult<Self> {
        let config = config.map(|c| c.0).unwrap_or_default();
        Ok(Self {
            inner: BingoSession::new(config)?,
        })
    }

    /// Start calling numbers. Returns False if already started.
    fn start(&mut self) -> bool {
        self.inner.start()
    }

    /// Stop the game and cancel both timers.
    fn stop(&mut self) {
        self.inner.stop();
    }

    /// Feed elapsed milliseconds. Returns how many calls were made.
    fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.inner.advance(elapsed_ms)
    }

    /// Make one call now. Returns the number, or None if nothing was called.
    fn tick_call(&mut self) -> Option<u8> {
        match self.inner.tick_call() {
            TickOutcome::Called(number) => Some(number),
            TickOutcome::Exhausted | TickOutcome::Inactive => None,
        }
    }

    /// Mark a cell. Returns "marked", "already_marked", "not_called" or
    /// "inactive"; raises IndexError for positions off the card.
    fn mark_cell(&mut self, col: usize, row: usize) -> PyResult<&'static str> {
        Ok(mark_outcome_name(self.inner.mark_cell(col, row)?))
    }

    /// Call BINGO. Returns True if the claim was accepted.
    fn claim_bingo(&mut self) -> bool {
        self.inner.claim_bingo().is_accepted()
    }

    /// Sequencer state: "idle", "running" or "exhausted".
    #[getter]
    fn state(&self) -> String {
        self.inner.state().to_string()
    }

    #[getter]
    fn current_call(&self) -> Option<u8> {
        self.inner.current_call()
    }

    #[getter]
    fn current_call_label(&self) -> Option<String> {
        self.inner.current_call_label()
    }

    /// All calls, oldest first.
    #[getter]
    fn calls(&self) -> Vec<u8> {
        self.inner.history().iter().collect()
    }

    /// The recent-calls feed, newest first.
    fn recent_calls(&self) -> Vec<u8> {
        self.inner.history().recent(RECENT_CALLS)
    }

    #[getter]
    fn elapsed(&self) -> String {
        self.inner.elapsed_display()
    }

    #[getter]
    fn has_bingo(&self) -> bool {
        self.inner.has_bingo()
    }

    /// Completed lines, e.g. ["row 2", "diagonal"].
    fn completed_lines(&self) -> Vec<String> {
        self.inner.completed_lines().iter().map(ToString::to_string).collect()
    }

    fn players(&self) -> Vec<PyPlayer> {
        self.inner
            .players()
            .as_slice()
            .iter()
            .cloned()
            .map(PyPlayer)
            .collect()
    }

    /// Card numbers as a [row, col] uint8 array (0 is the free cell).
    fn numbers_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        grid_numpy(py, self.inner.card().number_matrix())
    }

    /// Marked state as a [row, col] bool array.
    fn marked_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<bool>>> {
        grid_numpy(py, self.inner.card().marked_matrix())
    }

    /// Event kinds recorded since the last call.
    fn drain_events(&mut self) -> Vec<&'static str> {
        self.inner.drain_events().iter().map(|e| e.kind()).collect()
    }

    /// Encoded snapshot for a shell in another process.
    fn snapshot_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.inner.snapshot().to_bytes()?)
    }

    /// Number of calls in an encoded snapshot.
    #[staticmethod]
    fn snapshot_call_count(bytes: Vec<u8>) -> PyResult<usize> {
        Ok(SessionSnapshot::from_bytes(&bytes)?.called_count())
    }

    fn __repr__(&self) -> String {
        format!(
            "BingoSession(state={}, called={}/75, elapsed={})",
            self.inner.state(),
            self.inner.history().len(),
            self.inner.elapsed_display()
        )
    }

    fn __str__(&self) -> String {
        self.inner.card().to_string()
    }
}
