//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{BingoError, OpponentConfig, Player, SessionConfig};

impl From<BingoError> for PyErr {
    fn from(err: BingoError) -> Self {
        match err {
            BingoError::OutOfRange { .. } => PyIndexError::new_err(err.to_string()),
            BingoError::InvalidConfig(_) | BingoError::Serialization(_) => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// Python wrapper for SessionConfig.
#[pyclass(name = "SessionConfig")]
#[derive(Clone, Debug)]
pub struct PySessionConfig(pub SessionConfig);

#[pymethods]
impl PySessionConfig {
    /// Create a configuration.
    ///
    /// # Arguments
    /// - seed: RNG seed for the card and the call order
    /// - call_interval_ms: Milliseconds between calls
    /// - clock_interval_ms: Game clock step
    /// - player_name: Local player's display name
    #[new]
    #[pyo3(signature = (
        seed = 42,
        call_interval_ms = 3000,
        clock_interval_ms = 1000,
        player_name = "You".to_string()
    ))]
    fn new(seed: u64, call_interval_ms: u32, clock_interval_ms: u32, player_name: String) -> Self {
        Self(
            SessionConfig::new()
                .with_seed(seed)
                .with_call_interval_ms(call_interval_ms)
                .with_clock_interval_ms(clock_interval_ms)
                .with_local_player(player_name),
        )
    }

    /// Replace the opponent seats with (name, lines_completed) pairs.
    fn set_opponents(&mut self, opponents: Vec<(String, u32)>) {
        self.0.opponents = opponents
            .into_iter()
            .map(|(name, lines)| OpponentConfig::new(name, lines))
            .collect();
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn call_interval_ms(&self) -> u32 {
        self.0.call_interval_ms
    }

    fn __repr__(&self) -> String {
        format!(
            "SessionConfig(seed={}, call_interval_ms={}, opponents={})",
            self.0.seed,
            self.0.call_interval_ms,
            self.0.opponents.len()
        )
    }
}

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    #[getter]
    fn id(&self) -> u8 {
        self.0.id.0
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn lines_completed(&self) -> u32 {
        self.0.lines_completed
    }

    #[getter]
    fn is_winner(&self) -> bool {
        self.0.is_winner
    }

    fn __repr__(&self) -> String {
        format!(
            "Player(name={:?}, lines={}, winner={})",
            self.0.name, self.0.lines_completed, self.0.is_winner
        )
    }
}
