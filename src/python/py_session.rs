//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::{BoardConfig, SessionConfig};
use crate::session::{run_session, SessionReport, SessionRunner};

/// Python wrapper for SessionConfig.
#[pyclass(name = "SessionConfig")]
#[derive(Clone)]
pub struct PySessionConfig(pub SessionConfig);

#[pymethods]
impl PySessionConfig {
    /// Create a new session configuration.
    ///
    /// # Arguments
    /// - rounds: Number of rounds to play (default: 5)
    /// - target_row: Deepest row played before cashing out (default: 5)
    /// - stake: Stake placed every round (default: 50.0)
    /// - rows / columns: Board shape (default: 10 x 5)
    /// - seed: RNG seed; None seeds from the OS
    #[new]
    #[pyo3(signature = (
        rounds = 5,
        target_row = 5,
        stake = 50.0,
        rows = 10,
        columns = 5,
        seed = None
    ))]
    fn new(rounds: u32, target_row: u8, stake: f64, rows: u8, columns: u8, seed: Option<u64>) -> Self {
        let mut config =
            SessionConfig::new(rounds, target_row, stake).with_board(BoardConfig::new(rows, columns));
        config.seed = seed;
        Self(config)
    }

    #[getter]
    fn rounds(&self) -> u32 {
        self.0.round_count
    }

    #[getter]
    fn target_row(&self) -> u8 {
        self.0.target_row
    }

    #[getter]
    fn stake(&self) -> f64 {
        self.0.base_stake
    }

    /// Check the configuration, raising ValueError if it is invalid.
    fn validate(&self) -> PyResult<()> {
        Ok(self.0.validate()?)
    }

    /// Run the session and return its report.
    fn run(&self) -> PyResult<PySessionReport> {
        let report = SessionRunner::new(self.0.clone()).run()?;
        Ok(PySessionReport(report))
    }

    fn __repr__(&self) -> String {
        format!(
            "SessionConfig(rounds={}, target_row={}, stake={})",
            self.0.round_count, self.0.target_row, self.0.base_stake
        )
    }
}

/// Python wrapper for SessionReport.
#[pyclass(name = "SessionReport")]
#[derive(Clone)]
pub struct PySessionReport(pub SessionReport);

#[pymethods]
impl PySessionReport {
    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn total_net_profit(&self) -> f64 {
        self.0.total_net_profit
    }

    #[getter]
    fn rows_played(&self) -> u64 {
        self.0.stats.rows_played
    }

    #[getter]
    fn avg_round_net(&self) -> f64 {
        self.0.stats.avg_round_net()
    }

    #[getter]
    fn return_on_stake(&self) -> f64 {
        self.0.stats.return_on_stake()
    }

    /// Payout of each round, in play order.
    fn payouts(&self) -> Vec<f64> {
        self.0.rounds.iter().map(|r| r.payout).collect()
    }

    /// Selected positions of each round, in play order.
    fn positions(&self) -> Vec<Vec<u8>> {
        self.0
            .rounds
            .iter()
            .map(|r| r.rows.iter().map(|o| o.position.raw()).collect())
            .collect()
    }

    fn __len__(&self) -> usize {
        self.0.rounds.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SessionReport(rounds={}, total_net_profit={:.2})",
            self.0.rounds.len(),
            self.0.total_net_profit
        )
    }
}

/// Play rounds on the default board and return the total net profit.
#[pyfunction]
#[pyo3(name = "run_session")]
pub fn py_run_session(rounds: u32, target_row: u8, stake: f64) -> PyResult<f64> {
    Ok(run_session(rounds, target_row, stake)?)
}
