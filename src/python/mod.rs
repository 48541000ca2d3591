//! Python bindings for hazard-ladder.
//!
//! # Quick Start
//!
//! ```python
//! import hazard_ladder as hl
//!
//! config = hl.SessionConfig(rounds=10, target_row=6, stake=150.0, seed=42)
//! report = config.run()
//! print(report.total_net_profit)
//!
//! # Or the three-value shortcut
//! profit = hl.run_session(5, 5, 50.0)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

use crate::core::SessionError;

impl From<SessionError> for PyErr {
    fn from(err: SessionError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// hazard_ladder: row-by-row hazard avoidance simulator.
#[pymodule]
fn hazard_ladder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySessionConfig>()?;
    m.add_class::<PySessionReport>()?;
    m.add_function(wrap_pyfunction!(py_run_session, m)?)?;
    Ok(())
}
