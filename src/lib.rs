//! vv_rhythm — coupled-oscillator simulation of speech-rhythm (V-to-V)
//! timing, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, when the `python-bindings`
//! feature is enabled, as the PyO3 bridge that exposes the simulator to
//! Python via the `_vv_rhythm` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module ([`rhythm`]) as the public crate surface:
//!   utterance parsing, the sync and entrainment passes, and the
//!   orchestrating [`rhythm::RhythmModel`].
//! - Define the `VtoVModel` `#[pyclass]` wrapper and the `#[pymodule]`
//!   initializer for the `_vv_rhythm` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, argument extraction, and error mapping.
//! - On successful conversion from Python arguments to Rust types, the
//!   invariants documented in [`rhythm::core`] are assumed to hold.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `ValueError` at the PyO3 boundary.
//! - Python-facing sequences are returned as 1-D `numpy` arrays, 0-indexed
//!   and index-aligned across sync, duration, and elapsed-time outputs.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`rhythm`] (or
//!   `rhythm::prelude`) and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - External Python users construct a `VtoVModel` with the four physical
//!   constants and call `simulate(...)` per utterance.

pub mod rhythm;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{rhythm::models::RhythmModel, utils::build_oscillator_params};

/// Python-facing wrapper around [`RhythmModel`].
///
/// Holds one validated set of physical constants; `simulate` may be called
/// any number of times, each call independent of the last.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "VtoVModel")]
pub struct PyVtoVModel {
    inner: RhythmModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyVtoVModel {
    /// Build a model from the four physical constants and an optional
    /// resetting method name (`"fixed"` or `"variable"`, default `"fixed"`).
    #[new]
    #[pyo3(signature = (alpha, beta, t0, w0, resetting=None))]
    fn new(alpha: f64, beta: f64, t0: f64, w0: f64, resetting: Option<&str>) -> PyResult<Self> {
        let params = build_oscillator_params(alpha, beta, t0, w0, resetting)?;
        Ok(PyVtoVModel { inner: RhythmModel::new(params) })
    }

    /// Simulate one utterance from its per-group strings.
    ///
    /// Returns `(sync, durations, elapsed)` as 1-D float64 numpy arrays of
    /// identical length (one entry per V-to-V unit, catalexis included).
    #[pyo3(signature = (group_count, units, amplitudes, catalexis=None))]
    fn simulate<'py>(
        &self, py: Python<'py>, group_count: usize, units: &str, amplitudes: &str,
        catalexis: Option<usize>,
    ) -> PyResult<(
        Bound<'py, PyArray1<f64>>,
        Bound<'py, PyArray1<f64>>,
        Bound<'py, PyArray1<f64>>,
    )> {
        let simulation =
            self.inner.simulate(group_count, catalexis.unwrap_or(0), units, amplitudes)?;
        let elapsed = simulation.elapsed();
        Ok((
            simulation.sync.into_pyarray(py),
            simulation.durations.into_pyarray(py),
            elapsed.into_pyarray(py),
        ))
    }
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _vv_rhythm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyVtoVModel>()?;
    Ok(())
}
