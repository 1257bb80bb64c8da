//! User-facing rhythm model: orchestration of parse → sync → entrainment.
//!
//! Purpose
//! -------
//! Provide the orchestrator that Rust callers (and the Python bindings)
//! interact with: [`RhythmModel`] holds the validated constants for a run and
//! composes the parsing and numeric passes, and [`RhythmSimulation`] owns the
//! resulting sequences.
//!
//! Key behaviors
//! -------------
//! - `simulate` parses the two per-group strings and runs both numeric
//!   passes; any parse failure aborts before the numeric passes start, with
//!   no partial output.
//! - `simulate_utterance` skips parsing for callers that already hold a
//!   validated [`Utterance`].
//! - [`RhythmSimulation::elapsed`] derives the cumulative-time axis that a
//!   plotting collaborator needs, as prefix sums of the duration sequence.
//!
//! Invariants & assumptions
//! ------------------------
//! - `sync.len() == durations.len() == N` for every successful run, with `N`
//!   the utterance's total unit count.
//! - A model value is immutable and stateless across runs; independent
//!   `simulate` calls may run concurrently on separate inputs.
//!
//! Testing notes
//! -------------
//! - Unit tests cover orchestration (length invariant, determinism, error
//!   propagation, elapsed prefix sums); the numeric reference sequences are
//!   pinned in the `sync` / `entrainment` module tests and in the
//!   integration test.
use crate::rhythm::{
    core::{
        entrainment::compute_durations, params::OscillatorParams, parse::parse_utterance,
        sync::compute_sync, utterance::Utterance,
    },
    errors::RhythmResult,
};
use ndarray::Array1;

/// Coupled-oscillator rhythm model for one set of physical constants.
///
/// Construct with validated [`OscillatorParams`] and call
/// [`simulate`](RhythmModel::simulate) once per utterance; the model carries
/// no per-run state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhythmModel {
    params: OscillatorParams,
}

impl RhythmModel {
    /// Create a model from validated constants.
    pub fn new(params: OscillatorParams) -> Self {
        RhythmModel { params }
    }

    /// The constants this model simulates with.
    pub fn params(&self) -> &OscillatorParams {
        &self.params
    }

    /// Run one full simulation from the raw per-group input strings.
    ///
    /// Composition of the input parser, the sync pass, and the entrainment
    /// pass, in that order. No retries and no partial results: a malformed
    /// input string fails the run before any numeric pass executes.
    ///
    /// # Errors
    /// - Any [`RhythmError`](crate::rhythm::errors::RhythmError) from parsing
    ///   the input strings or validating the utterance.
    pub fn simulate(
        &self, group_count: usize, catalexis: usize, units_str: &str, amplitudes_str: &str,
    ) -> RhythmResult<RhythmSimulation> {
        let utterance = parse_utterance(group_count, catalexis, units_str, amplitudes_str)?;
        self.simulate_utterance(&utterance)
    }

    /// Run the numeric passes on an already-validated utterance.
    pub fn simulate_utterance(&self, utterance: &Utterance) -> RhythmResult<RhythmSimulation> {
        let sync = compute_sync(utterance, self.params.w0, self.params.t0);
        let durations = compute_durations(utterance, &sync, &self.params)?;
        Ok(RhythmSimulation { sync, durations })
    }
}

/// Output of one simulation run: the intermediate sync sequence and the
/// predicted V-to-V duration sequence, index-aligned and equal in length.
///
/// Rendering collaborators plot durations against [`elapsed`]
/// (RhythmSimulation::elapsed); persistence collaborators write the duration
/// values one per line.
#[derive(Debug, Clone, PartialEq)]
pub struct RhythmSimulation {
    /// Per-unit synchronization values (intermediate output).
    pub sync: Array1<f64>,
    /// Predicted V-to-V interval durations in seconds (final output).
    pub durations: Array1<f64>,
}

impl RhythmSimulation {
    /// Number of V-to-V units in the simulated utterance.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Whether the run produced no units (never true for a valid utterance).
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Cumulative elapsed time at the end of each V-to-V unit.
    ///
    /// Prefix sums of the duration sequence; `elapsed[i]` is when unit `i`
    /// ends, giving the time axis for a duration-vs-time plot.
    pub fn elapsed(&self) -> Array1<f64> {
        let mut total = 0.0;
        self.durations.mapv(|d| {
            total += d;
            total
        })
    }
}
