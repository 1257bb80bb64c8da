//! Entrainment pass: the stateful duration recurrence.
//!
//! Consumes the sync sequence and the utterance's amplitudes and produces one
//! V-to-V duration per unit in a single strictly sequential pass — each
//! output depends on the stored previous output (Markov property).
//!
//! ## Recurrence
//! With `d_prev` the previous stored duration (seeded by
//! [`OscillatorParams::initial_duration`]), group `g` (0-based), unit `u`
//! (1-based inside its entry):
//!
//! - `reset = −beta · (d_prev − t0) · m`, where `m = 1` for the first real
//!   group and the *previous* entry's amplitude otherwise.
//! - `delta = alpha · d_prev · sync[i] · amplitude(g)`
//! - Real groups add `reset` to `delta` while `u ≤ L(g)`, the group's
//!   resetting length; catalexis units never receive the reset.
//! - `durations[i] = round4(d_prev + delta)`, and the rounded value is what
//!   the next step reads as `d_prev`.
//!
//! ## Quantization
//! As in the sync pass, the 4-decimal rounding is part of the model: the
//! recurrence consumes the rounded predecessor, so dropping it changes every
//! subsequent value.
use crate::rhythm::{
    core::{params::OscillatorParams, rounding::round4, utterance::Utterance},
    errors::{RhythmError, RhythmResult},
};
use ndarray::Array1;

/// Compute the entrained duration sequence for `utterance`.
///
/// One pass, O(N), strictly sequential. `sync` must hold one value per
/// V-to-V unit (as produced by
/// [`compute_sync`](crate::rhythm::core::sync::compute_sync)); the output is
/// index-aligned with it.
///
/// # Errors
/// - [`RhythmError::SyncLengthMismatch`] when `sync.len()` differs from
///   `utterance.total_units()`. The orchestrator never produces such a
///   sequence; the check guards direct callers of the two passes.
pub fn compute_durations(
    utterance: &Utterance, sync: &Array1<f64>, params: &OscillatorParams,
) -> RhythmResult<Array1<f64>> {
    let n_total = utterance.total_units();
    if sync.len() != n_total {
        return Err(RhythmError::SyncLengthMismatch { expected: n_total, actual: sync.len() });
    }

    let mut durations = Array1::zeros(n_total);
    let mut d_prev = params.initial_duration();
    let mut i = 0;

    // The first real group resets against a unit amplitude multiplier.
    let mut reset_amplitude = 1.0;
    for group in &utterance.groups {
        let reset_len = params.resetting.resetting_length(group);
        for u in 1..=group.unit_count {
            let mut delta = params.alpha * d_prev * sync[i] * group.amplitude;
            if u <= reset_len {
                delta += -params.beta * (d_prev - params.t0) * reset_amplitude;
            }
            d_prev = round4(d_prev + delta);
            durations[i] = d_prev;
            i += 1;
        }
        reset_amplitude = group.amplitude;
    }

    if let Some(catalexis) = &utterance.catalexis {
        for _ in 0..catalexis.unit_count {
            let delta = params.alpha * d_prev * sync[i] * catalexis.amplitude;
            d_prev = round4(d_prev + delta);
            durations[i] = d_prev;
            i += 1;
        }
    }

    Ok(durations)
}
