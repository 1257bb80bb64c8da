//! Synchronization pass: one coupling value per V-to-V unit.
//!
//! Computes the position-dependent sync sequence consumed by the entrainment
//! recurrence, in a single left-to-right pass over the utterance.
//!
//! ## Positional rule (real groups)
//! For a group of `n` units, with `u` the 1-based position inside the group:
//! - `u == 1`:        `sync = w0 · exp(−n + 2)` (takes precedence over the
//!   last-unit rule, so a single-unit group uses this branch)
//! - `u == n, n > 1`: `sync = w0 · exp(−5.81 + 0.016 · t0 · 1000)`
//! - interior:        `sync = (1 − w0) · sync_prev + w0 · exp(−n + (u−1) + 2)`
//!
//! ## Catalexis
//! Every catalexis unit copies the immediately preceding sync value
//! unchanged, so the trailing units coast on the last real group's final
//! coupling state.
//!
//! ## Quantization
//! Each value is rounded to 4 decimals before it is stored; the interior rule
//! and the copy-forward rule both read the stored (rounded) predecessor.
use crate::rhythm::core::{rounding::round4, utterance::Utterance};
use ndarray::Array1;

/// Compute the sync sequence for `utterance`, one value per V-to-V unit.
///
/// One pass, O(N). The output always has length `utterance.total_units()`;
/// the entrainment pass consumes it index-aligned with its own output.
///
/// `w0` and `t0` come from a validated
/// [`OscillatorParams`](crate::rhythm::core::params::OscillatorParams); with
/// `w0 == 0` every value collapses to zero and the duration recurrence
/// reduces to its reset dynamics.
pub fn compute_sync(utterance: &Utterance, w0: f64, t0: f64) -> Array1<f64> {
    let mut sync = Array1::zeros(utterance.total_units());
    let mut i = 0;

    for group in &utterance.groups {
        let n = group.unit_count;
        let span = n as f64;
        for u in 1..=n {
            let raw = if u == 1 {
                w0 * (-span + 2.0).exp()
            } else if u == n {
                w0 * (-5.81 + 0.016 * t0 * 1000.0).exp()
            } else {
                (1.0 - w0) * sync[i - 1] + w0 * (-span + (u as f64 - 1.0) + 2.0).exp()
            };
            sync[i] = round4(raw);
            i += 1;
        }
    }

    if let Some(catalexis) = &utterance.catalexis {
        // i >= 1 here: the utterance always has at least one real unit.
        for _ in 0..catalexis.unit_count {
            sync[i] = sync[i - 1];
            i += 1;
        }
    }

    sync
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhythm::core::utterance::StressGroup;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The three positional branches and their precedence for single-unit
    //   groups.
    // - Catalexis copy-forward and the w0 = 0 collapse.
    // - The exact quantized reference sequence.
    //
    // These tests intentionally DO NOT cover:
    // - Duration computation; that lives in `entrainment`.
    // -------------------------------------------------------------------------

    fn utterance(units: &[usize], amplitudes: &[f64], catalexis: usize) -> Utterance {
        let groups = units
            .iter()
            .zip(amplitudes.iter())
            .map(|(&unit_count, &amplitude)| StressGroup { unit_count, amplitude })
            .collect();
        Utterance::new(groups, catalexis).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Pin the full sync sequence of the reference scenario, including the
    // catalexis copy of the final value.
    //
    // Given
    // -----
    // - Two 4-unit groups plus 1 catalexis unit, w0 = 0.78, t0 = 0.165.
    //
    // Expect
    // ------
    // - The 9-value quantized sequence below; in particular
    //   sync[0] = round4(0.78 · exp(−2)) = 0.1056 and the last-unit value
    //   0.78 · exp(−5.81 + 2.64) → 0.0328.
    fn compute_sync_matches_reference_sequence() {
        let utterance = utterance(&[4, 4], &[1.0, 0.5], 1);

        let sync = compute_sync(&utterance, 0.78, 0.165);

        assert_eq!(
            sync,
            array![0.1056, 0.3102, 0.8482, 0.0328, 0.1056, 0.3102, 0.8482, 0.0328, 0.0328]
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the first-unit rule wins over the last-unit rule for a
    // single-unit group.
    //
    // Given
    // -----
    // - Groups of 1 and 2 units, w0 = 0.5, t0 = 0.15.
    //
    // Expect
    // ------
    // - sync[0] = round4(0.5 · exp(−1 + 2)) = 1.3591, not the last-unit
    //   value; the 2-unit group contributes 0.5 (first) and 0.0165 (last).
    fn compute_sync_single_unit_group_uses_first_unit_rule() {
        let utterance = utterance(&[1, 2], &[1.5, 1.0], 0);

        let sync = compute_sync(&utterance, 0.5, 0.15);

        assert_eq!(sync, array![1.3591, 0.5, 0.0165]);
    }

    #[test]
    // Purpose
    // -------
    // Verify every catalexis unit copies the preceding value unchanged, for
    // a multi-unit catalexis.
    //
    // Given
    // -----
    // - One 3-unit group plus 3 catalexis units, w0 = 0.78, t0 = 0.165.
    //
    // Expect
    // ------
    // - The three trailing values all equal the last real unit's value.
    fn compute_sync_catalexis_copies_forward() {
        let utterance = utterance(&[3], &[1.0], 3);

        let sync = compute_sync(&utterance, 0.78, 0.165);

        assert_eq!(sync.len(), 6);
        let last_real = sync[2];
        assert_eq!(sync[3], last_real);
        assert_eq!(sync[4], last_real);
        assert_eq!(sync[5], last_real);
    }

    #[test]
    // Purpose
    // -------
    // Verify the uncoupled chain produces an all-zero sync sequence: every
    // branch is proportional to w0 or to a zero predecessor.
    //
    // Given
    // -----
    // - Groups of 3 and 4 units, no catalexis, w0 = 0.
    //
    // Expect
    // ------
    // - Seven exact zeros.
    fn compute_sync_is_zero_when_uncoupled() {
        let utterance = utterance(&[3, 4], &[2.0, 1.0], 0);

        let sync = compute_sync(&utterance, 0.0, 0.2);

        assert_eq!(sync, Array1::zeros(7));
    }
}
