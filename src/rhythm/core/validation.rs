//! Validation helpers shared by the constructors of the rhythm core.
//!
//! Purpose
//! -------
//! Centralize the per-field domain checks for model constants and utterance
//! entries so that `OscillatorParams::new` and `Utterance::new` stay thin and
//! every rejection carries the same typed error, whichever constructor hit it.
//!
//! Key behaviors
//! -------------
//! - Model constants: `alpha`, `beta`, and `t0` must be finite and strictly
//!   positive; `w0` must be finite and within `[0, 1]`.
//! - Utterance entries: unit counts must be at least one; amplitudes must be
//!   finite and strictly positive. Both checks report the 0-based group index
//!   of the first offending entry.
//!
//! Conventions
//! -----------
//! - Helpers return `Ok(())` and never mutate their inputs; callers keep the
//!   validated values they already hold.
//! - Constant checks produce [`ParamError`], entry checks produce
//!   [`RhythmError`]; the split mirrors who supplies the value (the parameter
//!   form vs. the per-group input strings).
use crate::rhythm::errors::{ParamError, ParamResult, RhythmError, RhythmResult};

/// Validate the entrainment rate `alpha` (finite, > 0).
///
/// # Errors
/// - [`ParamError::InvalidAlpha`] when `alpha` is NaN, infinite, or ≤ 0.
pub fn validate_alpha(alpha: f64) -> ParamResult<()> {
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(ParamError::InvalidAlpha { value: alpha });
    }
    Ok(())
}

/// Validate the decay rate `beta` (finite, > 0).
///
/// # Errors
/// - [`ParamError::InvalidBeta`] when `beta` is NaN, infinite, or ≤ 0.
pub fn validate_beta(beta: f64) -> ParamResult<()> {
    if !beta.is_finite() || beta <= 0.0 {
        return Err(ParamError::InvalidBeta { value: beta });
    }
    Ok(())
}

/// Validate the resting period `t0` in seconds (finite, > 0).
///
/// # Errors
/// - [`ParamError::InvalidRestingPeriod`] when `t0` is NaN, infinite, or ≤ 0.
pub fn validate_resting_period(t0: f64) -> ParamResult<()> {
    if !t0.is_finite() || t0 <= 0.0 {
        return Err(ParamError::InvalidRestingPeriod { value: t0 });
    }
    Ok(())
}

/// Validate the coupling strength `w0` (finite, within `[0, 1]`).
///
/// `w0 == 0` is a legal, fully uncoupled configuration; the entrainment pass
/// seeds its virtual predecessor differently in that case.
///
/// # Errors
/// - [`ParamError::InvalidCoupling`] when `w0` is NaN, infinite, negative, or
///   greater than 1.
pub fn validate_coupling(w0: f64) -> ParamResult<()> {
    if !w0.is_finite() || !(0.0..=1.0).contains(&w0) {
        return Err(ParamError::InvalidCoupling { value: w0 });
    }
    Ok(())
}

/// Validate a stress group's V-to-V unit count (≥ 1).
///
/// # Errors
/// - [`RhythmError::ZeroUnitCount`] carrying the 0-based group index.
pub fn validate_unit_count(index: usize, unit_count: usize) -> RhythmResult<()> {
    if unit_count == 0 {
        return Err(RhythmError::ZeroUnitCount { index });
    }
    Ok(())
}

/// Validate a stress group's amplitude (finite, > 0).
///
/// # Errors
/// - [`RhythmError::InvalidAmplitude`] carrying the 0-based group index and
///   the offending value.
pub fn validate_amplitude(index: usize, amplitude: f64) -> RhythmResult<()> {
    if !amplitude.is_finite() || amplitude <= 0.0 {
        return Err(RhythmError::InvalidAmplitude { index, value: amplitude });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance of in-domain constants and utterance entries.
    // - Rejection of NaN/±inf and out-of-domain values with the matching
    //   typed error, including the reported index for entry checks.
    //
    // These tests intentionally DO NOT cover:
    // - How constructors combine these helpers; that is covered by the
    //   `params` and `utterance` module tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that strictly positive, finite constants pass every constant
    // validator, including the boundary values of the coupling interval.
    //
    // Given
    // -----
    // - alpha = 0.4, beta = 1.1, t0 = 0.165.
    // - w0 at 0.0, 0.78, and 1.0.
    //
    // Expect
    // ------
    // - Every validator returns `Ok(())`.
    fn constant_validators_accept_in_domain_values() {
        assert!(validate_alpha(0.4).is_ok());
        assert!(validate_beta(1.1).is_ok());
        assert!(validate_resting_period(0.165).is_ok());
        assert!(validate_coupling(0.0).is_ok());
        assert!(validate_coupling(0.78).is_ok());
        assert!(validate_coupling(1.0).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure each constant validator rejects zero, negative, and non-finite
    // inputs with its own `ParamError` variant carrying the offending value.
    //
    // Given
    // -----
    // - Out-of-domain probes per field: 0.0, -1.0, NaN, and +inf.
    //
    // Expect
    // ------
    // - `InvalidAlpha`, `InvalidBeta`, `InvalidRestingPeriod`, and
    //   `InvalidCoupling` respectively.
    fn constant_validators_reject_out_of_domain_values() {
        assert_eq!(validate_alpha(0.0).unwrap_err(), ParamError::InvalidAlpha { value: 0.0 });
        assert_eq!(validate_beta(-1.0).unwrap_err(), ParamError::InvalidBeta { value: -1.0 });
        assert!(matches!(
            validate_resting_period(f64::NAN).unwrap_err(),
            ParamError::InvalidRestingPeriod { .. }
        ));
        assert_eq!(
            validate_coupling(1.5).unwrap_err(),
            ParamError::InvalidCoupling { value: 1.5 }
        );
        assert!(matches!(
            validate_coupling(f64::INFINITY).unwrap_err(),
            ParamError::InvalidCoupling { .. }
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify that entry validators accept minimal legal entries and report
    // the supplied index on rejection.
    //
    // Given
    // -----
    // - A unit count of 1 and an amplitude of 0.5 at index 0 (valid).
    // - A unit count of 0 at index 2 and an amplitude of -0.5 at index 1
    //   (invalid).
    //
    // Expect
    // ------
    // - `Ok(())` for the valid entries.
    // - `ZeroUnitCount { index: 2 }` and
    //   `InvalidAmplitude { index: 1, value: -0.5 }` for the invalid ones.
    fn entry_validators_report_offending_index() {
        assert!(validate_unit_count(0, 1).is_ok());
        assert!(validate_amplitude(0, 0.5).is_ok());
        assert_eq!(validate_unit_count(2, 0).unwrap_err(), RhythmError::ZeroUnitCount { index: 2 });
        assert_eq!(
            validate_amplitude(1, -0.5).unwrap_err(),
            RhythmError::InvalidAmplitude { index: 1, value: -0.5 }
        );
    }
}
