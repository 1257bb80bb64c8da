//! Model constants for one simulation run.
//!
//! This module provides the validated constant container
//! [`OscillatorParams`]: the four physical constants of the coupled-oscillator
//! model plus the resetting-length policy. The container is immutable for the
//! duration of a run and is threaded explicitly through the numeric passes;
//! there is no ambient or global model state.
//!
//! ## Invariants validated by the constructor
//! - `alpha > 0` (entrainment rate), finite
//! - `beta > 0` (decay rate), finite
//! - `t0 > 0` (resting period, seconds), finite
//! - `0 ≤ w0 ≤ 1` (coupling strength), finite
//!
//! The recurrence formulas would accept arbitrary reals, but out-of-domain
//! constants only ever produce degenerate sequences, so construction fails
//! fast with a [`ParamError`](crate::rhythm::errors::ParamError) instead.
use crate::rhythm::{
    core::{
        resetting::ResettingMethod,
        validation::{validate_alpha, validate_beta, validate_coupling, validate_resting_period},
    },
    errors::ParamResult,
};

/// Validated physical constants and resetting policy for one run.
///
/// Construct via [`OscillatorParams::new`]; downstream passes assume the
/// documented domains hold and never re-validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorParams {
    /// Entrainment rate (> 0).
    pub alpha: f64,
    /// Decay rate of the phrase-initial reset (> 0).
    pub beta: f64,
    /// Resting oscillator period in seconds (> 0).
    pub t0: f64,
    /// Coupling strength (0 ≤ w0 ≤ 1); 0 disables coupling entirely.
    pub w0: f64,
    /// Policy choosing how many leading units per group receive the reset.
    pub resetting: ResettingMethod,
}

impl OscillatorParams {
    /// Construct a validated [`OscillatorParams`].
    ///
    /// # Errors
    /// - [`ParamError::InvalidAlpha`](crate::rhythm::errors::ParamError::InvalidAlpha),
    ///   [`InvalidBeta`](crate::rhythm::errors::ParamError::InvalidBeta),
    ///   [`InvalidRestingPeriod`](crate::rhythm::errors::ParamError::InvalidRestingPeriod), or
    ///   [`InvalidCoupling`](crate::rhythm::errors::ParamError::InvalidCoupling)
    ///   when the corresponding constant is non-finite or out of domain.
    ///   Validation stops at the first offending field, checked in the order
    ///   `alpha`, `beta`, `t0`, `w0`.
    pub fn new(
        alpha: f64, beta: f64, t0: f64, w0: f64, resetting: ResettingMethod,
    ) -> ParamResult<Self> {
        validate_alpha(alpha)?;
        validate_beta(beta)?;
        validate_resting_period(t0)?;
        validate_coupling(w0)?;
        Ok(OscillatorParams { alpha, beta, t0, w0, resetting })
    }

    /// Virtual predecessor duration seeding the entrainment recurrence.
    ///
    /// `t0` when the chain is uncoupled (`w0 == 0`), otherwise `7 * t0²`.
    pub fn initial_duration(&self) -> f64 {
        if self.w0 == 0.0 { self.t0 } else { 7.0 * self.t0 * self.t0 }
    }
}
