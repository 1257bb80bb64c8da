//! Errors for the V-to-V rhythm simulator (input parsing, utterance
//! invariants, and model-constant validation).
//!
//! This module defines a simulation error type, [`RhythmError`], and a
//! parameter error type, [`ParamError`], used across the Rust core and the
//! optional Python bindings. Both implement `Display`/`Error` and, when the
//! `python-bindings` feature is enabled, convert to `PyErr`.
//!
//! ## Conventions
//! - **Group and token indices are 0-based** (match Rust); the per-unit
//!   sequences produced by the simulator are plain 0-based arrays.
//! - Input strings are identified by [`InputField`] so callers can tell which
//!   of the two per-group strings was malformed.
//! - Every error aborts the current simulation; there are no retries and no
//!   partial output. Runs are stateless, so a failed run never corrupts a
//!   later one.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for simulation operations that may produce
/// [`RhythmError`].
pub type RhythmResult<T> = Result<T, RhythmError>;

/// Result alias for model-constant validation paths that may produce
/// [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Which of the two per-group input strings an error refers to.
///
/// The simulator takes two parallel space-separated strings: one with the
/// V-to-V unit count of each stress group and one with each group's stress
/// amplitude. Parse errors carry this tag so the caller knows which string
/// to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The units-per-group string.
    Units,
    /// The amplitude-per-group string.
    Amplitudes,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::Units => write!(f, "units"),
            InputField::Amplitudes => write!(f, "amplitudes"),
        }
    }
}

/// Unified error type for rhythm simulation.
///
/// Covers input-string parsing, utterance invariants, and the internal seam
/// between the sync pass and the entrainment pass. Implements
/// `Display`/`Error` and converts to a Python `ValueError` at PyO3
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum RhythmError {
    // ---- Input parsing ----
    /// The requested stress-group count is zero.
    NoStressGroups,

    /// An input string does not split into exactly `expected` tokens.
    ///
    /// Doubled, leading, or trailing spaces produce empty tokens and are
    /// reported through this variant or [`RhythmError::MalformedToken`].
    TokenCountMismatch { field: InputField, expected: usize, actual: usize },

    /// A token could not be parsed as a number of the required kind.
    MalformedToken { field: InputField, index: usize, token: String },

    // ---- Utterance invariants ----
    /// A stress group has a unit count of zero.
    ZeroUnitCount { index: usize },

    /// A stress-group amplitude is non-finite or not strictly positive.
    InvalidAmplitude { index: usize, value: f64 },

    // ---- Internal sequencing invariants ----
    /// The sync sequence handed to the entrainment pass does not have one
    /// value per V-to-V unit.
    SyncLengthMismatch { expected: usize, actual: usize },
}

impl std::error::Error for RhythmError {}

impl std::fmt::Display for RhythmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input parsing ----
            RhythmError::NoStressGroups => {
                write!(f, "An utterance needs at least one stress group.")
            }
            RhythmError::TokenCountMismatch { field, expected, actual } => {
                write!(
                    f,
                    "The {field} string must contain exactly {expected} space-separated values; got {actual}"
                )
            }
            RhythmError::MalformedToken { field, index, token } => {
                write!(f, "The {field} string has a malformed value at position {index}: {token:?}")
            }
            // ---- Utterance invariants ----
            RhythmError::ZeroUnitCount { index } => {
                write!(f, "Stress group {index} must contain at least one V-to-V unit.")
            }
            RhythmError::InvalidAmplitude { index, value } => {
                write!(
                    f,
                    "Stress-group amplitude at index {index} must be finite and > 0; got: {value}"
                )
            }
            // ---- Internal sequencing invariants ----
            RhythmError::SyncLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Sync sequence must have one value per V-to-V unit: expected {expected}, got {actual}"
                )
            }
        }
    }
}

/// Convert a [`RhythmError`] into a Python `ValueError` with the error
/// message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<RhythmError> for PyErr {
    fn from(err: RhythmError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Errors specific to model-constant construction and validation.
///
/// The simulator formulas accept any real constants, but degenerate values
/// (non-finite, negative rates, coupling outside the unit interval) only ever
/// produce meaningless output, so they are rejected at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Entrainment rate alpha must be finite and > 0.
    InvalidAlpha { value: f64 },

    /// Decay rate beta must be finite and > 0.
    InvalidBeta { value: f64 },

    /// Resting period t0 must be finite and > 0 (seconds).
    InvalidRestingPeriod { value: f64 },

    /// Coupling strength w0 must be finite and in [0, 1].
    InvalidCoupling { value: f64 },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::InvalidAlpha { value } => {
                write!(f, "Entrainment rate alpha must be finite and > 0, got {value}")
            }
            ParamError::InvalidBeta { value } => {
                write!(f, "Decay rate beta must be finite and > 0, got {value}")
            }
            ParamError::InvalidRestingPeriod { value } => {
                write!(f, "Resting period t0 must be finite and > 0 seconds, got {value}")
            }
            ParamError::InvalidCoupling { value } => {
                write!(f, "Coupling strength w0 must be finite and within [0, 1], got {value}")
            }
        }
    }
}

/// Convert a [`ParamError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ParamError> for PyErr {
    fn from(err: ParamError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
