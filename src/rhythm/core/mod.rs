//! core — utterance structure, model constants, and the two numeric passes.
//!
//! Purpose
//! -------
//! Collect the building blocks of the coupled-oscillator rhythm simulator:
//! validated utterance containers, the per-group input parser, model-constant
//! types, the resetting-length policy, the quantization helper, and the sync
//! and entrainment passes. The user-facing model in
//! [`crate::rhythm::models`] builds on top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Describe phrase structure via [`StressGroup`] / [`Utterance`], built
//!   either directly or from the two space-separated input strings via
//!   [`parse_utterance`].
//! - Carry the four physical constants and the resetting policy in
//!   [`OscillatorParams`] / [`ResettingMethod`], validated at construction.
//! - Produce the per-unit sequences with [`compute_sync`] and
//!   [`compute_durations`], each a single deterministic left-to-right pass
//!   quantized by [`round4`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Utterances hold at least one real stress group; unit counts are ≥ 1 and
//!   amplitudes finite and strictly positive (enforced by `Utterance::new`).
//! - Model constants satisfy the domains documented on [`OscillatorParams`];
//!   the numeric passes assume validated inputs and never re-check them.
//! - Both output sequences of a run have exactly `total_units()` entries; the
//!   entrainment pass rejects a sync sequence of any other length.
//! - Every stored sync/duration value is quantized to 4 decimals and the
//!   recurrences consume the quantized values; this is part of the model's
//!   arithmetic.
//!
//! Conventions
//! -----------
//! - Group and token indices are 0-based; unit positions inside a group are
//!   1-based to match the positional sync rules.
//! - This module performs no I/O and no logging; it operates purely on
//!   `ndarray` containers and scalar values. Error conditions are reported
//!   via `RhythmResult` / `ParamResult`.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules pin the quantized reference sequences and
//!   cover each validation rejection; the full pipeline is exercised by the
//!   integration test at the crate level.

pub mod entrainment;
pub mod params;
pub mod parse;
pub mod resetting;
pub mod rounding;
pub mod sync;
pub mod utterance;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::entrainment::compute_durations;
pub use self::params::OscillatorParams;
pub use self::parse::parse_utterance;
pub use self::resetting::ResettingMethod;
pub use self::rounding::round4;
pub use self::sync::compute_sync;
pub use self::utterance::{StressGroup, Utterance};
pub use self::validation::{
    validate_alpha, validate_amplitude, validate_beta, validate_coupling,
    validate_resting_period, validate_unit_count,
};
