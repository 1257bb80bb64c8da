//! rhythm — Barbosa coupled-oscillator V-to-V timing stack.
//!
//! Purpose
//! -------
//! Bundle the complete rhythm-simulation layer under a single namespace:
//! core utterance/parameter types and numeric passes, the user-facing model,
//! and the shared error types. This is the surface most consumers (including
//! the Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the structural and numerical building blocks in [`core`]:
//!   utterance containers, input parsing, model constants, resetting
//!   policies, quantization, and the sync/entrainment passes.
//! - Expose the orchestrating [`RhythmModel`] and its [`RhythmSimulation`]
//!   output in [`models`].
//! - Centralize error types in [`errors`] (`RhythmError`, `ParamError`, and
//!   the `RhythmResult` / `ParamResult` aliases) so callers see a uniform
//!   error surface across the stack.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports in downstream code.
//!
//! Invariants & assumptions
//! ------------------------
//! - Simulation inputs are carried in validated containers: utterances are
//!   non-empty with positive unit counts and finite positive amplitudes,
//!   model constants lie in their documented domains.
//! - Each run produces two index-aligned sequences of identical length and
//!   consumes no shared mutable state; independent runs may proceed
//!   concurrently.
//! - The stack performs no I/O and no logging; callers orchestrate
//!   persistence and rendering. Error conditions surface as `RhythmResult` /
//!   `ParamResult`.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based in all public sequences; `sync[i]` and
//!   `durations[i]` describe the same V-to-V unit.
//! - Durations are expressed in seconds and quantized to 4 decimals, the
//!   model's own working precision.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    compute_durations, compute_sync, parse_utterance, OscillatorParams, ResettingMethod,
    StressGroup, Utterance,
};
pub use self::errors::{InputField, ParamError, ParamResult, RhythmError, RhythmResult};
pub use self::models::{RhythmModel, RhythmSimulation};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use vv_rhythm::rhythm::prelude::*;
//
// to import the main simulation surface in a single line.

pub mod prelude {
    pub use super::core::{OscillatorParams, ResettingMethod, StressGroup, Utterance};
    pub use super::errors::{ParamError, RhythmError, RhythmResult};
    pub use super::models::{RhythmModel, RhythmSimulation};
}
