//! models — the user-facing simulation surface.
//!
//! Purpose
//! -------
//! Expose the orchestrator that composes the core passes into one
//! `simulate` call and the output container consumed by rendering and
//! persistence collaborators.

pub mod simulator;

pub use self::simulator::{RhythmModel, RhythmSimulation};
