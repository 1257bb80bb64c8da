//! Utterance containers for the V-to-V rhythm simulator.
//!
//! Purpose
//! -------
//! Provide small, validated containers describing the phrase structure of one
//! utterance: an ordered list of stress groups plus an optional trailing
//! catalexis pseudo-group. This module centralizes the structural invariants
//! so the numeric passes can assume clean input.
//!
//! Key behaviors
//! -------------
//! - [`StressGroup`] pairs a V-to-V unit count with a phrase-stress
//!   amplitude.
//! - [`Utterance::new`] enforces the structural invariants (at least one real
//!   group, positive unit counts, finite positive amplitudes) and builds the
//!   catalexis entry, copying its amplitude from the last real group.
//!
//! Invariants & assumptions
//! ------------------------
//! - At least one real stress group exists.
//! - Every unit count is ≥ 1 and every amplitude is finite and > 0.
//! - When present, the catalexis entry carries the caller's catalexis unit
//!   count and the *last real group's* amplitude, never an independent value.
//!
//! Conventions
//! -----------
//! - Group indices are 0-based. Unit positions inside the recurrences are
//!   counted 1..=unit_count within each entry, matching the positional rules
//!   of the sync pass.
//! - The total unit count `N` sums over real groups *and* catalexis; both
//!   output sequences of a run have exactly `N` entries.
//!
//! Downstream usage
//! ----------------
//! - Construct an [`Utterance`] via [`crate::rhythm::core::parse`] from the
//!   two per-group input strings, or directly from validated groups.
//! - The sync and entrainment passes iterate `groups` and then the catalexis
//!   entry, relying on the invariants enforced here.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, catalexis amplitude inheritance, and
//!   each rejected invariant (no groups, zero unit count, bad amplitude).
use crate::rhythm::{
    core::validation::{validate_amplitude, validate_unit_count},
    errors::{RhythmError, RhythmResult},
};

/// One prosodic stress group: a run of V-to-V units under a single
/// phrase-stress amplitude.
///
/// Invariants (`unit_count ≥ 1`, `amplitude` finite and > 0) are enforced by
/// [`Utterance::new`]; the struct itself is a plain carrier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressGroup {
    /// Number of V-to-V units in the group.
    pub unit_count: usize,
    /// Phrase-stress amplitude applied to every unit of the group.
    pub amplitude: f64,
}

/// `Utterance` — validated phrase structure for one simulation run.
///
/// Purpose
/// -------
/// Represent the unit of work consumed by the sync and entrainment passes:
/// the ordered real stress groups followed by an optional catalexis entry.
///
/// Fields
/// ------
/// - `groups`: `Vec<StressGroup>`
///   The real stress groups in utterance order; never empty.
/// - `catalexis`: `Option<StressGroup>`
///   Trailing unstressed pseudo-group. Its `unit_count` is the caller's
///   catalexis count and its `amplitude` is copied from the last real group.
///
/// Invariants
/// ----------
/// - `groups.len() > 0`.
/// - Every entry satisfies `unit_count ≥ 1` and a finite, strictly positive
///   amplitude.
/// - `catalexis` is `None` exactly when the caller requested zero catalexis
///   units.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Real stress groups in utterance order.
    pub groups: Vec<StressGroup>,
    /// Optional trailing catalexis pseudo-group.
    pub catalexis: Option<StressGroup>,
}

impl Utterance {
    /// Construct a validated [`Utterance`] from real groups and a catalexis
    /// unit count.
    ///
    /// Parameters
    /// ----------
    /// - `groups`: `Vec<StressGroup>`
    ///   Real stress groups in utterance order; must be non-empty and
    ///   individually valid.
    /// - `catalexis`: `usize`
    ///   Number of trailing unstressed units; `0` means no catalexis entry.
    ///
    /// Returns
    /// -------
    /// `RhythmResult<Utterance>`
    ///   - `Ok(Utterance)` when all invariants hold; the catalexis entry, if
    ///     any, inherits the last real group's amplitude.
    ///   - `Err(RhythmError)` when validation fails.
    ///
    /// Errors
    /// ------
    /// - `RhythmError::NoStressGroups` when `groups` is empty.
    /// - `RhythmError::ZeroUnitCount { index }` for the first group with no
    ///   units.
    /// - `RhythmError::InvalidAmplitude { index, value }` for the first group
    ///   with a non-finite or non-positive amplitude.
    ///
    /// Notes
    /// -----
    /// - Validation runs in one pass over `groups`, stopping at the first
    ///   invalid entry.
    pub fn new(groups: Vec<StressGroup>, catalexis: usize) -> RhythmResult<Self> {
        if groups.is_empty() {
            return Err(RhythmError::NoStressGroups);
        }

        for (index, group) in groups.iter().enumerate() {
            validate_unit_count(index, group.unit_count)?;
            validate_amplitude(index, group.amplitude)?;
        }

        let catalexis = if catalexis > 0 {
            let last_amplitude = groups[groups.len() - 1].amplitude;
            Some(StressGroup { unit_count: catalexis, amplitude: last_amplitude })
        } else {
            None
        };

        Ok(Utterance { groups, catalexis })
    }

    /// Total number of V-to-V units, real groups plus catalexis.
    ///
    /// Both output sequences of a run have exactly this length.
    pub fn total_units(&self) -> usize {
        let real: usize = self.groups.iter().map(|g| g.unit_count).sum();
        real + self.catalexis.map_or(0, |c| c.unit_count)
    }

    /// Amplitude of the last real stress group.
    pub fn last_amplitude(&self) -> f64 {
        self.groups[self.groups.len() - 1].amplitude
    }
}
