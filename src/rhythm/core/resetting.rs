//! Resetting-length policies for the entrainment recurrence.
//!
//! The phrase-initial decay correction ("reset") is only applied to the first
//! few units of each stress group; the policy below decides how many. In the
//! fixed policy every group exposes its first two units to the reset; in the
//! variable policy the window scales with the group size.
//!
//! Catalexis entries never receive a reset, so no length is computed for
//! them.
use crate::rhythm::core::utterance::StressGroup;

/// Policy choosing how many leading units of a stress group receive the
/// decay reset term.
///
/// Invariant: the length is consulted for real groups only; the catalexis
/// pseudo-group is outside both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResettingMethod {
    /// The first two units of every group are reset-eligible.
    FixedLength,
    /// The first `round(0.7 * unit_count)` units are reset-eligible.
    VariableLength,
}

impl ResettingMethod {
    /// Select the fixed two-unit resetting window.
    pub const fn fixed_length() -> Self {
        ResettingMethod::FixedLength
    }

    /// Select the size-proportional resetting window.
    pub const fn variable_length() -> Self {
        ResettingMethod::VariableLength
    }

    /// Number of leading units of `group` eligible for the reset term.
    ///
    /// - `FixedLength`: always 2, regardless of the group size (a
    ///   single-unit group simply has its one unit inside the window).
    /// - `VariableLength`: `round(0.7 * unit_count)`, half away from zero,
    ///   e.g. 3 for a 4-unit group and 2 for a 3-unit group.
    pub fn resetting_length(&self, group: &StressGroup) -> usize {
        match self {
            ResettingMethod::FixedLength => 2,
            ResettingMethod::VariableLength => (0.7 * group.unit_count as f64).round() as usize,
        }
    }
}
