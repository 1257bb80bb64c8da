//! Parsing of the two per-group input strings into an [`Utterance`].
//!
//! Purpose
//! -------
//! Turn the caller's space-separated numeric strings (units-per-group and
//! amplitude-per-group) into a validated utterance description, including the
//! synthetic catalexis entry when requested.
//!
//! Key behaviors
//! -------------
//! - Each string must split into exactly `group_count` tokens on single
//!   spaces. Doubled, leading, or trailing spaces are malformed input, never
//!   silently collapsed.
//! - Units tokens parse as positive integers; amplitude tokens parse as
//!   strictly positive finite reals. Token order is group order.
//! - Structural invariants (positive unit counts, valid amplitudes, catalexis
//!   amplitude inheritance) are enforced by [`Utterance::new`].
//!
//! Conventions
//! -----------
//! - Token indices in errors are 0-based and identify the group position.
//! - Parsing has no side effects beyond constructing the utterance; a failure
//!   aborts the run before any numeric pass starts.
use crate::rhythm::{
    core::utterance::{StressGroup, Utterance},
    errors::{InputField, RhythmError, RhythmResult},
};

/// Parse the two per-group strings into a validated [`Utterance`].
///
/// Parameters
/// ----------
/// - `group_count`: number of real stress groups; both strings must contain
///   exactly this many tokens. Zero is rejected.
/// - `catalexis`: number of trailing unstressed units; `0` means none.
/// - `units_str`: space-separated positive integers, one per group.
/// - `amplitudes_str`: space-separated positive reals, one per group.
///
/// Returns
/// -------
/// `RhythmResult<Utterance>` with the real groups in token order and, when
/// `catalexis > 0`, a trailing entry whose amplitude is copied from the last
/// real group.
///
/// Errors
/// ------
/// - `RhythmError::NoStressGroups` when `group_count == 0`.
/// - `RhythmError::TokenCountMismatch` when a string does not split into
///   exactly `group_count` tokens (stray whitespace included).
/// - `RhythmError::MalformedToken` when a token fails to parse as its
///   required numeric kind (an empty token from doubled spaces lands here
///   when the count happens to match).
/// - Invariant violations from [`Utterance::new`] (zero unit count, invalid
///   amplitude).
pub fn parse_utterance(
    group_count: usize, catalexis: usize, units_str: &str, amplitudes_str: &str,
) -> RhythmResult<Utterance> {
    if group_count == 0 {
        return Err(RhythmError::NoStressGroups);
    }

    let unit_tokens = split_exact(InputField::Units, units_str, group_count)?;
    let amplitude_tokens = split_exact(InputField::Amplitudes, amplitudes_str, group_count)?;

    let mut groups = Vec::with_capacity(group_count);
    for (index, (unit_token, amplitude_token)) in
        unit_tokens.iter().zip(amplitude_tokens.iter()).enumerate()
    {
        let unit_count: usize = unit_token.parse().map_err(|_| RhythmError::MalformedToken {
            field: InputField::Units,
            index,
            token: (*unit_token).to_string(),
        })?;
        let amplitude: f64 = amplitude_token.parse().map_err(|_| RhythmError::MalformedToken {
            field: InputField::Amplitudes,
            index,
            token: (*amplitude_token).to_string(),
        })?;
        groups.push(StressGroup { unit_count, amplitude });
    }

    Utterance::new(groups, catalexis)
}

/// Split `input` on single spaces and require exactly `expected` tokens.
///
/// Empty tokens produced by stray whitespace count toward the total, so
/// `"4  4"` splits into three tokens and is rejected here with the actual
/// count; an empty token surviving the count check is rejected later as a
/// malformed token.
fn split_exact<'a>(
    field: InputField, input: &'a str, expected: usize,
) -> RhythmResult<Vec<&'a str>> {
    let tokens: Vec<&str> = input.split(' ').collect();
    if tokens.len() != expected {
        return Err(RhythmError::TokenCountMismatch { field, expected, actual: tokens.len() });
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Happy-path parsing with and without catalexis.
    // - Rejection of stray whitespace, wrong token counts, malformed tokens,
    //   and a zero group count, with the offending field/index reported.
    //
    // These tests intentionally DO NOT cover:
    // - Domain checks on parsed values (zero unit counts, bad amplitudes);
    //   those live with `Utterance::new`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the reference scenario's inputs parse into the expected
    // utterance with catalexis amplitude inheritance.
    //
    // Given
    // -----
    // - `group_count = 2`, `catalexis = 1`, units "4 4", amplitudes "1 0.5".
    //
    // Expect
    // ------
    // - Two real groups (4, 1.0) and (4, 0.5), catalexis (1, 0.5), N = 9.
    fn parse_utterance_builds_reference_scenario() {
        let utterance = parse_utterance(2, 1, "4 4", "1 0.5").unwrap();

        assert_eq!(
            utterance.groups,
            vec![
                StressGroup { unit_count: 4, amplitude: 1.0 },
                StressGroup { unit_count: 4, amplitude: 0.5 },
            ]
        );
        assert_eq!(utterance.catalexis, Some(StressGroup { unit_count: 1, amplitude: 0.5 }));
        assert_eq!(utterance.total_units(), 9);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a doubled space is rejected rather than collapsed: the extra
    // empty token pushes the count past `group_count`.
    //
    // Given
    // -----
    // - Units string "4  4" for `group_count = 2`.
    //
    // Expect
    // ------
    // - `TokenCountMismatch { field: Units, expected: 2, actual: 3 }`.
    fn parse_utterance_rejects_doubled_space() {
        let result = parse_utterance(2, 0, "4  4", "1 0.5");

        assert_eq!(
            result.unwrap_err(),
            RhythmError::TokenCountMismatch {
                field: InputField::Units,
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure leading/trailing whitespace and short inputs are rejected with
    // the offending field named.
    //
    // Given
    // -----
    // - A trailing space on the amplitudes string and, separately, a units
    //   string with too few tokens.
    //
    // Expect
    // ------
    // - `TokenCountMismatch` naming `Amplitudes` (actual 3) and `Units`
    //   (actual 1) respectively.
    fn parse_utterance_rejects_wrong_token_counts() {
        assert_eq!(
            parse_utterance(2, 0, "4 4", "1 0.5 ").unwrap_err(),
            RhythmError::TokenCountMismatch {
                field: InputField::Amplitudes,
                expected: 2,
                actual: 3
            }
        );
        assert_eq!(
            parse_utterance(2, 0, "4", "1 0.5").unwrap_err(),
            RhythmError::TokenCountMismatch { field: InputField::Units, expected: 2, actual: 1 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure malformed numeric tokens are reported with field, position, and
    // the raw token. A fractional unit count is malformed: the model
    // consumes integral unit counts.
    //
    // Given
    // -----
    // - Units "4 4.5" (fractional) and amplitudes "1 x" (non-numeric).
    //
    // Expect
    // ------
    // - `MalformedToken { field: Units, index: 1, token: "4.5" }` and
    //   `MalformedToken { field: Amplitudes, index: 1, token: "x" }`.
    fn parse_utterance_rejects_malformed_tokens() {
        assert_eq!(
            parse_utterance(2, 0, "4 4.5", "1 0.5").unwrap_err(),
            RhythmError::MalformedToken {
                field: InputField::Units,
                index: 1,
                token: "4.5".to_string()
            }
        );
        assert_eq!(
            parse_utterance(2, 0, "4 4", "1 x").unwrap_err(),
            RhythmError::MalformedToken {
                field: InputField::Amplitudes,
                index: 1,
                token: "x".to_string()
            }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure a zero group count fails fast before any string is inspected.
    //
    // Given
    // -----
    // - `group_count = 0` with otherwise arbitrary strings.
    //
    // Expect
    // ------
    // - `Err(RhythmError::NoStressGroups)`.
    fn parse_utterance_rejects_zero_group_count() {
        assert_eq!(parse_utterance(0, 0, "", "").unwrap_err(), RhythmError::NoStressGroups);
    }
}
