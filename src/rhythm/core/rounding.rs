//! Per-step decimal quantization of the simulated sequences.
//!
//! The model stores every sync and duration value rounded to 4 decimal
//! digits, and each recurrence step reads the *rounded* previous value, not
//! full precision. The quantization is part of the model's arithmetic, not a
//! display concern; dropping it changes the output sequences.
//!
//! Rounding mode is half away from zero (`f64::round` semantics).

/// Scale factor for the 4-decimal quantization grid.
pub const DECIMAL_SCALE: f64 = 1e4;

/// Round `value` to 4 decimal digits, half away from zero.
///
/// Applied to every sync and duration value before it is stored; the
/// recurrences then consume the rounded value on the next step.
#[inline]
pub fn round4(value: f64) -> f64 {
    (value * DECIMAL_SCALE).round() / DECIMAL_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Pin the quantization behavior on unambiguous probes away from binary
    // tie artifacts, for both signs.
    //
    // Given
    // -----
    // - 0.10564 (rounds down), 0.10566 (rounds up), -0.12346 (rounds away
    //   from zero), and an already-quantized value.
    //
    // Expect
    // ------
    // - 0.1056, 0.1057, -0.1235, and the input unchanged.
    fn round4_quantizes_to_four_decimals() {
        assert_eq!(round4(0.10564), 0.1056);
        assert_eq!(round4(0.10566), 0.1057);
        assert_eq!(round4(-0.12346), -0.1235);
        assert_eq!(round4(0.1056), 0.1056);
    }

    #[test]
    // Purpose
    // -------
    // Verify the first sync value of the reference scenario quantizes to the
    // documented 4-decimal figure.
    //
    // Given
    // -----
    // - w0 = 0.78 and a 4-unit group: raw sync = 0.78 * exp(-2).
    //
    // Expect
    // ------
    // - round4 yields exactly 0.1056.
    fn round4_matches_reference_sync_value() {
        let raw = 0.78 * (-2.0_f64).exp();
        assert_eq!(round4(raw), 0.1056);
    }
}
