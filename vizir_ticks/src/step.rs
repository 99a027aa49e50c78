// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" step rounding.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::math::pow10;

/// Multipliers a nice step may use within one power of ten.
const LADDER: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Relative slack when matching a ladder value, so that `normalize_step` is idempotent in the
/// presence of one-ulp representation error.
const LADDER_TOLERANCE: f64 = 1e-9;

/// Rounds `step` up to the nearest `1`, `2`, `5` or `10` times a power of ten.
///
/// Steps below one are lifted a decimal order at a time until they land in `[1, 10)`, rounded
/// there, and divided back down in a single division. Zero maps to zero and the sign of a
/// negative step is preserved. Non-finite input yields zero.
///
/// ```
/// use vizir_ticks::normalize_step;
///
/// assert_eq!(normalize_step(1670.0), 2000.0);
/// assert_eq!(normalize_step(0.3), 0.5);
/// assert_eq!(normalize_step(7.0), 10.0);
/// ```
pub fn normalize_step(step: f64) -> f64 {
    if !step.is_finite() || step == 0.0 {
        return 0.0;
    }
    let magnitude = step.abs();
    let nice = if magnitude < 1.0 {
        let mut lifted = magnitude;
        let mut depth = 0;
        while lifted < 1.0 {
            lifted *= 10.0;
            depth += 1;
        }
        ladder_round(lifted) / pow10(depth)
    } else {
        let base = order_of_magnitude(magnitude);
        ladder_round(magnitude / base) * base
    };
    if step < 0.0 { -nice } else { nice }
}

/// Returns the next nice step strictly above `step`.
pub(crate) fn next_nice_step(step: f64) -> f64 {
    normalize_step(step * (1.0 + 1e-6))
}

/// Rounds a value in `[1, 10]` up to the ladder.
fn ladder_round(fraction: f64) -> f64 {
    LADDER
        .iter()
        .copied()
        .find(|nice| fraction <= nice * (1.0 + LADDER_TOLERANCE))
        .unwrap_or(10.0)
}

/// Largest power of ten `<= value`, for `value >= 1`.
fn order_of_magnitude(value: f64) -> f64 {
    let estimate = value.log10().floor().max(0.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite f64 is below 309"
    )]
    let mut exp = estimate as u32;
    // `log10` may land one ulp on the wrong side of an exact power.
    while exp > 0 && pow10(exp) > value {
        exp -= 1;
    }
    while pow10(exp + 1) <= value {
        exp += 1;
    }
    pow10(exp)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rounds_up_to_ladder() {
        assert_eq!(normalize_step(1.0), 1.0, "ladder value is kept");
        assert_eq!(normalize_step(1.5), 2.0, "1.5 -> 2");
        assert_eq!(normalize_step(2.1), 5.0, "2.1 -> 5");
        assert_eq!(normalize_step(7.0), 10.0, "7 -> 10");
        assert_eq!(normalize_step(1043.75), 2000.0, "thousands");
        assert_eq!(normalize_step(927.8), 1000.0, "rounds into the next decade");
    }

    #[test]
    fn sub_unit_steps_recurse_down() {
        assert_eq!(normalize_step(0.3), 0.5, "0.3 -> 0.5");
        assert_eq!(normalize_step(0.07), 0.1, "0.07 -> 0.1");
        assert_eq!(normalize_step(0.0012), 0.002, "0.0012 -> 0.002");
    }

    #[test]
    fn zero_and_sign() {
        assert_eq!(normalize_step(0.0), 0.0, "zero is unchanged");
        assert_eq!(normalize_step(-3.0), -5.0, "sign is preserved");
        assert_eq!(normalize_step(f64::NAN), 0.0, "NaN");
    }

    #[test]
    fn idempotent() {
        let samples = [
            0.0, 1e-7, 0.00123, 0.03, 0.2, 0.5, 0.9999, 1.0, 1.2, 3.3, 9.99, 10.0, 42.0, 99.0,
            100.0, 333.0, 1670.0, 8350.0, 12345.678, 1e9, 7.5e15,
        ];
        for x in samples {
            let once = normalize_step(x);
            assert_eq!(normalize_step(once), once, "normalize_step({x}) is not a fixed point");
        }
    }

    #[test]
    fn next_nice_step_climbs_the_ladder() {
        assert_eq!(next_nice_step(1.0), 2.0, "1 -> 2");
        assert_eq!(next_nice_step(2.0), 5.0, "2 -> 5");
        assert_eq!(next_nice_step(5.0), 10.0, "5 -> 10");
        assert_eq!(next_nice_step(10.0), 20.0, "10 -> 20");
        assert_eq!(next_nice_step(0.5), 1.0, "0.5 -> 1");
    }
}
