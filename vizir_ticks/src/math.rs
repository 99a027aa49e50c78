// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decimal-aware arithmetic used by the tick pipeline.
//!
//! Tick positions are sums of decimal steps (`0.1 + 0.2`), which drift in binary floating point.
//! These helpers lift both operands onto an integer grid (`10^decimal_places`), operate there,
//! and divide back once, so a value like `0.3` comes out as the same `f64` a literal would.

extern crate alloc;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Upper bound on the fractional digits tracked for a value.
///
/// `f64` carries ~15.9 significant decimal digits; anything past this is noise.
pub(crate) const MAX_DECIMAL_PLACES: u32 = 15;

const POW10: [f64; 16] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
];

/// Returns `10^exp`, exact for `exp <= 22`.
pub(crate) fn pow10(exp: u32) -> f64 {
    match POW10.get(exp as usize) {
        Some(p) => *p,
        None => 10_f64.powi(i32::try_from(exp).unwrap_or(i32::MAX)),
    }
}

/// Number of digits after the decimal point in the shortest representation of `value`.
pub(crate) fn decimal_places(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    // `Display` for f64 prints the shortest round-tripping digits and never uses an exponent.
    let text = alloc::format!("{}", value.abs());
    match text.split_once('.') {
        Some((_, fraction)) => u32::try_from(fraction.len())
            .unwrap_or(MAX_DECIMAL_PLACES)
            .min(MAX_DECIMAL_PLACES),
        None => 0,
    }
}

fn grid_factor(a: f64, b: f64) -> f64 {
    pow10(decimal_places(a).max(decimal_places(b)))
}

/// `a + b` computed on a shared decimal grid.
pub(crate) fn add(a: f64, b: f64) -> f64 {
    let factor = grid_factor(a, b);
    ((a * factor).round() + (b * factor).round()) / factor
}

/// `a - b` computed on a shared decimal grid.
pub(crate) fn sub(a: f64, b: f64) -> f64 {
    add(a, -b)
}

/// `step * count` computed on the step's decimal grid.
pub(crate) fn mul(step: f64, count: usize) -> f64 {
    let factor = pow10(decimal_places(step));
    (step * factor).round() * count as f64 / factor
}

/// Largest multiple of `step` that is `<= value`.
pub(crate) fn floor_to_multiple(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    let factor = grid_factor(value, step);
    let scaled_step = (step * factor).round();
    ((value * factor).round() / scaled_step).floor() * scaled_step / factor
}

/// Smallest whole number of `step`s that covers `distance`.
pub(crate) fn steps_to_cover(distance: f64, step: f64) -> usize {
    if step <= 0.0 || distance <= 0.0 {
        return 0;
    }
    let factor = grid_factor(distance, step);
    let steps = ((distance * factor).round() / (step * factor).round()).ceil();
    to_count(steps)
}

/// Converts a non-negative float count to `usize`, saturating at `u32::MAX`.
pub(crate) fn to_count(value: f64) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let clamped = value.min(f64::from(u32::MAX));
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/non-negative checks and capped at u32::MAX"
    )]
    {
        clamped as usize
    }
}
