// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Magnitude normalization for sub-unit data.
//!
//! Nice-step arithmetic on ranges like `[0.001, 0.009]` accumulates binary rounding error
//! (`0.001 * 3 != 0.003`). When both ends of the range are below one in magnitude, the pipeline
//! runs on the data scaled by a power of ten so that it works on integer-like values, and
//! divides the finished ticks back down once at the end.

use crate::math::pow10;
use crate::tick_info::{ScaleRange, TickInfo};

/// Largest exponent tried; `1e-308` still fits.
const MAX_EXPONENT: u32 = 308;

/// A power-of-ten multiplier applied to data before tick computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnitudeNormalizer {
    multiplier: f64,
}

impl Default for MagnitudeNormalizer {
    fn default() -> Self {
        Self { multiplier: 1.0 }
    }
}

impl MagnitudeNormalizer {
    /// Chooses the multiplier for data spanning `[min, max]`.
    ///
    /// If either bound has magnitude `>= 1` this is the identity. Otherwise the multiplier is the
    /// smallest power of ten lifting every non-zero bound to magnitude `>= 1`.
    pub fn for_range(min: f64, max: f64) -> Self {
        if min.abs() >= 1.0 || max.abs() >= 1.0 {
            return Self::default();
        }
        let exponent = lift_exponent(min).max(lift_exponent(max));
        Self {
            multiplier: pow10(exponent),
        }
    }

    /// The power of ten applied by [`Self::normalize`].
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Whether this normalizer leaves values unchanged.
    pub fn is_identity(&self) -> bool {
        self.multiplier == 1.0
    }

    /// Maps a data-space value into the working domain.
    pub fn normalize(&self, value: f64) -> f64 {
        value * self.multiplier
    }

    /// Maps a working-domain value back into data space.
    pub fn denormalize(&self, value: f64) -> f64 {
        value / self.multiplier
    }

    pub(crate) fn normalize_range(&self, range: ScaleRange) -> ScaleRange {
        ScaleRange::new(self.normalize(range.min), self.normalize(range.max))
    }

    /// Divides scale, step and every tick of `ticks` by the multiplier.
    pub fn denormalize_ticks(&self, ticks: TickInfo) -> TickInfo {
        if self.is_identity() {
            return ticks;
        }
        TickInfo {
            scale: ScaleRange::new(
                self.denormalize(ticks.scale.min),
                self.denormalize(ticks.scale.max),
            ),
            step: self.denormalize(ticks.step),
            tick_count: ticks.tick_count,
            labels: ticks
                .labels
                .into_iter()
                .map(|v| self.denormalize(v))
                .collect(),
        }
    }
}

/// Smallest `e` with `|value| * 10^e >= 1`; zero needs no lifting.
fn lift_exponent(value: f64) -> u32 {
    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return 0;
    }
    let mut exponent = 0;
    while exponent < MAX_EXPONENT && magnitude * pow10(exponent) < 1.0 {
        exponent += 1;
    }
    exponent
}
