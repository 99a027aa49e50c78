// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-candidate scale computation.
//!
//! For one tick count this pads the data range, applies override bounds, derives a nice step,
//! and snaps the scale onto that step's grid. Everything here runs in the magnitude-normalized
//! domain.

use crate::axis::ChartType;
use crate::math::{add, floor_to_multiple, mul, steps_to_cover, sub};
use crate::step::{next_nice_step, normalize_step};
use crate::tick_info::{ScaleRange, TickInfo};

/// Headroom added above (and, away from zero, below) the data, as a fraction of its span.
const HEADROOM_RATIO: f64 = 0.05;

/// Data concentrated above `max / ZERO_ANCHOR_RATIO` keeps zero as its scale minimum.
const ZERO_ANCHOR_RATIO: f64 = 6.0;

/// Upper bound on step widenings in fixed-count mode; each one at least doubles the step.
const MAX_WIDENINGS: usize = 64;

/// Override bounds in the working domain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Pins {
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
}

/// Inputs shared by every candidate of one computation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScaleInput {
    /// True data extent.
    pub(crate) data: ScaleRange,
    pub(crate) pins: Pins,
    pub(crate) chart_type: ChartType,
}

impl ScaleInput {
    /// Padded scale with overrides substituted.
    ///
    /// A lone override sitting on the far data extreme (a `min` equal to the data max, or a
    /// `max` equal to the data min) would leave nothing to span; the free side then gets
    /// headroom measured from the data span instead.
    pub(crate) fn target(&self) -> ScaleRange {
        let padded = padded_scale(self.data.min, self.data.max);
        let target = ScaleRange::new(
            self.pins.min.unwrap_or(padded.min),
            self.pins.max.unwrap_or(padded.max),
        );
        if target.min < target.max {
            return target;
        }
        let headroom = self.data.span() * HEADROOM_RATIO;
        match (self.pins.min, self.pins.max) {
            (Some(min), None) => ScaleRange::new(min, add(min, headroom)),
            (None, Some(max)) => ScaleRange::new(sub(max, headroom), max),
            _ => target,
        }
    }

    /// Whether the lowest tick must stay strictly below the data minimum.
    fn keeps_min_below_data(&self) -> bool {
        self.pins.min.is_none() && (self.chart_type.is_connected() || self.data.min > 0.0)
    }
}

/// Pads `[min, max]` with headroom, mirroring all-negative ranges.
pub(crate) fn padded_scale(min: f64, max: f64) -> ScaleRange {
    if min < 0.0 && max <= 0.0 {
        let mirrored = pad_non_negative_span(-max, -min);
        // `0.0 - x` rather than `-x` so a zero bound does not come back as `-0.0`.
        return ScaleRange::new(0.0 - mirrored.max, 0.0 - mirrored.min);
    }
    pad_non_negative_span(min, max)
}

fn pad_non_negative_span(min: f64, max: f64) -> ScaleRange {
    // Work zero-based when the range crosses zero, then shift back.
    let (offset, min, max) = if min < 0.0 {
        (min, 0.0, max - min)
    } else {
        (0.0, min, max)
    };
    let headroom = (max - min) * HEADROOM_RATIO;
    let scale_max = max + headroom + offset;
    let scale_min = if max / ZERO_ANCHOR_RATIO > min {
        offset
    } else {
        min - headroom + offset
    };
    ScaleRange::new(scale_min, scale_max)
}

/// Computes the scale for one candidate count, letting the tick count grow to cover the range.
pub(crate) fn calculate(input: &ScaleInput, tick_count: usize) -> TickInfo {
    let target = input.target();
    let intervals = tick_count.saturating_sub(1).max(1);
    let step = normalize_step(target.span() / intervals as f64);

    let mut min = match input.pins.min {
        Some(pinned) => pinned,
        None => floor_to_multiple(target.min, step),
    };
    let mut max = add(min, mul(step, tick_count.saturating_sub(1)));
    if max < target.max {
        max = add(max, mul(step, steps_to_cover(sub(target.max, max), step)));
    }

    // Keep the outermost ticks off the data extremes.
    if input.pins.max.is_none() && max == input.data.max {
        max = add(max, step);
    }
    if input.keeps_min_below_data() && min == input.data.min {
        min = sub(min, step);
    }
    let max = input.pins.max.unwrap_or(max);

    TickInfo::from_scale(ScaleRange::new(min, max), step)
}

/// Computes a scale with exactly `tick_count` ticks (`>= 2`).
///
/// Rather than extending the scale by whole steps, the step is widened to the next nice value
/// until the fixed number of ticks covers the padded range. When both bounds are pinned the
/// step is the exact quotient of the pinned span.
///
/// Returns `None` if no layout covers the range within the widening budget.
pub(crate) fn calculate_fixed(input: &ScaleInput, tick_count: usize) -> Option<TickInfo> {
    if let (Some(min), Some(max)) = (input.pins.min, input.pins.max) {
        return Some(TickInfo::spanning(ScaleRange::new(min, max), tick_count));
    }
    let target = input.target();
    let intervals = tick_count.saturating_sub(1).max(1);

    let mut step = normalize_step(target.span() / intervals as f64);
    for _ in 0..MAX_WIDENINGS {
        if step <= 0.0 || !step.is_finite() {
            return None;
        }
        let grid = fixed_layout(input, target, step, intervals);
        if covers(input, target, &grid) {
            return Some(grid);
        }
        if input.pins.min.is_none() && input.pins.max.is_none() {
            // With few intervals a grid-aligned window cannot straddle zero; centre it instead.
            let centred = centred_layout(target, step, intervals);
            if covers(input, target, &centred) {
                return Some(centred);
            }
        }
        step = next_nice_step(step);
    }
    None
}

fn fixed_layout(input: &ScaleInput, target: ScaleRange, step: f64, intervals: usize) -> TickInfo {
    let span = mul(step, intervals);
    let min = match (input.pins.min, input.pins.max) {
        (Some(min), _) => min,
        (None, Some(max)) => sub(max, span),
        (None, None) => {
            let min = floor_to_multiple(target.min, step);
            if input.keeps_min_below_data() && min == input.data.min {
                sub(min, step)
            } else {
                min
            }
        }
    };
    TickInfo::from_count(min, step, intervals + 1)
}

/// Places the span around the middle of `target`, with the min on a tenth-of-a-step grid.
fn centred_layout(target: ScaleRange, step: f64, intervals: usize) -> TickInfo {
    let span = mul(step, intervals);
    let slack = span - target.span();
    let min = floor_to_multiple(target.min - slack / 2.0, step / 10.0);
    TickInfo::from_count(min, step, intervals + 1)
}

fn covers(input: &ScaleInput, target: ScaleRange, ticks: &TickInfo) -> bool {
    let scale = ticks.scale;
    let min_ok = input.pins.min.is_some()
        || (scale.min <= target.min
            && (!input.keeps_min_below_data() || scale.min < input.data.min));
    let max_ok = input.pins.max.is_some()
        || (scale.max >= target.max && scale.max > input.data.max);
    min_ok && max_ok
}
