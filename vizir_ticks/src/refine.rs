// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-processing of a candidate scale: trimming surplus padding and halving the step.

use crate::calculator::ScaleInput;
use crate::math::{add, mul, sub};
use crate::tick_info::{ScaleRange, TickInfo};

/// Tightens `ticks`, then tries halving its step. `requested` is the candidate tick count the
/// scale was computed for.
pub(crate) fn refine(ticks: &TickInfo, input: &ScaleInput, requested: usize) -> TickInfo {
    let tightened = tighten(ticks, input);
    halve_step(tightened, input, requested)
}

/// Moves unpinned bounds toward the data by whole steps while the data stays strictly inside.
///
/// Pinned bounds never move.
pub(crate) fn tighten(ticks: &TickInfo, input: &ScaleInput) -> TickInfo {
    let step = ticks.step;
    if step <= 0.0 {
        return ticks.clone();
    }
    let mut min = ticks.scale.min;
    let mut max = ticks.scale.max;
    if input.pins.min.is_none() {
        for k in 1..ticks.tick_count {
            let raised = add(ticks.scale.min, mul(step, k));
            if raised >= input.data.min {
                break;
            }
            min = raised;
        }
    }
    if input.pins.max.is_none() {
        for k in 1..ticks.tick_count {
            let lowered = sub(ticks.scale.max, mul(step, k));
            if lowered <= input.data.max {
                break;
            }
            max = lowered;
        }
    }
    if min == ticks.scale.min && max == ticks.scale.max {
        return ticks.clone();
    }
    TickInfo::from_scale(ScaleRange::new(min, max), step)
}

/// Halves an even step when the denser layout is strictly closer to the requested count.
fn halve_step(ticks: TickInfo, input: &ScaleInput, requested: usize) -> TickInfo {
    if ticks.step <= 0.0 || ticks.step % 2.0 != 0.0 {
        return ticks;
    }
    let halved_count = ticks.tick_count * 2 - 1;
    if requested.abs_diff(halved_count) >= requested.abs_diff(ticks.tick_count) {
        return ticks;
    }
    let halved = TickInfo::from_scale(ticks.scale, ticks.step / 2.0);
    tighten(&halved, input)
}
