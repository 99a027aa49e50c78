// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing between finished candidates.

use crate::math::{decimal_places, pow10};
use crate::tick_info::{ScaleRange, TickInfo};

/// Wasted scale around the data, weighted by the fractional digits the step introduces.
///
/// Lower is better.
pub(crate) fn comparing_value(ticks: &TickInfo, data: ScaleRange) -> f64 {
    let slack = (ticks.scale.max - data.max).abs() + (data.min - ticks.scale.min).abs();
    slack * pow10(decimal_places(ticks.step))
}

/// Returns the candidate with the lowest [`comparing_value`]; ties keep the earliest.
pub(crate) fn select_best<I>(candidates: I, data: ScaleRange) -> Option<TickInfo>
where
    I: IntoIterator<Item = TickInfo>,
{
    let mut best: Option<(f64, TickInfo)> = None;
    for candidate in candidates {
        let score = comparing_value(&candidate, data);
        tracing::trace!(
            tick_count = candidate.tick_count,
            min = candidate.scale.min,
            max = candidate.scale.max,
            step = candidate.step,
            score,
            "scored tick candidate"
        );
        if best.as_ref().is_none_or(|(best_score, _)| score < *best_score) {
            best = Some((score, candidate));
        }
    }
    best.map(|(_, ticks)| ticks)
}
