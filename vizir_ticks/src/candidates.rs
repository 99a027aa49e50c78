// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate tick counts from pixel density.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Size;
use smallvec::SmallVec;

use crate::config::TickConfig;
use crate::math::to_count;

/// Tick counts to try, ascending. Typical bands yield well under eight entries.
pub type TickCandidates = SmallVec<[usize; 8]>;

/// Returns the tick counts worth computing a scale for.
///
/// An explicit `tick_count` is the only candidate. Otherwise every count whose spacing on the
/// usable axis length falls inside the configured pixel band is returned, ascending. Counts
/// below two cannot span a range and are skipped; if nothing is left, the result is `[1]`.
pub fn tick_count_candidates(
    dimension: Size,
    is_vertical: bool,
    tick_count: Option<usize>,
    config: &TickConfig,
) -> TickCandidates {
    if let Some(count) = tick_count {
        return smallvec::smallvec![count];
    }
    let usable = config.usable_length(dimension.width, dimension.height, is_vertical);
    let first = to_count((usable / config.max_pixel_step).floor()).max(2);
    let last = to_count((usable / config.min_pixel_step).floor()) + 1;
    let candidates: TickCandidates = (first..=last).collect();
    if candidates.is_empty() {
        smallvec::smallvec![1]
    } else {
        candidates
    }
}
