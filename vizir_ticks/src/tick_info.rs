// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick scale values passed between pipeline stages.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::math::{add, decimal_places, mul, pow10, to_count};

/// Hard cap on generated labels.
pub(crate) const MAX_LABELS: usize = 10_000;

/// A closed numeric domain `[min, max]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ScaleRange {
    /// Creates a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies inside the range (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Smallest range containing every value, or `None` for an empty slice.
    pub(crate) fn of_values(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let mut range = Self::new(*first, *first);
        for &v in rest {
            range.min = range.min.min(v);
            range.max = range.max.max(v);
        }
        Some(range)
    }
}

/// One fully computed tick layout: scale, step and the tick values.
///
/// `labels.len() == tick_count` holds for every value the pipeline produces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInfo {
    /// Axis domain.
    pub scale: ScaleRange,
    /// Distance between consecutive ticks (zero for a single-tick axis).
    pub step: f64,
    /// Number of ticks.
    pub tick_count: usize,
    /// Tick values, ascending.
    pub labels: Vec<f64>,
}

impl TickInfo {
    /// Ticks from `scale.min` to `scale.max` inclusive, `step` apart.
    ///
    /// `scale.max` need not be on the grid (it may be an explicit override); the last tick is
    /// then the largest grid value below it.
    pub(crate) fn from_scale(scale: ScaleRange, step: f64) -> Self {
        if step <= 0.0 || scale.max <= scale.min {
            return Self::single(scale.min);
        }
        let factor = pow10(decimal_places(scale.min).max(decimal_places(step)));
        let scaled_min = (scale.min * factor).round();
        let scaled_step = (step * factor).round();
        let intervals = ((scale.max * factor - scaled_min) / scaled_step + 1e-9).floor();
        let count = (to_count(intervals) + 1).min(MAX_LABELS);
        let labels = (0..count)
            .map(|i| (scaled_min + scaled_step * i as f64) / factor)
            .collect::<Vec<_>>();
        Self {
            scale,
            step,
            tick_count: labels.len(),
            labels,
        }
    }

    /// `count` ticks starting at `min`, `step` apart.
    pub(crate) fn from_count(min: f64, step: f64, count: usize) -> Self {
        let labels = (0..count).map(|i| add(min, mul(step, i))).collect::<Vec<_>>();
        let max = labels.last().copied().unwrap_or(min);
        Self {
            scale: ScaleRange::new(min, max),
            step,
            tick_count: labels.len(),
            labels,
        }
    }

    /// `count` ticks evenly dividing a fixed `[min, max]`, with both ends exact.
    ///
    /// The step is the plain quotient of the span, so it need not be a nice number.
    pub(crate) fn spanning(scale: ScaleRange, count: usize) -> Self {
        if count < 2 || scale.max <= scale.min {
            return Self::single(scale.min);
        }
        let intervals = (count - 1) as f64;
        let step = scale.span() / intervals;
        let labels = (0..count)
            .map(|i| {
                if i + 1 == count {
                    scale.max
                } else {
                    scale.min + scale.span() * (i as f64 / intervals)
                }
            })
            .collect::<Vec<_>>();
        Self {
            scale,
            step,
            tick_count: count,
            labels,
        }
    }

    /// A zero-step axis with one tick at `value`.
    pub(crate) fn single(value: f64) -> Self {
        Self {
            scale: ScaleRange::new(value, value),
            step: 0.0,
            tick_count: 1,
            labels: alloc::vec![value],
        }
    }
}
