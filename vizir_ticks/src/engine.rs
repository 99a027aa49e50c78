// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tick-scale pipeline.
//!
//! One call runs, in order:
//! - input validation,
//! - magnitude normalization of data and overrides,
//! - candidate tick counts from pixel density,
//! - per candidate: scale calculation, then tightening and step halving,
//! - selection of the best candidate,
//! - inverse magnitude normalization and label formatting.
//!
//! Every stage is a pure function of its inputs, so independent axes can be computed in any
//! order (or on different threads) with identical results.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;

use crate::axis::AxisSpec;
use crate::calculator::{Pins, ScaleInput, calculate, calculate_fixed};
use crate::candidates::tick_count_candidates;
use crate::config::TickConfig;
use crate::error::{OverrideBound, TickScaleError, TickScaleResult};
use crate::format::LabelFormatter;
use crate::magnitude::MagnitudeNormalizer;
use crate::refine::refine;
use crate::select::select_best;
use crate::tick_info::{MAX_LABELS, ScaleRange, TickInfo};

/// The computed scale of one axis, ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisScale {
    /// Numeric ticks in data space.
    pub ticks: TickInfo,
    /// Rendered tick labels, one per tick.
    pub display_labels: Vec<String>,
}

impl AxisScale {
    /// Number of ticks.
    pub fn tick_count(&self) -> usize {
        self.ticks.tick_count
    }

    /// Axis domain.
    pub fn scale(&self) -> ScaleRange {
        self.ticks.scale
    }

    /// Distance between consecutive ticks.
    pub fn step(&self) -> f64 {
        self.ticks.step
    }

    /// Numeric tick values.
    pub fn labels(&self) -> &[f64] {
        &self.ticks.labels
    }
}

/// Computes axis tick scales with a fixed configuration and label formatter.
#[derive(Clone, Debug, Default)]
pub struct TickScaleEngine {
    config: TickConfig,
    formatter: LabelFormatter,
}

impl TickScaleEngine {
    /// Creates an engine with the default configuration and plain labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: TickConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the label formatter.
    pub fn with_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &TickConfig {
        &self.config
    }

    /// Computes the tick scale for `values` drawn on an axis of `axis` in a chart of
    /// `dimension` pixels.
    ///
    /// Fails without producing any scale when the input is invalid (see [`TickScaleError`]).
    /// A range whose effective bounds coincide yields a single tick with a zero step.
    pub fn compute(
        &self,
        values: &[f64],
        dimension: Size,
        axis: &AxisSpec,
    ) -> TickScaleResult<AxisScale> {
        let result = self.compute_ticks(values, dimension, axis);
        if let Err(err) = &result {
            tracing::debug!(
                title = axis.options.title.as_deref().unwrap_or_default(),
                error = %err,
                "rejected tick scale input"
            );
        }
        let ticks = result?;
        let display_labels = self.formatter.format_all(&ticks.labels, ticks.step);
        Ok(AxisScale {
            ticks,
            display_labels,
        })
    }

    fn compute_ticks(
        &self,
        values: &[f64],
        dimension: Size,
        axis: &AxisSpec,
    ) -> TickScaleResult<TickInfo> {
        self.config.validate()?;
        let data = validate_values(values)?;
        validate_dimension(dimension)?;
        let pins = validate_overrides(axis, data)?;

        let normalizer = MagnitudeNormalizer::for_range(data.min, data.max);
        let input = ScaleInput {
            data: normalizer.normalize_range(data),
            pins: Pins {
                min: pins.min.map(|v| normalizer.normalize(v)),
                max: pins.max.map(|v| normalizer.normalize(v)),
            },
            chart_type: axis.chart_type,
        };

        if let Some(value) = degenerate_value(&input) {
            tracing::debug!(value, "degenerate range, single tick");
            return Ok(normalizer.denormalize_ticks(TickInfo::single(value)));
        }

        let candidates = tick_count_candidates(
            dimension,
            axis.is_vertical,
            axis.options.tick_count,
            &self.config,
        );
        tracing::debug!(
            title = axis.options.title.as_deref().unwrap_or_default(),
            candidates = ?candidates.as_slice(),
            multiplier = normalizer.multiplier(),
            "computing tick scale"
        );

        let best = match axis.options.tick_count {
            Some(count) if count >= 2 => calculate_fixed(&input, count)
                .ok_or(TickScaleError::InvalidTickCount { tick_count: count })?,
            // A single requested tick grows like the `[1]` fallback candidate.
            _ => {
                let finished = candidates.iter().map(|&count| {
                    let candidate = calculate(&input, count);
                    refine(&candidate, &input, count)
                });
                // Candidates are never empty, so a best one always exists.
                select_best(finished, input.data)
                    .unwrap_or_else(|| TickInfo::single(input.data.min))
            }
        };
        tracing::debug!(
            tick_count = best.tick_count,
            step = best.step,
            min = best.scale.min,
            max = best.scale.max,
            "selected tick scale"
        );
        Ok(normalizer.denormalize_ticks(best))
    }
}

/// Computes an axis tick scale with the default configuration and plain labels.
pub fn compute_axis_scale(
    values: &[f64],
    dimension: Size,
    axis: &AxisSpec,
) -> TickScaleResult<AxisScale> {
    TickScaleEngine::new().compute(values, dimension, axis)
}

fn validate_values(values: &[f64]) -> TickScaleResult<ScaleRange> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(TickScaleError::NonFiniteValue { index });
    }
    ScaleRange::of_values(values).ok_or(TickScaleError::EmptyValues)
}

fn validate_dimension(dimension: Size) -> TickScaleResult<()> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(dimension.width) && valid(dimension.height) {
        Ok(())
    } else {
        Err(TickScaleError::InvalidDimension {
            width: dimension.width,
            height: dimension.height,
        })
    }
}

/// The single tick value when there is no range to span.
///
/// Either both bounds are pinned to the same value, or every data value is equal and no lone
/// pin moves away from it.
fn degenerate_value(input: &ScaleInput) -> Option<f64> {
    match (input.pins.min, input.pins.max) {
        (Some(min), Some(max)) => (min == max).then_some(min),
        (min, max) => {
            let value = input.data.min;
            let flat = input.data.min == input.data.max;
            (flat && min.or(max).is_none_or(|pin| pin == value)).then_some(value)
        }
    }
}

fn validate_overrides(axis: &AxisSpec, data: ScaleRange) -> TickScaleResult<Pins> {
    let options = &axis.options;
    if let Some(tick_count) = options.tick_count.filter(|&n| n == 0 || n > MAX_LABELS) {
        return Err(TickScaleError::InvalidTickCount { tick_count });
    }
    if options.min.is_some_and(|v| !v.is_finite()) {
        return Err(TickScaleError::NonFiniteOverride {
            bound: OverrideBound::Min,
        });
    }
    if options.max.is_some_and(|v| !v.is_finite()) {
        return Err(TickScaleError::NonFiniteOverride {
            bound: OverrideBound::Max,
        });
    }
    match (options.min, options.max) {
        (Some(min), Some(max)) if min > max => Err(TickScaleError::InvertedOverride { min, max }),
        (Some(min), None) if min > data.max => Err(TickScaleError::ConflictingOverride {
            bound: OverrideBound::Min,
            value: min,
            data_min: data.min,
            data_max: data.max,
        }),
        (None, Some(max)) if max < data.min => Err(TickScaleError::ConflictingOverride {
            bound: OverrideBound::Max,
            value: max,
            data_min: data.min,
            data_max: data.max,
        }),
        (min, max) => Ok(Pins { min, max }),
    }
}
