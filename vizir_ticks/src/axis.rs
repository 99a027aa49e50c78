// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis inputs: orientation, chart type and user overrides.

extern crate alloc;

use alloc::string::String;

/// Chart families an axis can belong to.
///
/// Only connectedness matters to tick computation: axes of connected-line charts keep their
/// lowest tick strictly below the data so the line never rests on the axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartType {
    /// Horizontal bars.
    Bar,
    /// Vertical bars.
    #[default]
    Column,
    /// Connected line series.
    Line,
    /// Filled connected series.
    Area,
    /// Unconnected points.
    Scatter,
    /// Sized points.
    Bubble,
}

impl ChartType {
    /// Whether series of this type are drawn as connected lines.
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Line | Self::Area)
    }
}

/// User overrides for one axis.
///
/// An explicit `min` or `max` replaces the computed bound exactly, even if data then falls
/// outside the scale. An explicit `tick_count` pins the number of ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisOptions {
    /// Axis title; carried for collaborators and diagnostics, not used in the math.
    pub title: Option<String>,
    /// Explicit scale minimum.
    pub min: Option<f64>,
    /// Explicit scale maximum.
    pub max: Option<f64>,
    /// Explicit tick count (at least 1).
    pub tick_count: Option<usize>,
}

/// One axis to compute a tick scale for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisSpec {
    /// User overrides.
    pub options: AxisOptions,
    /// Whether the axis runs vertically (values mapped onto the chart height).
    pub is_vertical: bool,
    /// Chart type owning the axis.
    pub chart_type: ChartType,
}

impl AxisSpec {
    /// Creates an axis with no overrides.
    pub fn new(is_vertical: bool, chart_type: ChartType) -> Self {
        Self {
            options: AxisOptions::default(),
            is_vertical,
            chart_type,
        }
    }

    /// Convenience for a vertical (value) axis.
    pub fn vertical(chart_type: ChartType) -> Self {
        Self::new(true, chart_type)
    }

    /// Convenience for a horizontal axis.
    pub fn horizontal(chart_type: ChartType) -> Self {
        Self::new(false, chart_type)
    }

    /// Sets the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    /// Pins the scale minimum.
    pub fn with_min(mut self, min: f64) -> Self {
        self.options.min = Some(min);
        self
    }

    /// Pins the scale maximum.
    pub fn with_max(mut self, max: f64) -> Self {
        self.options.max = Some(max);
        self
    }

    /// Pins the number of ticks.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.options.tick_count = Some(tick_count);
        self
    }
}
