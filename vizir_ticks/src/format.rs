// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::math::decimal_places;

/// A display transform applied to a rendered tick label.
pub type FormatFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Formats `value` with as many fractional digits as `step` needs.
///
/// Keeps every label on an axis at the same precision (`0.0`, `0.5`, `1.0`) and hides binary
/// noise such as `0.30000000000000004`.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return alloc::format!("{value}");
    }
    let decimals = decimal_places(step) as usize;
    // Avoid printing "-0" for values that round to zero.
    let value = if value == 0.0 { 0.0 } else { value };
    alloc::format!("{value:.decimals$}")
}

/// Produces display labels from numeric ticks.
///
/// With no transforms this is [`format_tick_with_step`]. Transforms are folded over the
/// step-formatted text in the order they were added. Numeric tick values are never changed.
#[derive(Clone, Default)]
pub struct LabelFormatter {
    transforms: Vec<FormatFn>,
}

impl core::fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LabelFormatter")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

impl LabelFormatter {
    /// Creates a formatter with no transforms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform.
    pub fn with_transform(
        mut self,
        transform: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.transforms.push(Arc::new(transform));
        self
    }

    /// Creates a formatter from an ordered list of transforms.
    pub fn from_transforms(transforms: impl IntoIterator<Item = FormatFn>) -> Self {
        Self {
            transforms: transforms.into_iter().collect(),
        }
    }

    /// Number of transforms applied after step formatting.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether only step formatting is applied.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Formats one tick value.
    pub fn format(&self, value: f64, step: f64) -> String {
        self.transforms
            .iter()
            .fold(format_tick_with_step(value, step), |label, transform| {
                transform(&label)
            })
    }

    /// Formats every tick value of an axis.
    pub fn format_all(&self, values: &[f64], step: f64) -> Vec<String> {
        values.iter().map(|v| self.format(*v, step)).collect()
    }
}
