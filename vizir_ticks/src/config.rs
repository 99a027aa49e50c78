// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration: the tick legibility band and fixed layout chrome.

use crate::error::{TickScaleError, TickScaleResult};

/// Pixel-density settings used to derive candidate tick counts.
///
/// The defaults are:
/// - `min_pixel_step = 40`, `max_pixel_step = 60` (one tick every 40-60 px)
/// - `vertical_chrome = 100` (title area and horizontal axis labels, subtracted from the height)
/// - `horizontal_chrome = 200` (vertical axis labels and legend, subtracted from the width)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickConfig {
    /// Smallest legible distance between two ticks, in pixels.
    pub min_pixel_step: f64,
    /// Largest useful distance between two ticks, in pixels.
    pub max_pixel_step: f64,
    /// Pixels of the chart height not available to a vertical axis.
    pub vertical_chrome: f64,
    /// Pixels of the chart width not available to a horizontal axis.
    pub horizontal_chrome: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            min_pixel_step: 40.0,
            max_pixel_step: 60.0,
            vertical_chrome: 100.0,
            horizontal_chrome: 200.0,
        }
    }
}

impl TickConfig {
    /// Sets the pixel band a tick interval should fall into.
    pub fn with_pixel_band(mut self, min_pixel_step: f64, max_pixel_step: f64) -> Self {
        self.min_pixel_step = min_pixel_step;
        self.max_pixel_step = max_pixel_step;
        self
    }

    /// Sets the chrome subtracted from the height (vertical axes) and width (horizontal axes).
    pub fn with_chrome(mut self, vertical: f64, horizontal: f64) -> Self {
        self.vertical_chrome = vertical;
        self.horizontal_chrome = horizontal;
        self
    }

    /// Pixel length available to an axis of the given orientation.
    pub fn usable_length(&self, width: f64, height: f64, is_vertical: bool) -> f64 {
        let length = if is_vertical {
            height - self.vertical_chrome
        } else {
            width - self.horizontal_chrome
        };
        length.max(0.0)
    }

    /// Checks the band is positive and ordered, and the chrome is non-negative.
    pub fn validate(&self) -> TickScaleResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.min_pixel_step) || !positive(self.max_pixel_step) {
            return Err(TickScaleError::InvalidConfig {
                reason: "pixel steps must be finite and positive",
            });
        }
        if self.min_pixel_step > self.max_pixel_step {
            return Err(TickScaleError::InvalidConfig {
                reason: "min_pixel_step is greater than max_pixel_step",
            });
        }
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if !non_negative(self.vertical_chrome) || !non_negative(self.horizontal_chrome) {
            return Err(TickScaleError::InvalidConfig {
                reason: "chrome must be finite and non-negative",
            });
        }
        Ok(())
    }
}
