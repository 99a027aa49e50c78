// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis tick scales for `VizIR` charts.
//!
//! Given the values plotted along an axis, the pixel size of the chart and optional user
//! overrides, this crate picks a human-readable scale: a minimum, a maximum, a "nice" step
//! (`1`, `2` or `5` times a power of ten) and the tick values in between.
//!
//! The search works like this:
//! - **Candidates**: tick counts whose spacing stays legible at the axis' pixel length.
//! - **Per candidate**: pad the data, snap to a nice step, trim surplus padding, and try a
//!   halved step.
//! - **Selection**: the candidate wasting the least scale around the data wins, with a penalty
//!   for steps that add fractional digits.
//!
//! Data smaller than one in magnitude is lifted by a power of ten for the duration of the search
//! so that the step arithmetic works on integer-like values.
//!
//! Rendering is out of scope; [`AxisScale`] carries numbers and label strings only.
//!
//! ```
//! use kurbo::Size;
//! use vizir_ticks::{AxisSpec, ChartType, compute_axis_scale};
//!
//! let values = [1000.0, 2500.0, 8000.0];
//! let axis = AxisSpec::vertical(ChartType::Column);
//! let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();
//! assert!(scale.scale().min <= 1000.0 && scale.scale().max >= 8000.0);
//! assert_eq!(scale.labels().len(), scale.tick_count());
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod calculator;
mod candidates;
mod config;
mod engine;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod magnitude;
mod math;
mod refine;
#[cfg(test)]
mod scenario_tests;
mod select;
mod step;
mod tick_info;

pub use axis::{AxisOptions, AxisSpec, ChartType};
pub use candidates::{TickCandidates, tick_count_candidates};
pub use config::TickConfig;
pub use engine::{AxisScale, TickScaleEngine, compute_axis_scale};
pub use error::{OverrideBound, TickScaleError, TickScaleResult};
pub use format::{FormatFn, LabelFormatter, format_tick_with_step};
pub use magnitude::MagnitudeNormalizer;
pub use step::normalize_step;
pub use tick_info::{ScaleRange, TickInfo};
