// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by tick-scale computation.

use core::fmt;

/// Which override bound an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverrideBound {
    /// The explicit scale minimum.
    Min,
    /// The explicit scale maximum.
    Max,
}

impl fmt::Display for OverrideBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("min"),
            Self::Max => f.write_str("max"),
        }
    }
}

/// Invalid input detected before or during a tick-scale computation.
///
/// A computation either returns a complete [`crate::AxisScale`] or one of these; there are no
/// partial results.
#[derive(Clone, Debug, PartialEq)]
pub enum TickScaleError {
    /// No data values were supplied.
    EmptyValues,
    /// A data value was NaN or infinite.
    NonFiniteValue {
        /// Position of the offending value in the input.
        index: usize,
    },
    /// The chart dimension has a non-positive or non-finite side.
    InvalidDimension {
        /// Supplied width.
        width: f64,
        /// Supplied height.
        height: f64,
    },
    /// The requested tick count cannot produce a scale.
    ///
    /// Zero is never valid, and neither is a count above the 10 000 label cap.
    InvalidTickCount {
        /// Requested tick count.
        tick_count: usize,
    },
    /// An override bound was NaN or infinite.
    NonFiniteOverride {
        /// The offending bound.
        bound: OverrideBound,
    },
    /// Both bounds were overridden and `min > max`.
    InvertedOverride {
        /// Overridden minimum.
        min: f64,
        /// Overridden maximum.
        max: f64,
    },
    /// A single overridden bound lies beyond the opposite end of the data.
    ///
    /// For example `min` above every data value with no `max` override: the computed maximum
    /// would have to sit below the overridden minimum.
    ConflictingOverride {
        /// The overridden bound.
        bound: OverrideBound,
        /// Its value.
        value: f64,
        /// Smallest data value.
        data_min: f64,
        /// Largest data value.
        data_max: f64,
    },
    /// The engine configuration is unusable.
    InvalidConfig {
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl fmt::Display for TickScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValues => write!(f, "no data values supplied"),
            Self::NonFiniteValue { index } => {
                write!(f, "data value at index {index} is not finite")
            }
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid chart dimension {width}x{height}")
            }
            Self::InvalidTickCount { tick_count } => {
                write!(f, "tick count {tick_count} cannot produce a scale")
            }
            Self::NonFiniteOverride { bound } => {
                write!(f, "override {bound} is not finite")
            }
            Self::InvertedOverride { min, max } => {
                write!(f, "override min {min} is greater than override max {max}")
            }
            Self::ConflictingOverride {
                bound,
                value,
                data_min,
                data_max,
            } => write!(
                f,
                "override {bound} {value} conflicts with data range [{data_min}, {data_max}]"
            ),
            Self::InvalidConfig { reason } => write!(f, "invalid tick configuration: {reason}"),
        }
    }
}

impl core::error::Error for TickScaleError {}

/// Result alias for tick-scale operations.
pub type TickScaleResult<T> = Result<T, TickScaleError>;
