// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the axis scales `vizir_ticks` picks for a handful of sample inputs.
//!
//! Set `RUST_LOG=vizir_ticks=trace` to see every candidate and its score.

use std::process::ExitCode;

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use vizir_ticks::{AxisScale, AxisSpec, ChartType, LabelFormatter, TickScaleEngine};

struct Sample {
    name: &'static str,
    values: Vec<f64>,
    dimension: Size,
    axis: AxisSpec,
}

fn samples() -> Vec<Sample> {
    let chart = Size::new(1000.0, 500.0);
    let thousands: Vec<f64> = (1..=8).map(|k| f64::from(k) * 1000.0).collect();
    let negatives: Vec<f64> = thousands.iter().map(|v| -v).collect();
    vec![
        Sample {
            name: "positive columns",
            values: thousands.clone(),
            dimension: chart,
            axis: AxisSpec::vertical(ChartType::Column),
        },
        Sample {
            name: "negative columns",
            values: negatives,
            dimension: chart,
            axis: AxisSpec::vertical(ChartType::Column),
        },
        Sample {
            name: "pinned range",
            values: vec![-5000.0, -1200.0, 3000.0, 10_000.0],
            dimension: chart,
            axis: AxisSpec::vertical(ChartType::Column)
                .with_min(-8000.0)
                .with_max(12_000.0),
        },
        Sample {
            name: "sub-unit line",
            values: vec![0.001, 0.002, 0.009],
            dimension: chart,
            axis: AxisSpec::vertical(ChartType::Line),
        },
        Sample {
            name: "five ticks",
            values: thousands,
            dimension: chart,
            axis: AxisSpec::vertical(ChartType::Column).with_tick_count(5),
        },
        Sample {
            name: "horizontal bars",
            values: vec![-123.4, 567.8],
            dimension: Size::new(800.0, 400.0),
            axis: AxisSpec::horizontal(ChartType::Bar).with_title("revenue"),
        },
        Sample {
            name: "empty series",
            values: Vec::new(),
            dimension: chart,
            axis: AxisSpec::vertical(ChartType::Column),
        },
    ]
}

fn print_scale(name: &str, scale: &AxisScale) {
    println!(
        "{name:<18} [{}, {}] step {} ({} ticks)",
        scale.scale().min,
        scale.scale().max,
        scale.step(),
        scale.tick_count()
    );
    println!("{:<18} {}", "", scale.display_labels.join(" | "));
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let engine = TickScaleEngine::new().with_formatter(
        LabelFormatter::new().with_transform(|label| {
            // Group thousands in the integer part.
            let (int, frac) = label.split_once('.').map_or((label, None), |(i, f)| (i, Some(f)));
            let (sign, digits) = int.strip_prefix('-').map_or(("", int), |d| ("-", d));
            let mut grouped = String::new();
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(c);
            }
            match frac {
                Some(frac) => format!("{sign}{grouped}.{frac}"),
                None => format!("{sign}{grouped}"),
            }
        }),
    );

    let mut failures = 0_usize;
    for sample in samples() {
        match engine.compute(&sample.values, sample.dimension, &sample.axis) {
            Ok(scale) => print_scale(sample.name, &scale),
            Err(err) => {
                failures += 1;
                tracing::warn!(sample = sample.name, %err, "no scale");
            }
        }
    }
    tracing::info!(failures, "done");

    // The empty series is expected to fail.
    if failures == 1 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
