// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;

use kurbo::Size;

use crate::{AxisScale, AxisSpec, ChartType, TickScaleEngine, compute_axis_scale};

fn assert_close(a: f64, b: f64, what: &str) {
    let eps = 1e-9 * a.abs().max(b.abs()).max(1.0);
    assert!((a - b).abs() <= eps, "{what}: {a} != {b}");
}

fn thousands(from: i32, to: i32) -> Vec<f64> {
    (from..=to).map(|k| f64::from(k) * 1000.0).collect()
}

fn is_multiple(value: f64, step: f64) -> bool {
    let ratio = value / step;
    (ratio - ratio.round()).abs() < 1e-9
}

/// Structural invariants every non-degenerate result must satisfy.
fn assert_well_formed(scale: &AxisScale) {
    let ticks = &scale.ticks;
    assert_eq!(ticks.labels.len(), ticks.tick_count, "labels match count: {ticks:?}");
    assert_eq!(scale.display_labels.len(), ticks.tick_count, "one display label per tick");
    assert!(ticks.step > 0.0, "positive step: {ticks:?}");
    assert!(ticks.scale.min < ticks.scale.max, "ordered scale: {ticks:?}");
    assert_close(ticks.labels[0], ticks.scale.min, "first tick is the scale min");
    for pair in ticks.labels.windows(2) {
        assert_close(pair[1] - pair[0], ticks.step, "even spacing");
    }
    let last = ticks.labels[ticks.labels.len() - 1];
    assert!(last <= ticks.scale.max, "last tick inside scale: {ticks:?}");
}

fn assert_contains(scale: &AxisScale, values: &[f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(scale.scale().min <= min, "scale min {} above data min {min}", scale.scale().min);
    assert!(scale.scale().max >= max, "scale max {} below data max {max}", scale.scale().max);
}

#[test]
fn all_positive_data() {
    let values = thousands(1, 8);
    let axis = AxisSpec::vertical(ChartType::Column);
    let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();

    assert_well_formed(&scale);
    assert_contains(&scale, &values);
    assert!(is_multiple(scale.scale().min, scale.step()), "min on grid: {scale:?}");
    assert!(is_multiple(scale.scale().max, scale.step()), "max on grid: {scale:?}");
    assert_eq!(scale.step(), 1000.0, "step");
    assert_eq!(scale.scale().min, 0.0, "zero baseline");
    assert_eq!(scale.scale().max, 9000.0, "one step of headroom");
}

#[test]
fn all_negative_data() {
    let values = thousands(-8, -1);
    let axis = AxisSpec::vertical(ChartType::Column);
    let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();

    assert_well_formed(&scale);
    assert_contains(&scale, &values);
    assert!(scale.scale().max <= 0.0, "mirrored max stays at or below zero: {scale:?}");
    assert!(scale.scale().min <= scale.scale().max, "ordered");
}

#[test]
fn overrides_win_over_padding() {
    let values = [-5000.0, -1200.0, 3000.0, 10_000.0];
    let axis = AxisSpec::vertical(ChartType::Column)
        .with_min(-8000.0)
        .with_max(12_000.0);
    for dimension in [Size::new(1000.0, 500.0), Size::new(300.0, 900.0)] {
        let scale = compute_axis_scale(&values, dimension, &axis).unwrap();
        assert_well_formed(&scale);
        assert_eq!(scale.scale().min, -8000.0, "pinned min");
        assert_eq!(scale.scale().max, 12_000.0, "pinned max");
    }
}

#[test]
fn override_may_clip_data() {
    let values = [0.0, 50.0, 150.0];
    let axis = AxisSpec::vertical(ChartType::Column).with_max(100.0);
    let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();
    assert_well_formed(&scale);
    assert_eq!(scale.scale().max, 100.0, "clipping is accepted");
    assert!(scale.scale().min <= 0.0, "the other bound still contains the data");
}

#[test]
fn sub_unit_data_keeps_its_magnitude() {
    let values = [0.001, 0.002, 0.009];
    let axis = AxisSpec::vertical(ChartType::Column);
    let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();

    assert_well_formed(&scale);
    assert_contains(&scale, &values);
    assert_close(scale.step(), 0.002, "step");
    let expected = [0.0, 0.002, 0.004, 0.006, 0.008, 0.01];
    assert_eq!(scale.labels().len(), expected.len(), "count: {scale:?}");
    for (got, want) in scale.labels().iter().zip(expected) {
        assert_close(*got, want, "label");
    }
    assert_eq!(scale.display_labels[1], "0.002", "display keeps the magnitude");
}

#[test]
fn explicit_tick_count_is_honored() {
    let values = thousands(1, 8);
    let axis = AxisSpec::vertical(ChartType::Column).with_tick_count(5);
    for dimension in [
        Size::new(1000.0, 500.0),
        Size::new(200.0, 120.0),
        Size::new(3000.0, 2000.0),
    ] {
        let scale = compute_axis_scale(&values, dimension, &axis).unwrap();
        assert_eq!(scale.tick_count(), 5, "fixed count for {dimension:?}");
        assert_well_formed(&scale);
        assert_contains(&scale, &values);
    }
}

#[test]
fn explicit_tick_count_with_both_bounds_divides_evenly() {
    let values = [-5000.0, 10_000.0];
    let axis = AxisSpec::vertical(ChartType::Line)
        .with_min(-8000.0)
        .with_max(12_000.0)
        .with_tick_count(4);
    let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();
    assert_eq!(scale.tick_count(), 4, "count");
    assert_eq!(scale.scale().min, -8000.0, "min");
    assert_eq!(scale.scale().max, 12_000.0, "max");
    assert_eq!(scale.labels().last(), Some(&12_000.0), "last tick on the pinned max");
}

#[test]
fn line_charts_keep_ticks_off_the_lowest_sample() {
    let values = [0.0, 4.0, 7.0, 10.0];
    let axis = AxisSpec::vertical(ChartType::Line);
    let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();
    assert_well_formed(&scale);
    assert!(scale.scale().min < 0.0, "line min below the data: {scale:?}");

    let axis = AxisSpec::vertical(ChartType::Column);
    let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();
    assert_eq!(scale.scale().min, 0.0, "columns keep the zero baseline");
}

#[test]
fn containment_holds_across_inputs() {
    let datasets: [&[f64]; 12] = [
        &[1.0, 2.0, 3.0],
        &[0.5, 0.7],
        &[-0.3, 0.8],
        &[-123.4, 567.8],
        &[1_000_000.0, 1_000_005.0],
        &[-50.0, -49.0],
        &[0.0001, 0.0003],
        &[1e9, 5e9],
        &[-1.0, 1.0],
        &[0.0, 10.0],
        &[99.0, 101.0],
        &[-0.02, -0.001],
    ];
    let dimensions = [
        Size::new(1000.0, 500.0),
        Size::new(400.0, 150.0),
        Size::new(1600.0, 1200.0),
    ];
    let chart_types = [ChartType::Column, ChartType::Line, ChartType::Bar];
    for values in datasets {
        for dimension in dimensions {
            for chart_type in chart_types {
                for is_vertical in [true, false] {
                    let axis = AxisSpec::new(is_vertical, chart_type);
                    let scale = compute_axis_scale(values, dimension, &axis).unwrap();
                    assert_well_formed(&scale);
                    assert_contains(&scale, values);
                }
            }
        }
    }
}

#[test]
fn explicit_tick_count_contains_signed_data() {
    let datasets: [&[f64]; 10] = [
        &[1.0, 2.0, 3.0],
        &[-574.7, 5.9, -703.3, 429.7, 165.3, 665.0, 822.8],
        &[-123.4, 567.8],
        &[-50.0, -49.0],
        &[-8000.0, -3000.0, -1000.0],
        &[-1.0, 1.0],
        &[-0.3, 0.8],
        &[0.0, 10.0],
        &[99.0, 101.0],
        &[1e9, 5e9],
    ];
    for values in datasets {
        for tick_count in [2, 3, 4, 5, 7, 10] {
            for chart_type in [ChartType::Column, ChartType::Line] {
                let axis = AxisSpec::vertical(chart_type).with_tick_count(tick_count);
                let scale = compute_axis_scale(values, Size::new(1000.0, 500.0), &axis).unwrap();
                assert_eq!(scale.tick_count(), tick_count, "fixed count for {values:?}");
                assert_well_formed(&scale);
                assert_contains(&scale, values);
            }
        }
    }
}

#[test]
fn two_ticks_straddle_zero() {
    let values = [-574.7, 5.9, -703.3, 429.7, 165.3, 665.0, 822.8];
    let axis = AxisSpec::vertical(ChartType::Line).with_tick_count(2);
    let scale = compute_axis_scale(&values, Size::new(1000.0, 500.0), &axis).unwrap();
    assert_eq!(scale.labels(), &[-1000.0, 1000.0], "one step across zero: {scale:?}");
    assert_eq!(scale.step(), 2000.0, "step");
}

#[test]
fn single_value_is_one_tick() {
    let axis = AxisSpec::vertical(ChartType::Column);
    let scale = compute_axis_scale(&[3.7], Size::new(1000.0, 500.0), &axis).unwrap();
    assert_eq!(scale.tick_count(), 1, "one tick");
    assert_eq!(scale.labels(), &[3.7], "at the value");
    assert_eq!(scale.step(), 0.0, "zero step");
}

#[test]
fn independent_axes_do_not_interact() {
    let left_values = thousands(1, 8);
    let right_values = [0.001, 0.002, 0.009];
    let left = AxisSpec::vertical(ChartType::Column).with_title("left");
    let right = AxisSpec::vertical(ChartType::Line).with_title("right");
    let dimension = Size::new(1000.0, 500.0);
    let engine = TickScaleEngine::new();

    let left_first = (
        engine.compute(&left_values, dimension, &left).unwrap(),
        engine.compute(&right_values, dimension, &right).unwrap(),
    );
    let right_second = engine.compute(&right_values, dimension, &right).unwrap();
    let left_second = engine.compute(&left_values, dimension, &left).unwrap();
    assert_eq!(left_first.0, left_second, "left axis is order independent");
    assert_eq!(left_first.1, right_second, "right axis is order independent");

    let (threaded_left, threaded_right) = std::thread::scope(|s| {
        let l = s.spawn(|| engine.compute(&left_values, dimension, &left));
        let r = s.spawn(|| engine.compute(&right_values, dimension, &right));
        (l.join().unwrap(), r.join().unwrap())
    });
    assert_eq!(threaded_left.unwrap(), left_second, "left axis on another thread");
    assert_eq!(threaded_right.unwrap(), right_second, "right axis on another thread");
}
