//! Comprehensive tests for hover hit-testing and tooltip debounce
//!
//! Tests cover:
//! - Hover state transitions (rebuild / clear / keep)
//! - Nearest-point lookup in view fractions
//! - Pick radius behavior across zoom levels

use quickview::hover::{locate_point, transition, HoverAction, HoverState, PointRef};
use quickview::series::ChartSeries;

use crate::common::{series_named, series_with_durations, BASE_TS};

fn point(series: usize, index: usize) -> PointRef {
    PointRef { series, index }
}

/// Visible spans matching the fixture series layout
fn spans() -> ((f64, f64), (f64, f64)) {
    let x_min = BASE_TS * 1000.0;
    ((x_min, x_min + 7_200_000.0), (0.0, 4.0))
}

// ============================================
// Transition Tests
// ============================================

#[test]
fn test_first_hover_rebuilds() {
    let state = HoverState::default();
    let (next, action) = transition(&state, Some(point(0, 1)));
    assert_eq!(action, HoverAction::Rebuild(point(0, 1)));
    assert_eq!(next.previous, Some(point(0, 1)));
}

#[test]
fn test_same_point_keeps_tooltip() {
    let state = HoverState {
        previous: Some(point(0, 1)),
    };
    let (next, action) = transition(&state, Some(point(0, 1)));
    assert_eq!(action, HoverAction::Keep);
    assert_eq!(next, state, "state must not churn while parked on a run");
}

#[test]
fn test_moving_to_new_index_rebuilds() {
    let state = HoverState {
        previous: Some(point(0, 1)),
    };
    let (next, action) = transition(&state, Some(point(0, 2)));
    assert_eq!(action, HoverAction::Rebuild(point(0, 2)));
    assert_eq!(next.previous, Some(point(0, 2)));
}

#[test]
fn test_moving_across_series_at_same_index_rebuilds() {
    // Identity is (series, index), not index alone
    let state = HoverState {
        previous: Some(point(0, 1)),
    };
    let (_, action) = transition(&state, Some(point(1, 1)));
    assert_eq!(action, HoverAction::Rebuild(point(1, 1)));
}

#[test]
fn test_leaving_clears_once_then_keeps() {
    let state = HoverState {
        previous: Some(point(0, 1)),
    };
    let (state, action) = transition(&state, None);
    assert_eq!(action, HoverAction::Clear);
    assert_eq!(state.previous, None);

    let (_, action) = transition(&state, None);
    assert_eq!(action, HoverAction::Keep, "a second empty frame must not re-clear");
}

#[test]
fn test_idle_pointer_keeps() {
    let (next, action) = transition(&HoverState::default(), None);
    assert_eq!(action, HoverAction::Keep);
    assert_eq!(next, HoverState::default());
}

// ============================================
// Hit-Test Tests
// ============================================

#[test]
fn test_exact_hit_found() {
    let series = vec![series_with_durations(&[2.0, 3.0])];
    let (x_span, y_span) = spans();
    let cursor = (series[0].points[0].time_ms, 2.0);
    assert_eq!(
        locate_point(&series, cursor, x_span, y_span),
        Some(point(0, 0))
    );
}

#[test]
fn test_near_miss_within_radius_found() {
    let series = vec![series_with_durations(&[2.0, 3.0])];
    let (x_span, y_span) = spans();
    // 108_000ms off on a 7_200_000ms span is 1.5% of the view
    let cursor = (series[0].points[1].time_ms + 108_000.0, 3.0);
    assert_eq!(
        locate_point(&series, cursor, x_span, y_span),
        Some(point(0, 1))
    );
}

#[test]
fn test_outside_radius_is_none() {
    let series = vec![series_with_durations(&[2.0, 3.0])];
    let (x_span, y_span) = spans();
    // 3% of the view exceeds the 2% pick radius
    let cursor = (series[0].points[0].time_ms + 216_000.0, 2.0);
    assert_eq!(locate_point(&series, cursor, x_span, y_span), None);
}

#[test]
fn test_cursor_near_second_run_picks_it() {
    let series = vec![series_with_durations(&[2.0, 2.0])];
    let (x_span, y_span) = spans();
    let cursor = (series[0].points[1].time_ms - 30_000.0, 2.0);
    assert_eq!(
        locate_point(&series, cursor, x_span, y_span),
        Some(point(0, 1))
    );
}

#[test]
fn test_nearest_of_two_candidates_wins() {
    // Both runs sit at the same timestamp, 0.1s apart on y; with a 4s
    // visible height both are inside the pick radius of a cursor between
    // them, and the closer one must win
    let series = vec![
        series_named("make build", &[2.0, 3.0]),
        series_named("make lint", &[2.1, 3.1]),
    ];
    let (x_span, y_span) = spans();
    let cursor = (series[1].points[0].time_ms, 2.06);
    assert_eq!(
        locate_point(&series, cursor, x_span, y_span),
        Some(point(1, 0))
    );
}

#[test]
fn test_radius_scales_with_zoom() {
    // The same time offset misses on a narrow window but hits on a wide one
    let series = vec![series_with_durations(&[2.0, 3.0])];
    let (x_span, y_span) = spans();
    let cursor = (series[0].points[0].time_ms + 216_000.0, 2.0);
    assert_eq!(locate_point(&series, cursor, x_span, y_span), None);

    let wide_x = (x_span.0, x_span.0 + 21_600_000.0);
    assert_eq!(
        locate_point(&series, cursor, wide_x, y_span),
        Some(point(0, 0))
    );
}

#[test]
fn test_no_series_is_none() {
    let series: Vec<ChartSeries> = Vec::new();
    let (x_span, y_span) = spans();
    assert_eq!(locate_point(&series, (0.0, 0.0), x_span, y_span), None);
}

#[test]
fn test_degenerate_span_is_none() {
    let series = vec![series_with_durations(&[2.0])];
    let cursor = (series[0].points[0].time_ms, 2.0);
    assert_eq!(
        locate_point(&series, cursor, (1_000.0, 1_000.0), (0.0, 4.0)),
        None
    );
    assert_eq!(
        locate_point(&series, cursor, (0.0, 1_000.0), (4.0, 4.0)),
        None
    );
}
