//! Comprehensive tests for the shared time-window state
//!
//! Tests cover:
//! - Window selection and clamping
//! - Pending one-shot bound overrides
//! - Detail-plot bound feedback
//! - Degenerate rule ranges

use quickview::view::{TimeWindow, ViewState};

const RANGE_MIN: f64 = 1_000_000.0;
const RANGE_MAX: f64 = 2_000_000.0;

fn view() -> ViewState {
    ViewState::new(TimeWindow::new(RANGE_MIN, RANGE_MAX))
}

// ============================================
// TimeWindow Tests
// ============================================

#[test]
fn test_ordered_swaps_reversed_edges() {
    let window = TimeWindow::ordered(500.0, 100.0);
    assert_eq!(window.min, 100.0);
    assert_eq!(window.max, 500.0);
}

#[test]
fn test_width_and_contains() {
    let window = TimeWindow::new(100.0, 500.0);
    assert_eq!(window.width(), 400.0);
    assert!(window.contains(100.0));
    assert!(window.contains(500.0));
    assert!(!window.contains(500.1));
}

#[test]
fn test_clamp_shifts_left_overhang() {
    let range = TimeWindow::new(0.0, 1000.0);
    let clamped = TimeWindow::new(-200.0, 300.0).clamp_span_into(range);
    assert_eq!(clamped, TimeWindow::new(0.0, 500.0), "width preserved, window shifted");
}

#[test]
fn test_clamp_shifts_right_overhang() {
    let range = TimeWindow::new(0.0, 1000.0);
    let clamped = TimeWindow::new(800.0, 1300.0).clamp_span_into(range);
    assert_eq!(clamped, TimeWindow::new(500.0, 1000.0));
}

#[test]
fn test_clamp_wider_than_range_collapses_to_range() {
    let range = TimeWindow::new(0.0, 1000.0);
    let clamped = TimeWindow::new(-500.0, 2000.0).clamp_span_into(range);
    assert_eq!(clamped, range);
}

#[test]
fn test_clamp_inside_range_unchanged() {
    let range = TimeWindow::new(0.0, 1000.0);
    let window = TimeWindow::new(200.0, 700.0);
    assert_eq!(window.clamp_span_into(range), window);
}

// ============================================
// Initial State Tests
// ============================================

#[test]
fn test_view_starts_zoomed_out() {
    let view = view();
    assert_eq!(view.full(), TimeWindow::new(RANGE_MIN, RANGE_MAX));
    assert_eq!(view.window(), view.full());
    assert!(view.is_zoomed_out());
}

#[test]
fn test_initial_pending_fires_once() {
    // The first frame must push the full range into the plot
    let mut view = view();
    assert_eq!(view.take_pending(), Some(view.full()));
    assert_eq!(view.take_pending(), None);
}

#[test]
fn test_degenerate_range_padded() {
    let view = ViewState::new(TimeWindow::new(5_000.0, 5_000.0));
    assert_eq!(view.full(), TimeWindow::new(4_000.0, 6_000.0));
}

// ============================================
// Selection Tests
// ============================================

#[test]
fn test_select_narrows_window() {
    let mut view = view();
    view.take_pending();
    view.select(1_200_000.0, 1_400_000.0);
    assert_eq!(view.window(), TimeWindow::new(1_200_000.0, 1_400_000.0));
    assert!(!view.is_zoomed_out());
}

#[test]
fn test_select_accepts_reversed_edges() {
    // A right-to-left drag hands the edges in reverse order
    let mut view = view();
    view.select(1_400_000.0, 1_200_000.0);
    assert_eq!(view.window(), TimeWindow::new(1_200_000.0, 1_400_000.0));
}

#[test]
fn test_select_clamped_to_rule_range() {
    let mut view = view();
    view.select(500_000.0, 1_500_000.0);
    let window = view.window();
    assert!(window.min >= RANGE_MIN);
    assert!(window.max <= RANGE_MAX);
}

#[test]
fn test_select_below_minimum_span_ignored() {
    let mut view = view();
    view.take_pending();
    view.select(1_200_000.0, 1_200_400.0);
    assert!(view.is_zoomed_out(), "sub-second selections are accidental clicks");
    assert_eq!(view.take_pending(), None);
}

#[test]
fn test_select_sets_pending_once() {
    let mut view = view();
    view.take_pending();
    view.select(1_200_000.0, 1_400_000.0);
    assert_eq!(
        view.take_pending(),
        Some(TimeWindow::new(1_200_000.0, 1_400_000.0))
    );
    assert_eq!(view.take_pending(), None);
}

#[test]
fn test_reset_restores_full_range() {
    let mut view = view();
    view.take_pending();
    view.select(1_200_000.0, 1_400_000.0);
    view.take_pending();
    view.reset();
    assert!(view.is_zoomed_out());
    assert_eq!(view.take_pending(), Some(view.full()));
}

// ============================================
// Detail-Plot Feedback Tests
// ============================================

#[test]
fn test_detail_bounds_inside_range_stored() {
    let mut view = view();
    let window = view.apply_detail_bounds(1_300_000.0, 1_600_000.0);
    assert_eq!(window, TimeWindow::new(1_300_000.0, 1_600_000.0));
    assert_eq!(view.window(), window);
}

#[test]
fn test_detail_bounds_clamped_and_returned() {
    // Panning past the rule edge slides the window back inside
    let mut view = view();
    let window = view.apply_detail_bounds(900_000.0, 1_200_000.0);
    assert_eq!(window, TimeWindow::new(RANGE_MIN, RANGE_MIN + 300_000.0));
}

#[test]
fn test_detail_bounds_zoomed_past_full_collapse_to_full() {
    let mut view = view();
    let window = view.apply_detail_bounds(0.0, 3_000_000.0);
    assert_eq!(window, view.full());
    assert!(view.is_zoomed_out());
}

#[test]
fn test_detail_bounds_do_not_set_pending() {
    // Bounds coming from the plot itself must not be pushed back next frame
    let mut view = view();
    view.take_pending();
    view.apply_detail_bounds(1_300_000.0, 1_600_000.0);
    assert_eq!(view.take_pending(), None);
}
