//! Hover hit-testing and tooltip debounce.
//!
//! The plot reports a pointer coordinate every frame. [`locate_point`]
//! resolves that to the nearest plotted run within a small pick radius, and
//! [`transition`] turns the per-frame result into tooltip work: rebuild the
//! tooltip only when the hovered run changes, clear it once when the
//! pointer leaves. Both are pure so the whole flow tests headless.

use crate::series::ChartSeries;

/// Pick radius as a fraction of the visible extent on each axis.
/// Roughly matches a 15px hit target on a typical plot size.
pub const PICK_RADIUS: f64 = 0.02;

/// Identity of a plotted run: series slot plus run index within it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointRef {
    pub series: usize,
    pub index: usize,
}

/// What the hover loop remembers between frames
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    /// Run the tooltip was last built for
    pub previous: Option<PointRef>,
}

/// Tooltip work demanded by one frame's hover result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverAction {
    /// A different run is hovered; rebuild the tooltip for it
    Rebuild(PointRef),
    /// The pointer left the chart; drop the tooltip
    Clear,
    /// Nothing changed since the previous frame
    Keep,
}

/// Advance the hover state with this frame's hit-test result.
///
/// The comparison uses the full run identity, so moving between two series
/// at the same run index still rebuilds the tooltip.
pub fn transition(state: &HoverState, hovered: Option<PointRef>) -> (HoverState, HoverAction) {
    match hovered {
        Some(point) if state.previous == Some(point) => (*state, HoverAction::Keep),
        Some(point) => (
            HoverState {
                previous: Some(point),
            },
            HoverAction::Rebuild(point),
        ),
        None if state.previous.is_some() => (HoverState::default(), HoverAction::Clear),
        None => (HoverState::default(), HoverAction::Keep),
    }
}

/// Find the plotted run nearest to `cursor`, if any lies within the pick
/// radius.
///
/// Distances are measured in view fractions: each axis delta is divided by
/// the visible span, so the hit target stays the same size on screen no
/// matter how far the chart is zoomed. `x_span`/`y_span` are the visible
/// `(min, max)` ranges.
pub fn locate_point(
    series: &[ChartSeries],
    cursor: (f64, f64),
    x_span: (f64, f64),
    y_span: (f64, f64),
) -> Option<PointRef> {
    let width = x_span.1 - x_span.0;
    let height = y_span.1 - y_span.0;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let mut best: Option<(f64, PointRef)> = None;
    for (series_index, series) in series.iter().enumerate() {
        for (index, point) in series.points.iter().enumerate() {
            let dx = (point.time_ms - cursor.0) / width;
            let dy = (point.duration_secs - cursor.1) / height;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq > PICK_RADIUS * PICK_RADIUS {
                continue;
            }
            if best.map_or(true, |(best_dist, _)| dist_sq < best_dist) {
                best = Some((
                    dist_sq,
                    PointRef {
                        series: series_index,
                        index,
                    },
                ));
            }
        }
    }
    best.map(|(_, point)| point)
}
