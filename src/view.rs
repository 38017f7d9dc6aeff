//! Detail/overview time window state.
//!
//! Both plots share one rule range, `[first_run, last_run]` in epoch
//! milliseconds. The detail chart shows a window inside that range; the
//! overview always shows the whole range with the current window shaded.
//! Window changes flow both ways: a drag-selection on the overview narrows
//! the detail chart, and zoom or pan on the detail chart moves the shaded
//! region. [`ViewState`] owns the window and keeps every change inside the
//! rule range.

/// Smallest selectable window, one second
const MIN_WINDOW_MS: f64 = 1_000.0;

/// Padding applied when the payload holds a single run and the rule range
/// would collapse to a point
const DEGENERATE_PAD_MS: f64 = 1_000.0;

/// An inclusive time span in epoch milliseconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    pub min: f64,
    pub max: f64,
}

impl TimeWindow {
    pub fn new(min: f64, max: f64) -> Self {
        TimeWindow { min, max }
    }

    /// Build a window from two edges in either order
    pub fn ordered(a: f64, b: f64) -> Self {
        TimeWindow {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.min && t <= self.max
    }

    /// Clamp this window into `range`, preserving its width where possible.
    ///
    /// A window wider than the range collapses to the range; otherwise the
    /// window is shifted until both edges are inside.
    pub fn clamp_span_into(mut self, range: TimeWindow) -> TimeWindow {
        let width = self.width();
        if width >= range.width() {
            return range;
        }
        if self.min < range.min {
            self.min = range.min;
            self.max = range.min + width;
        }
        if self.max > range.max {
            self.max = range.max;
            self.min = range.max - width;
        }
        self
    }
}

/// Zoom state shared by the detail chart and the overview strip
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// The full rule range; never changes after load
    full: TimeWindow,
    /// The window the detail chart currently shows
    window: TimeWindow,
    /// Set when the window was changed outside the detail plot (overview
    /// selection, reset); the next frame overrides the plot bounds once
    pending: bool,
}

impl ViewState {
    /// Create view state for a rule range, starting fully zoomed out
    pub fn new(mut full: TimeWindow) -> Self {
        if full.width() <= 0.0 {
            full = TimeWindow::new(full.min - DEGENERATE_PAD_MS, full.max + DEGENERATE_PAD_MS);
        }
        ViewState {
            full,
            window: full,
            pending: true,
        }
    }

    pub fn full(&self) -> TimeWindow {
        self.full
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// True when the detail chart shows the whole rule range
    pub fn is_zoomed_out(&self) -> bool {
        self.window == self.full
    }

    /// Apply a selection made on the overview strip. Edges may arrive in
    /// either order; spans below the minimum window are ignored.
    pub fn select(&mut self, a: f64, b: f64) {
        let window = TimeWindow::ordered(a, b).clamp_span_into(self.full);
        if window.width() < MIN_WINDOW_MS {
            return;
        }
        self.window = window;
        self.pending = true;
    }

    /// Zoom back out to the full rule range
    pub fn reset(&mut self) {
        self.window = self.full;
        self.pending = true;
    }

    /// Record bounds produced by direct interaction with the detail plot.
    /// The span is clamped into the rule range; the clamped window is
    /// returned so the plot can be corrected in the same frame.
    pub fn apply_detail_bounds(&mut self, min: f64, max: f64) -> TimeWindow {
        self.window = TimeWindow::new(min, max).clamp_span_into(self.full);
        self.window
    }

    /// Take a pending programmatic window change, if one is waiting.
    /// Returns `Some` exactly once per `select`/`reset` call.
    pub fn take_pending(&mut self) -> Option<TimeWindow> {
        if self.pending {
            self.pending = false;
            Some(self.window)
        } else {
            None
        }
    }
}
