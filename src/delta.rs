//! Run-over-run delta statistics.
//!
//! For a hovered run the tooltip reports how the runtime moved against the
//! previous run of the same series. The first run has no predecessor and
//! compares against itself, which pins its delta to zero instead of hiding
//! the row.

use crate::series::ChartSeries;

/// Runtime change of one run against the previous run in its series
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeltaStats {
    /// Runtime difference in seconds
    pub delta: f64,
    /// Relative change in percent; `None` when the reference runtime is
    /// zero, so no NaN or infinity ever reaches the display path
    pub percent: Option<f64>,
}

impl DeltaStats {
    /// Compute stats for the run at `index`, or `None` if out of range
    pub fn at(series: &ChartSeries, index: usize) -> Option<DeltaStats> {
        let current = series.points.get(index)?;
        let reference = if index == 0 {
            current
        } else {
            &series.points[index - 1]
        };

        let delta = current.duration_secs - reference.duration_secs;
        let percent = if reference.duration_secs == 0.0 {
            None
        } else {
            Some(delta / reference.duration_secs * 100.0)
        };
        Some(DeltaStats { delta, percent })
    }

    /// Delta in seconds, three decimals, `+` prefix for regressions
    pub fn delta_text(&self) -> String {
        signed(self.delta, format!("{:.3}", self.delta))
    }

    /// Relative change, one decimal, `+` prefix for regressions, `N/A`
    /// when the reference runtime was zero
    pub fn percent_text(&self) -> String {
        match self.percent {
            Some(percent) => signed(self.delta, format!("{percent:.1}")),
            None => "N/A".to_string(),
        }
    }
}

/// Prefix a formatted value with '+' when the underlying delta is positive.
/// Keyed on the delta for both texts so delta and percent always agree on
/// their sign prefix.
fn signed(delta: f64, formatted: String) -> String {
    if delta > 0.0 {
        format!("+{formatted}")
    } else {
        formatted
    }
}
