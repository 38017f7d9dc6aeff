//! Tooltip content assembly.
//!
//! A tooltip describes one hovered run: its VCS context, runtime, movement
//! against the previous run, the command it belongs to, and when it was
//! built. Content is assembled once per hovered run (the hover reducer
//! decides when) and the UI just paints the prepared lines.

use crate::delta::DeltaStats;
use crate::info::format_local_ms;
use crate::series::ChartSeries;

/// Shown when a run carries no VCS data at all
pub const NO_VCS_MARKER: &str = "No git data";

/// Prepared display content for one hovered run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    /// `commit@branch`, or [`NO_VCS_MARKER`]
    pub vcs: String,
    /// Runtime in seconds, three decimals
    pub duration: String,
    /// Delta against the previous run, three decimals, signed
    pub delta: String,
    /// Relative change in percent, one decimal, signed, or `N/A`
    pub percent: String,
    /// Full command string, untruncated
    pub command: String,
    /// Localized run start time
    pub built_at: String,
}

impl TooltipContent {
    /// Assemble tooltip content for the run at `index`, or `None` if the
    /// index is out of range
    pub fn for_point(series: &ChartSeries, index: usize) -> Option<TooltipContent> {
        let point = series.points.get(index)?;
        let stats = DeltaStats::at(series, index)?;

        let vcs = if point.vcs.is_empty() {
            NO_VCS_MARKER.to_string()
        } else {
            // Partial VCS data renders the missing side empty rather than
            // hiding the row
            format!(
                "{}@{}",
                point.vcs.commit.as_deref().unwrap_or(""),
                point.vcs.branch.as_deref().unwrap_or("")
            )
        };

        Some(TooltipContent {
            vcs,
            duration: format!("{:.3}", point.duration_secs),
            delta: stats.delta_text(),
            percent: stats.percent_text(),
            command: series.command.clone(),
            built_at: format_local_ms(point.time_ms),
        })
    }

    /// Display lines in tooltip order
    pub fn lines(&self) -> Vec<String> {
        let change = if self.percent == "N/A" {
            format!("Δs: {} s, {}", self.delta, self.percent)
        } else {
            format!("Δs: {} s, {}%", self.delta, self.percent)
        };
        vec![
            format!("Git: {}", self.vcs),
            format!("Time: {} seconds", self.duration),
            change,
            format!("Command: {}", self.command),
            format!("Built at: {}", self.built_at),
        ]
    }
}
