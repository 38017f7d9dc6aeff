//! Chart series construction.
//!
//! Turns parsed run data into the series the plots consume: per-record
//! timestamps scaled from epoch seconds to milliseconds, colors assigned by
//! insertion order, and legend labels derived from the command (truncated)
//! or from `command@branch` for branch-grouped payloads.

use crate::history::{RunData, RunRecord, VcsInfo};

/// Legend labels longer than this are truncated
pub const MAX_LABEL_CHARS: usize = 50;

/// One plotted run: chart-ready units plus the VCS context for tooltips
#[derive(Clone, Debug, PartialEq)]
pub struct RunPoint {
    /// Run start, epoch milliseconds
    pub time_ms: f64,
    /// Runtime in seconds (the y axis stays in seconds)
    pub duration_secs: f64,
    pub vcs: VcsInfo,
}

/// One chart series: all runs of a command, on one branch if branched
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    /// Full command string, untruncated
    pub command: String,
    /// Branch the runs came from, for branched payloads
    pub branch: Option<String>,
    /// Stable palette slot, assigned by insertion order
    pub color_index: usize,
    /// Legend label
    pub label: String,
    pub points: Vec<RunPoint>,
}

/// Build chart series from parsed run data.
///
/// Color indices are sequential over the iteration order of the payload
/// maps, so two loads of the same file always color series the same way.
pub fn build_series(data: &RunData) -> Vec<ChartSeries> {
    match data {
        RunData::Flat(commands) => commands
            .iter()
            .enumerate()
            .map(|(color_index, (command, runs))| ChartSeries {
                command: command.clone(),
                branch: None,
                color_index,
                label: truncate_label(command, MAX_LABEL_CHARS),
                points: convert_runs(runs),
            })
            .collect(),
        RunData::Branched(branches) => {
            let mut series = Vec::with_capacity(data.series_count());
            for (branch, commands) in branches {
                for (command, runs) in commands {
                    series.push(ChartSeries {
                        command: command.clone(),
                        branch: Some(branch.clone()),
                        color_index: series.len(),
                        label: format!("{command}@{branch}"),
                        points: convert_runs(runs),
                    });
                }
            }
            series
        }
    }
}

fn convert_runs(runs: &[RunRecord]) -> Vec<RunPoint> {
    runs.iter()
        .map(|run| RunPoint {
            time_ms: run.timestamp_secs * 1000.0,
            duration_secs: run.duration_secs,
            vcs: run.vcs.clone(),
        })
        .collect()
}

/// Truncate a legend label to `max` characters.
///
/// Names up to `max` characters pass through unchanged; longer names keep
/// the first `max - 1` characters and gain a `...` suffix. Counting is by
/// `char`, so multi-byte names never get split mid-character.
pub fn truncate_label(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let mut truncated: String = name.chars().take(max.saturating_sub(1)).collect();
        truncated.push_str("...");
        truncated
    }
}
