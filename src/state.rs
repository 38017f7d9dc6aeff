//! Core application state types and constants.
//!
//! This module contains the fundamental data structures used throughout
//! the application: the loaded session (parsed history plus everything
//! derived from it), background-load plumbing, and color palettes.

use std::path::PathBuf;

use crate::history::RunHistory;
use crate::hover::HoverState;
use crate::series::{build_series, ChartSeries};
use crate::tooltip::TooltipContent;
use crate::view::{TimeWindow, ViewState};

// ============================================================================
// Constants
// ============================================================================

/// Supported payload file extensions (used in file dialogs)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Height of the overview strip below the detail chart, in pixels
pub const OVERVIEW_HEIGHT: f32 = 90.0;

/// Headroom multiplier above the slowest run on the detail chart y axis
pub const Y_HEADROOM: f64 = 1.05;

/// Extra y headroom on the overview strip
pub const OVERVIEW_Y_HEADROOM: f64 = 1.1;

/// Color palette for chart lines
pub const CHART_COLORS: &[[u8; 3]] = &[
    [113, 120, 78],  // Olive green (primary)
    [191, 78, 48],   // Rust orange (accent)
    [71, 108, 155],  // Blue (info)
    [159, 166, 119], // Sage green (success)
    [253, 193, 73],  // Amber (warning)
    [135, 30, 28],   // Dark red (error)
    [246, 247, 235], // Cream
    [100, 149, 237], // Cornflower blue
    [255, 127, 80],  // Coral
    [144, 238, 144], // Light green
];

/// Colorblind-friendly palette (based on Wong's optimized palette)
/// Designed to be distinguishable for deuteranopia, protanopia, and tritanopia
pub const COLORBLIND_COLORS: &[[u8; 3]] = &[
    [0, 114, 178],   // Blue
    [230, 159, 0],   // Orange
    [0, 158, 115],   // Bluish green
    [204, 121, 167], // Reddish purple
    [86, 180, 233],  // Sky blue
    [213, 94, 0],    // Vermillion
    [240, 228, 66],  // Yellow
    [136, 204, 238], // Light blue
    [153, 153, 153], // Gray
];

/// Resolve a series color index against the active palette
pub fn series_color(color_index: usize, colorblind: bool) -> [u8; 3] {
    let palette = if colorblind {
        COLORBLIND_COLORS
    } else {
        CHART_COLORS
    };
    palette[color_index % palette.len()]
}

// ============================================================================
// Core Types
// ============================================================================

/// A loaded run-history session: the parsed payload plus everything the
/// charts derive from it.
///
/// Owning the view, hover, and tooltip state here keeps one mutator: the
/// frame loop updates the session, and everything else reads it.
pub struct Session {
    /// Parsed payload, run bounds already scaled to milliseconds
    pub history: RunHistory,
    /// Chart series in payload order
    pub series: Vec<ChartSeries>,
    /// Shared detail/overview zoom state
    pub view: ViewState,
    /// Hover debounce memory
    pub hover: HoverState,
    /// Tooltip for the currently hovered run, if any
    pub tooltip: Option<TooltipContent>,
    /// Slowest runtime across all series, for y-axis sizing
    pub max_duration: f64,
}

impl Session {
    /// Build a session from a parsed history.
    ///
    /// Series are built from the per-record timestamps first; the scalar
    /// run bounds are scaled to milliseconds exactly once afterwards, so
    /// no value is ever converted twice.
    pub fn new(mut history: RunHistory) -> Self {
        let series = build_series(&history.data);
        history.convert_bounds_to_millis();

        let max_duration = series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.duration_secs)
            .fold(0.0, f64::max);
        let view = ViewState::new(TimeWindow::new(history.first_run, history.last_run));

        Session {
            history,
            series,
            view,
            hover: HoverState::default(),
            tooltip: None,
            max_duration,
        }
    }

    /// Top of the detail chart y axis
    pub fn y_axis_max(&self) -> f64 {
        if self.max_duration > 0.0 {
            self.max_duration * Y_HEADROOM
        } else {
            1.0
        }
    }
}

/// Result from background payload loading
pub enum LoadResult {
    Success(Box<Session>),
    Error(String),
}

/// Current state of payload loading
pub enum LoadingState {
    /// No loading in progress
    Idle,
    /// Loading a file (contains filename being loaded)
    Loading(String),
}

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Default)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [71, 108, 155],    // Blue
            ToastType::Success => [113, 120, 78], // Olive green
            ToastType::Error => [135, 30, 28],    // Dark red
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        [255, 255, 255]
    }
}

/// A payload file queued for loading
#[derive(Clone)]
pub struct PendingLoad {
    pub path: PathBuf,
    pub name: String,
}

impl PendingLoad {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        PendingLoad { path, name }
    }
}
