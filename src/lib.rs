//! QuickView - A benchmark run-history viewer written in Rust
//!
//! This library parses benchmark run-history payloads (`data.json` files with
//! per-command runtime samples) and provides the data shaping behind the
//! graphical viewer: chart series construction, run-over-run deltas, hover
//! tooltips, and zoom window state.
//!
//! ## Module Structure
//!
//! - [`app`] - Main application state and eframe::App implementation
//! - [`history`] - Run-history payload model and JSON parsing
//! - [`series`] - Chart series construction (colors, labels, unit scaling)
//! - [`delta`] - Run-over-run delta statistics and formatting
//! - [`hover`] - Hover hit-testing and tooltip debounce
//! - [`view`] - Detail/overview time window state
//! - [`tooltip`] - Tooltip content assembly
//! - [`info`] - Info header templating and timestamp formatting
//! - [`state`] - Core data types and constants
//! - [`settings`] - User settings persistence
//! - [`ui`] - User interface components
//!   - `chart` - Main chart rendering and hover tooltip
//!   - `overview` - Full-range overview strip with drag selection
//!   - `info_panel` - Templated info header and controls
//!   - `drop_zone` - Empty-state card shown before a payload is loaded
//!   - `toast` - Toast notification system
//!   - `icons` - Custom icon drawing utilities

pub mod app;
pub mod delta;
pub mod history;
pub mod hover;
pub mod info;
pub mod series;
pub mod settings;
pub mod state;
pub mod tooltip;
pub mod ui;
pub mod view;
