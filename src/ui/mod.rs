//! UI rendering modules for the QuickView application.
//!
//! This module organizes the various UI components into logical submodules:
//!
//! - `chart` - Main detail chart: series lines, hover pickup, tooltip
//! - `overview` - Full-range overview strip with drag selection
//! - `info_panel` - Templated info header and controls
//! - `drop_zone` - Empty-state card shown before a payload is loaded
//! - `toast` - Toast notification system
//! - `icons` - Custom icon drawing utilities

pub mod chart;
pub mod drop_zone;
pub mod icons;
pub mod info_panel;
pub mod overview;
pub mod toast;
