//! QuickView - A benchmark run-history viewer written in Rust
//!
//! QuickView is a desktop application for exploring benchmark timing history:
//! each tracked command becomes a series of runtime samples over time, with a
//! zoomable detail chart, a full-range overview strip, and per-run tooltips
//! carrying version-control context.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use quickview::app::QuickViewApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("QuickView - Benchmark History")
            .with_app_id("QuickView")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "QuickView",
        native_options,
        Box::new(|cc| Ok(Box::new(QuickViewApp::new(cc)))),
    )
}
