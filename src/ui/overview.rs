//! Full-range overview strip with drag selection.
//!
//! The strip always shows the whole rule range at a fixed scale. Dragging
//! across it selects a time window for the detail chart; the detail
//! chart's current window is shaded so panning and zooming up there stays
//! visible down here.

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Polygon};

use crate::app::QuickViewApp;
use crate::state::{series_color, Session, OVERVIEW_Y_HEADROOM};

/// Shade for the detail chart's current window
const WINDOW_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(57, 60, 39, 90);

/// Shade for an in-progress drag selection
const SELECTION_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(101, 77, 29, 90);

impl QuickViewApp {
    /// Render the overview strip under the detail chart
    pub fn render_overview(&mut self, ui: &mut egui::Ui) {
        let mut drag = self.overview_drag;
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let color_blind_mode = self.settings.color_blind_mode;
        let full = session.view.full();
        let window = session.view.window();
        let y_top = if session.max_duration > 0.0 {
            session.max_duration * OVERVIEW_Y_HEADROOM
        } else {
            1.0
        };

        let Session { series, view, .. } = session;
        let series = &*series;

        let plot = Plot::new("overview")
            .show_axes([false, false])
            .show_grid([false, false])
            .allow_zoom([false, false])
            .allow_drag([false, false])
            .allow_scroll([false, false])
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false);

        let response = plot.show(ui, |plot_ui| {
            // The strip never zooms; bounds are pinned to the rule range
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [full.min, 0.0],
                [full.max, y_top],
            ));

            for s in series {
                let [r, g, b] = series_color(s.color_index, color_blind_mode);
                let points: PlotPoints = s
                    .points
                    .iter()
                    .map(|p| [p.time_ms, p.duration_secs])
                    .collect();
                plot_ui.line(
                    Line::new(s.label.clone(), points)
                        .color(egui::Color32::from_rgb(r, g, b))
                        .width(1.0),
                );
            }

            // Shade the detail window unless fully zoomed out
            if window != full {
                let band = band_corners(window.min, window.max, y_top);
                plot_ui.polygon(
                    Polygon::new("window", PlotPoints::from(band))
                        .fill_color(WINDOW_FILL)
                        .stroke(egui::Stroke::new(1.0, WINDOW_FILL)),
                );
            }

            // Live preview of an in-progress drag selection
            if let Some((anchor, latest)) = drag {
                let band = band_corners(anchor.min(latest), anchor.max(latest), y_top);
                plot_ui.polygon(
                    Polygon::new("selection", PlotPoints::from(band))
                        .fill_color(SELECTION_FILL)
                        .stroke(egui::Stroke::new(1.0, SELECTION_FILL)),
                );
            }

            plot_ui.pointer_coordinate()
        });

        // Drag across the strip selects a window for the detail chart
        let pointer = response.inner;
        if response.response.drag_started() {
            if let Some(p) = pointer {
                drag = Some((p.x, p.x));
            }
        } else if response.response.dragged() {
            // Pointer outside the strip keeps the last known edge
            if let (Some(selection), Some(p)) = (drag.as_mut(), pointer) {
                selection.1 = p.x;
            }
        }
        if response.response.drag_stopped() {
            if let Some((anchor, latest)) = drag.take() {
                view.select(anchor, latest);
            }
        }

        self.overview_drag = drag;
    }
}

/// Corner points for a full-height vertical band
fn band_corners(min: f64, max: f64, y_top: f64) -> Vec<[f64; 2]> {
    vec![[min, 0.0], [max, 0.0], [max, y_top], [min, y_top]]
}
