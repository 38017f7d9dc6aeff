//! Main detail chart: series lines, hover pickup, and tooltip.
//!
//! The plot closure is the single place detail bounds are decided: a
//! pending programmatic window (overview selection, reset) wins, otherwise
//! whatever the user's pan or zoom produced is clamped back into the rule
//! range and written to the shared view state. The overview strip reads
//! that state, so every zoom path keeps both charts in sync.

use chrono::{Local, TimeZone};
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints, Points};

use crate::app::QuickViewApp;
use crate::hover::{self, HoverAction};
use crate::state::{series_color, Session};
use crate::tooltip::TooltipContent;

impl QuickViewApp {
    /// Render the detail chart filling the central panel
    pub fn render_chart(&mut self, ui: &mut egui::Ui) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let color_blind_mode = self.settings.color_blind_mode;
        let show_points = self.settings.show_points;
        let y_max = session.y_axis_max();

        // Split the session borrow so the plot closure can hold the series
        // immutably while mutating the view state
        let Session {
            series,
            view,
            hover,
            tooltip,
            ..
        } = session;
        let series = &*series;

        let plot = Plot::new("runtime_chart")
            .legend(Legend::default())
            .allow_zoom([true, false])
            .allow_drag([true, false])
            .allow_scroll([true, false])
            .show_x(false)
            .show_y(false)
            .x_axis_formatter(|mark, range| {
                axis_time_label(mark.value, range.end() - range.start())
            })
            .y_axis_formatter(|mark, _range| format!("{:.3} s", mark.value));

        let response = plot.show(ui, |plot_ui| {
            // A pending window change (overview selection or reset)
            // overrides this frame's bounds; otherwise the interacted
            // bounds are clamped into the rule range and stored
            let window = match view.take_pending() {
                Some(window) => window,
                None => {
                    let bounds = plot_ui.plot_bounds();
                    view.apply_detail_bounds(bounds.min()[0], bounds.max()[0])
                }
            };
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [window.min, 0.0],
                [window.max, y_max],
            ));

            for s in series {
                let [r, g, b] = series_color(s.color_index, color_blind_mode);
                let color = egui::Color32::from_rgb(r, g, b);

                let line_points: PlotPoints = s
                    .points
                    .iter()
                    .map(|p| [p.time_ms, p.duration_secs])
                    .collect();
                plot_ui.line(Line::new(s.label.clone(), line_points).color(color).width(2.0));

                if show_points {
                    let markers: PlotPoints = s
                        .points
                        .iter()
                        .map(|p| [p.time_ms, p.duration_secs])
                        .collect();
                    // Same name as the line so both share one legend entry
                    plot_ui.points(Points::new(s.label.clone(), markers).color(color).radius(2.5));
                }
            }

            plot_ui.pointer_coordinate()
        });

        // Resolve the hovered run and keep the tooltip in step with it
        let window = view.window();
        let hovered = response.inner.and_then(|pointer| {
            hover::locate_point(
                series,
                (pointer.x, pointer.y),
                (window.min, window.max),
                (0.0, y_max),
            )
        });
        let (next, action) = hover::transition(hover, hovered);
        *hover = next;
        match action {
            HoverAction::Rebuild(point) => {
                *tooltip = series
                    .get(point.series)
                    .and_then(|s| TooltipContent::for_point(s, point.index));
            }
            HoverAction::Clear => *tooltip = None,
            HoverAction::Keep => {}
        }

        // Paint the tooltip near the pointer, flipped when it would leave
        // the plot area
        if let (Some(tip), Some(pos), Some(point)) =
            (tooltip.as_ref(), response.response.hover_pos(), hover.previous)
        {
            let painter = ui.painter();
            let galley = painter.layout_no_wrap(
                tip.lines().join("\n"),
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
            let padding = egui::vec2(10.0, 8.0);
            let size = galley.size() + padding * 2.0;
            let plot_rect = response.response.rect;

            let mut anchor = pos + egui::vec2(14.0, 14.0);
            if anchor.x + size.x > plot_rect.right() {
                anchor.x = pos.x - size.x - 14.0;
            }
            if anchor.y + size.y > plot_rect.bottom() {
                anchor.y = pos.y - size.y - 14.0;
            }

            let [r, g, b] = series_color(
                series.get(point.series).map_or(0, |s| s.color_index),
                color_blind_mode,
            );
            let rect = egui::Rect::from_min_size(anchor, size);
            painter.rect_filled(rect, 6.0, egui::Color32::from_rgba_unmultiplied(34, 34, 34, 235));
            painter.rect_stroke(
                rect,
                egui::CornerRadius::same(6),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(r, g, b)),
                egui::StrokeKind::Outside,
            );
            painter.galley(rect.min + padding, galley, egui::Color32::WHITE);
        }

        // Double click zooms back out to the full rule range
        if response.response.double_clicked() {
            view.reset();
        }
    }
}

/// Format an x-axis tick for the visible span: dates when zoomed out,
/// clock time when zoomed in
fn axis_time_label(time_ms: f64, span_ms: f64) -> String {
    const HOUR_MS: f64 = 3_600_000.0;
    const DAY_MS: f64 = 24.0 * HOUR_MS;

    let Some(dt) = Local.timestamp_millis_opt(time_ms as i64).single() else {
        return String::new();
    };
    if span_ms > 2.0 * DAY_MS {
        dt.format("%b %d").to_string()
    } else if span_ms > 2.0 * HOUR_MS {
        dt.format("%H:%M").to_string()
    } else {
        dt.format("%H:%M:%S").to_string()
    }
}
