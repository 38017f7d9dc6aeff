//! Toast notifications for load feedback.
//!
//! One toast at a time, anchored to the bottom-right corner. A new toast
//! replaces the current one; expiry is driven by a scheduled repaint so a
//! toast also disappears when the user never moves the mouse.

use std::time::Duration;

use eframe::egui;

use crate::app::QuickViewApp;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

const SCREEN_MARGIN: f32 = 20.0;

impl QuickViewApp {
    /// Render the active toast, if it has not expired
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some((message, created, toast_type)) = &self.toast_message else {
            return;
        };

        let age = created.elapsed();
        if age >= TOAST_DURATION {
            self.toast_message = None;
            return;
        }
        // Wake up again when the toast is due to vanish
        ctx.request_repaint_after(TOAST_DURATION - age);

        let [r, g, b] = toast_type.color();
        let [tr, tg, tb] = toast_type.text_color();

        egui::Area::new(egui::Id::new("toast"))
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-SCREEN_MARGIN, -SCREEN_MARGIN),
            )
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(r, g, b))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .shadow(egui::epaint::Shadow {
                        offset: [2, 2],
                        blur: 8,
                        spread: 0,
                        color: egui::Color32::from_black_alpha(60),
                    })
                    .show(ui, |ui| {
                        // Bounded width so long load errors wrap
                        ui.set_min_width(200.0);
                        ui.set_max_width(400.0);
                        ui.label(
                            egui::RichText::new(message)
                                .color(egui::Color32::from_rgb(tr, tg, tb))
                                .size(14.0),
                        );
                    });
            });
    }
}
