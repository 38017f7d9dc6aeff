//! Empty-state card shown before a payload is loaded.

use eframe::egui;

use crate::app::QuickViewApp;
use crate::state::LoadingState;
use crate::ui::icons::draw_upload_icon;

const CARD_WIDTH: f32 = 380.0;

impl QuickViewApp {
    /// Render the drop zone filling the central panel
    pub fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let accent = egui::Color32::from_rgb(113, 120, 78); // Olive green
        let hint_gray = egui::Color32::from_rgb(150, 150, 150);

        // The central panel is much wider than the card, so center it both ways
        ui.add_space((ui.available_height() * 0.3).max(20.0));

        if let LoadingState::Loading(filename) = &self.loading_state {
            let filename = filename.clone();
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.add_space(8.0);
                ui.label(format!("Loading {}...", filename));
            });
            return;
        }

        ui.vertical_centered(|ui| {
            ui.set_max_width(CARD_WIDTH);

            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(45, 45, 45))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(60, 60, 60)))
                .corner_radius(12)
                .inner_margin(24.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        let icon_size = 36.0;
                        let (icon_rect, _) = ui.allocate_exact_size(
                            egui::vec2(icon_size, icon_size),
                            egui::Sense::hover(),
                        );
                        draw_upload_icon(ui, icon_rect.center(), icon_size, accent);

                        ui.add_space(10.0);

                        ui.label(
                            egui::RichText::new("No run history loaded")
                                .size(15.0)
                                .color(egui::Color32::from_rgb(220, 220, 220)),
                        );

                        ui.add_space(14.0);

                        let button = egui::Frame::NONE
                            .fill(accent)
                            .corner_radius(6)
                            .inner_margin(egui::vec2(18.0, 8.0))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new("Open data.json")
                                        .color(egui::Color32::WHITE)
                                        .size(14.0),
                                );
                            })
                            .response;

                        if button.interact(egui::Sense::click()).clicked() {
                            self.open_payload_dialog();
                        }
                        if button.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }

                        ui.add_space(14.0);

                        ui.label(
                            egui::RichText::new("or drop the file anywhere in this window")
                                .color(hint_gray)
                                .size(12.0),
                        );
                    });
                });
        });
    }
}
