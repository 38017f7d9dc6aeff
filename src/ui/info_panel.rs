//! Templated info header and controls.
//!
//! The header line is rendered from the user's info template against the
//! loaded history. Display toggles persist immediately, matching the
//! settings-on-change behavior everywhere else in the app.

use eframe::egui;

use crate::app::QuickViewApp;
use crate::info::{render_template, InfoContext};
use crate::state::LoadingState;

impl QuickViewApp {
    /// Render the info header row across the top of the window
    pub fn render_info_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let header = match &self.session {
                Some(session) => {
                    let context = InfoContext::from_history(&session.history);
                    render_template(&self.settings.info_template, &context)
                }
                None => "QuickView".to_string(),
            };
            ui.label(egui::RichText::new(header).size(15.0).strong());

            if let LoadingState::Loading(filename) = &self.loading_state {
                ui.add_space(8.0);
                ui.spinner();
                ui.label(
                    egui::RichText::new(format!("Loading {}...", filename))
                        .size(13.0)
                        .color(egui::Color32::GRAY),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Open...").clicked() {
                    self.open_payload_dialog();
                }

                if let Some(session) = &mut self.session {
                    let zoomed_in = !session.view.is_zoomed_out();
                    if ui
                        .add_enabled(zoomed_in, egui::Button::new("Reset view"))
                        .clicked()
                    {
                        session.view.reset();
                    }
                }

                ui.separator();

                let mut settings_changed = false;
                if ui
                    .checkbox(&mut self.settings.show_points, "Points")
                    .changed()
                {
                    settings_changed = true;
                }
                if ui
                    .checkbox(&mut self.settings.color_blind_mode, "Colorblind palette")
                    .changed()
                {
                    settings_changed = true;
                }
                if settings_changed {
                    if let Err(e) = self.settings.save() {
                        tracing::warn!("failed to save settings: {e}");
                    }
                }
            });
        });
        ui.add_space(6.0);
    }
}
