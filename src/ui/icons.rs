//! Custom icon drawing utilities.

use eframe::egui;

/// Draw an upload icon (up arrow over a tray) for the drop zone
pub fn draw_upload_icon(ui: &mut egui::Ui, center: egui::Pos2, size: f32, color: egui::Color32) {
    let painter = ui.painter();
    let stroke = egui::Stroke::new(2.0, color);
    let half = size / 2.0;

    // Arrow shaft, ending above the tray
    let tip = egui::pos2(center.x, center.y - half * 0.9);
    let tail = egui::pos2(center.x, center.y + half * 0.35);
    painter.line_segment([tail, tip], stroke);

    // Arrow head
    let head = half * 0.45;
    painter.line_segment([tip, egui::pos2(tip.x - head, tip.y + head)], stroke);
    painter.line_segment([tip, egui::pos2(tip.x + head, tip.y + head)], stroke);

    // Tray: base line with short raised ends
    let tray_y = center.y + half * 0.9;
    let tray_half = half * 0.85;
    let lip = half * 0.3;
    painter.line_segment(
        [
            egui::pos2(center.x - tray_half, tray_y),
            egui::pos2(center.x + tray_half, tray_y),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(center.x - tray_half, tray_y),
            egui::pos2(center.x - tray_half, tray_y - lip),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(center.x + tray_half, tray_y),
            egui::pos2(center.x + tray_half, tray_y - lip),
        ],
        stroke,
    );
}
