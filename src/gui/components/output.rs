// src/gui/components/output.rs
use eframe::egui;

use crate::gui::app::App;

/// Read-only output area.
pub fn draw(ui: &mut egui::Ui, app: &App) {
    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        let mut text = app.output.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .desired_rows(30),
        );
    });
}
