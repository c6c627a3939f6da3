// src/gui/components/error_dialog.rs
use eframe::egui;

use crate::gui::app::App;

/// Modal error dialog; blocks the form until dismissed.
pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.error.clone() else { return };

    let mut dismissed = false;
    let modal = egui::Modal::new(egui::Id::new("build_error")).show(ctx, |ui| {
        ui.heading("Build failed");
        ui.label(msg);
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    if dismissed || modal.should_close() {
        app.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::state::AppState;

    fn frame(ctx: &egui::Context, app: &mut App) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| draw(ctx, app));
    }

    #[test]
    fn error_stays_until_dismissed() {
        let ctx = egui::Context::default();
        let mut app = App::new(AppState::default());
        app.error = Some(s!("404 http://forum.test/sheet.html"));

        frame(&ctx, &mut app);
        frame(&ctx, &mut app);
        assert_eq!(app.error.as_deref(), Some("404 http://forum.test/sheet.html"));
    }

    #[test]
    fn escape_closes_the_dialog() {
        let ctx = egui::Context::default();
        let mut app = App::new(AppState::default());
        app.error = Some(s!("boom"));
        frame(&ctx, &mut app);

        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| draw(ctx, &mut app));
        assert_eq!(app.error, None);
    }
}
