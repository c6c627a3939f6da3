// src/gui/components/form.rs
use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

/// Profile link field + Build button. Enter in the field submits.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.label("Profile link:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.profile_url)
                .hint_text("http://tpk.jcink.net/index.php?showuser=45")
                .desired_width(420.0),
        );
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        let button = ui.add_enabled(!app.running, egui::Button::new("Build"));
        if button.clicked() {
            submit = true;
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
    });

    ui.horizontal(|ui| {
        let render = &mut app.state.options.render;
        let before = render.with_descriptions;
        ui.checkbox(&mut render.with_descriptions, "Include descriptions");
        if render.with_descriptions != before {
            logf!("UI: with_descriptions → {}", render.with_descriptions);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.label(app.status_text());
    });
    ui.add_space(4.0);

    if submit {
        actions::build(app, ui.ctx());
    }
}
