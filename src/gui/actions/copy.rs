// src/gui/actions/copy.rs
use eframe::egui;

use crate::{config::consts::LOADING, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.output.is_empty() || app.output == LOADING {
        app.status("Nothing to copy");
        logd!("Copy: clicked, but there's nothing to copy");
        return;
    }

    ui_ctx.copy_text(app.output.clone());
    logf!("Copy: {} chars", app.output.len());
    app.status("Copied to clipboard");
}
