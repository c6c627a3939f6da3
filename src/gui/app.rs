// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::config::state::AppState;

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Character Sheet → BBCode",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Result of one build, as sent back by the worker thread.
pub type BuildResult = Result<String, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// The output element: rendered BBCode, "Loading...", or empty
    pub output: String,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<BuildResult>>,

    /// Set when a build fails; shown as a blocking dialog until dismissed
    pub error: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: fetch timeout={}s", state.options.fetch.timeout_secs);
        Self {
            state,
            output: s!(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
            error: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll(self);

        egui::TopBottomPanel::top("form").show(ctx, |ui| {
            components::form::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::output::draw(ui, self);
        });

        components::error_dialog::draw(ctx, self);

        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
