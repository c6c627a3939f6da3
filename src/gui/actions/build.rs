// src/gui/actions/build.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    config::consts::LOADING,
    core::HttpFetcher,
    gui::{app::App, progress::GuiProgress},
    runner,
};

/// Kick off a build on a worker thread. The output area shows "Loading..."
/// until `poll` picks up the result.
pub fn build(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let url = app.state.gui.profile_url.trim().to_string();
    if url.is_empty() {
        app.status("Enter a profile link first");
        return;
    }

    logf!("Build: requested profile={}", url);
    app.output = s!(LOADING);
    app.error = None;
    app.running = true;

    let fetch_opts = app.state.options.fetch.clone();
    let render_opts = app.state.options.render.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let (tx, rx) = mpsc::channel();
    app.pending = Some(rx);

    thread::spawn(move || {
        let res = HttpFetcher::new(&fetch_opts)
            .and_then(|fetcher| runner::build(&fetcher, &url, &render_opts, Some(&mut prog)))
            .map_err(|e| e.to_string());
        let _ = tx.send(res);
    });
}

/// Collect a finished build, if any.
pub fn poll(app: &mut App) {
    let Some(rx) = app.pending.as_ref() else { return };

    match rx.try_recv() {
        Ok(Ok(text)) => {
            app.output = text;
            app.status("Ready");
            finish(app);
        }
        Ok(Err(msg)) => {
            loge!("Build: failed: {}", msg);
            app.output.clear();
            app.status(format!("Error: {msg}"));
            app.error = Some(msg);
            finish(app);
        }
        Err(mpsc::TryRecvError::Empty) => {}
        Err(mpsc::TryRecvError::Disconnected) => {
            loge!("Build: worker exited without a result");
            app.output.clear();
            app.status("Error: build worker stopped");
            finish(app);
        }
    }
}

fn finish(app: &mut App) {
    app.running = false;
    app.pending = None;
}
