// src/gui/actions/validate.rs
use std::{sync::Arc, thread};

use crate::{
    gui::{app::App, progress::GuiProgress},
    scrape::{CancelToken, validate_pairs},
    session::Action,
};

/// Check every directed candidate of the current selection.
pub fn validate(app: &mut App) {
    if app.snapshot().is_loading() {
        return;
    }
    let snap = app.dispatch(Action::ValidationStarted);
    let Some(batch) = snap.batch() else { return };
    let pairs = snap.candidates();

    // a new batch supersedes whatever was running
    app.cancel_work();
    let cancel = CancelToken::new();

    let fetch = Arc::clone(&app.fetch);
    let net = app.state.options.net.clone();
    let tx = app.inbox();
    let ctx = app.ctx.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let token = cancel.clone();

    logf!("Validate: Begin batch={} candidates={}", batch, pairs.len());

    let handle = thread::spawn(move || {
        let report = validate_pairs(fetch, &net, pairs, &token, Some(&mut prog));
        let action = if report.cancelled {
            Action::ValidationCancelled { batch }
        } else {
            Action::ValidationFinished { batch, results: report.valid }
        };
        let _ = tx.send(action);
        ctx.request_repaint();
    });

    app.track_worker(batch, cancel, handle);
}
