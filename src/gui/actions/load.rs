// src/gui/actions/load.rs
use std::{sync::Arc, thread};

use crate::{
    gui::app::App,
    loader,
    session::Action,
};

pub fn load(app: &mut App) {
    let catalog = app.state.options.catalog.clone();
    let net = app.state.options.net.clone();
    let fetch = Arc::clone(&app.fetch);
    let tx = app.inbox();
    let ctx = app.ctx.clone();

    logf!("Load: Begin source={:?} dataset={}", catalog.source, catalog.dataset);
    app.status("Loading glazes…");

    thread::spawn(move || {
        let action = match loader::load_strict(&catalog, &net, fetch.as_ref()) {
            Ok(loaded) => Action::Loaded(loaded),
            Err(e) => Action::LoadFailed(e.to_string()),
        };
        let _ = tx.send(action);
        ctx.request_repaint();
    });
}
