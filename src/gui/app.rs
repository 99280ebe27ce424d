// src/gui/app.rs
use std::{
    error::Error,
    sync::{ mpsc, Arc, Mutex },
    thread::JoinHandle,
};

use eframe::egui;

use crate::{
    config::{
        options::{ PairMode, SelectorStyle },
        state::AppState,
    },
    core::net::{ Fetch, HttpFetch },
    scrape::CancelToken,
    session::{ Action, Session, Snapshot },
};

use super::{ actions, components };

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    let fetch: Arc<dyn Fetch> = Arc::new(HttpFetch::new(&state.options.net)?);
    eframe::run_native(
        "AMACO Glaze Combinations",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, state, fetch)))),
    )?;
    Ok(())
}

/// A validation batch in flight.
struct Worker {
    batch: u64,
    cancel: CancelToken,
    handle: JoinHandle<()>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub session: Session,
    pub state: AppState,

    pub fetch: Arc<dyn Fetch>,
    pub ctx: egui::Context,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // workers → UI
    tx: mpsc::Sender<Action>,
    rx: mpsc::Receiver<Action>,
    worker: Option<Worker>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, fetch: Arc<dyn Fetch>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let (tx, rx) = mpsc::channel();
        let mut app = Self {
            session: Session::new(state.options.catalog.clone()),
            state,
            fetch,
            ctx: cc.egui_ctx.clone(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            tx,
            rx,
            worker: None,
        };

        logf!("Init: source={:?} selector={:?} pairs={:?}",
            app.state.options.catalog.source,
            app.state.options.catalog.selector,
            app.state.options.catalog.pairs
        );
        actions::load(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn snapshot(&self) -> Arc<Snapshot> { self.session.snapshot() }

    #[inline]
    pub fn inbox(&self) -> mpsc::Sender<Action> { self.tx.clone() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// The one path from the UI into the session. Mode changes are mirrored
    /// into the saved options; leaving directed mode cancels its batch.
    pub fn dispatch(&mut self, action: Action) -> Arc<Snapshot> {
        match &action {
            Action::SetSelector(style) => self.state.options.catalog.selector = *style,
            Action::SetPairMode(mode) => {
                self.state.options.catalog.pairs = *mode;
                self.cancel_work();
            }
            _ => {}
        }
        self.session.dispatch(action)
    }

    pub fn set_selector(&mut self, style: SelectorStyle) {
        if self.snapshot().options.selector != style {
            self.dispatch(Action::SetSelector(style));
        }
    }

    pub fn set_pair_mode(&mut self, mode: PairMode) {
        if self.snapshot().options.pairs != mode {
            self.dispatch(Action::SetPairMode(mode));
            self.status("Idle");
        }
    }

    pub fn track_worker(&mut self, batch: u64, cancel: CancelToken, handle: JoinHandle<()>) {
        self.worker = Some(Worker { batch, cancel, handle });
    }

    pub fn cancel_work(&mut self) {
        if let Some(w) = self.worker.take() {
            logd!("Validate: cancel batch={}", w.batch);
            w.cancel.cancel();
        }
    }

    /// Apply whatever the workers sent since last frame.
    fn drain_inbox(&mut self) {
        // checked before draining: a worker sends before it exits
        let exited = self.worker.as_ref().filter(|w| w.handle.is_finished()).map(|w| w.batch);

        while let Ok(action) = self.rx.try_recv() {
            match &action {
                Action::Loaded(l) => self.status(format!("{} glazes, {} combinations", l.catalog.len(), l.combos.len())),
                Action::LoadFailed(_) => self.status("No glazes loaded"),
                _ => {}
            }
            self.session.dispatch(action);
        }

        let Some(batch) = exited else { return };
        self.worker = None;
        if self.snapshot().batch() == Some(batch) {
            // exited without reporting (panicked)
            loge!("Validate: worker for batch {} stopped without a result", batch);
            self.session.dispatch(Action::ValidationFailed {
                batch,
                message: s!("Validation stopped unexpectedly"),
            });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_inbox();

        egui::TopBottomPanel::top("modes").show(ctx, |ui| {
            components::mode_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::SidePanel::left("glazes")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                match self.snapshot().options.selector {
                    SelectorStyle::Autocomplete => components::search_bar::draw(ui, self),
                    SelectorStyle::Checkboxes => components::glaze_list::draw(ui, self),
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::selected_panel::draw(ui, self);
            if self.snapshot().options.pairs == PairMode::Directed {
                components::layer_bar::draw(ui, self);
            }
            ui.separator();
            components::combo_grid::draw(ui, self);
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel_work();
        self.state.save();
    }
}
