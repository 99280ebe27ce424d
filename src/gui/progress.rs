// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Progress sink for worker threads: writes the status line and asks the
/// UI to repaint so it shows up without mouse movement.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }

    fn counts(&self) -> String {
        format!("{}/{}", self.done + self.failed, self.total)
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Found {} ({})", label, self.counts()));
    }
    fn item_failed(&mut self, _label: &str) {
        self.failed += 1;
        self.set_status(format!("Checking… ({})", self.counts()));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Nothing to check"));
        } else {
            self.set_status(format!("Done: {} of {} combinations exist", self.done, self.total));
        }
    }
}
