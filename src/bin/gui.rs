// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use amacombos::{config::state::AppState, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init();
    let state = AppState::load();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("AMACO Glaze Combinations")
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
