// src/gui/components/mode_bar.rs
//
// Top bar: selector style, pair mode, and what was loaded.

use eframe::egui;

use crate::config::options::{PairMode, SelectorStyle};
use crate::gui::app::App;
use crate::session::DataPhase;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = app.snapshot();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Pick with:");
        let mut selector = snap.options.selector;
        ui.radio_value(&mut selector, SelectorStyle::Autocomplete, "Search");
        ui.radio_value(&mut selector, SelectorStyle::Checkboxes, "List");
        app.set_selector(selector);

        ui.separator();

        ui.label("Pairs:");
        let mut pairs = snap.options.pairs;
        ui.radio_value(&mut pairs, PairMode::Undirected, "Dataset");
        ui.radio_value(&mut pairs, PairMode::Directed, "Layer order (live)");
        if pairs != snap.options.pairs {
            logf!("UI: Pair mode {:?} → {:?}", snap.options.pairs, pairs);
        }
        app.set_pair_mode(pairs);

        ui.separator();

        match snap.data {
            DataPhase::Loading => {
                ui.add(egui::Spinner::new());
                ui.label("Loading…");
            }
            DataPhase::Ready => {
                ui.label(format!("{} glazes", snap.catalog.len()));
            }
            DataPhase::Failed => {
                ui.weak("0 glazes");
            }
        }
    });
}
