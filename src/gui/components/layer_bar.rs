// src/gui/components/layer_bar.rs
//
// Directed mode trigger. Disabled with a spinner while a batch runs.

use eframe::egui;

use crate::gui::{actions, app::App};
use crate::session::LoadPhase;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = app.snapshot();
    let candidates = snap.selection.len() * snap.selection.len().saturating_sub(1);

    ui.horizontal(|ui| {
        let enabled = !snap.is_loading() && candidates > 0;
        let btn = egui::Button::new(format!("Find layers ({candidates})"));
        if ui.add_enabled(enabled, btn)
            .on_hover_text("Check every top-over-bottom order on the vendor site")
            .clicked()
        {
            actions::validate(app);
        }

        match &snap.phase {
            LoadPhase::Idle => {}
            LoadPhase::Loading { .. } => {
                ui.add(egui::Spinner::new());
                ui.label("Checking…");
            }
            LoadPhase::Error(msg) => {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
        }
    });
}
