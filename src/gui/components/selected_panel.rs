// src/gui/components/selected_panel.rs
//
// Selected glazes as removable chips.

use eframe::egui;

use crate::gui::app::App;
use crate::session::Action;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = app.snapshot();

    ui.horizontal_wrapped(|ui| {
        ui.strong("Selected:");
        if snap.selection.is_empty() {
            ui.weak("none");
            return;
        }

        let mut removed = None;
        for key in snap.selection.iter() {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(snap.label_for(key));
                        if ui.small_button("x").on_hover_text("Remove").clicked() {
                            removed = Some(s!(key));
                        }
                    });
                });
        }
        if let Some(key) = removed {
            app.dispatch(Action::Remove(key));
        }
    });
}
