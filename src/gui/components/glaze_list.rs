// src/gui/components/glaze_list.rs
//
// Checkbox selector: one toggle per catalog entry, bound to selection
// membership.

use eframe::egui;

use crate::gui::app::App;
use crate::session::Action;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = app.snapshot();
    let keys = snap.options.keys;

    ui.heading("Glazes");
    ui.horizontal(|ui| {
        if ui.button("None").clicked() {
            app.dispatch(Action::Clear);
        }
        ui.weak(format!("{} selected", snap.selection.len()));
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("glaze_list_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            let mut toggled = None;
            for entry in snap.catalog.entries() {
                let mut on = snap.selection.contains(entry.key(keys));
                if ui.checkbox(&mut on, &entry.label).changed() {
                    toggled = Some(s!(entry.key(keys)));
                }
            }
            if let Some(key) = toggled {
                app.dispatch(Action::Toggle(key));
            }
        });
}
