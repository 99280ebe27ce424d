// src/gui/components/search_bar.rs
//
// Autocomplete selector: a text field and the matching catalog entries.
// Clicking a suggestion (or Enter with exactly one) selects it and clears
// the field.

use eframe::egui;

use crate::gui::app::App;
use crate::session::Action;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = app.snapshot();
    let keys = snap.options.keys;

    ui.heading("Glazes");

    let mut text = snap.input.clone();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text("Type a glaze name…")
            .desired_width(f32::INFINITY),
    );
    if resp.changed() {
        app.dispatch(Action::InputChanged(text));
    }

    let entered = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if entered {
        if let [only] = snap.suggestions.as_slice() {
            app.dispatch(Action::PickSuggestion(s!(only.key(keys))));
            resp.request_focus();
            return;
        }
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("suggestions_scroll")
        .show(ui, |ui| {
            let mut picked = None;
            for entry in &snap.suggestions {
                let selected = snap.selection.contains(entry.key(keys));
                if ui.selectable_label(selected, &entry.label).clicked() {
                    picked = Some(s!(entry.key(keys)));
                }
            }
            if let Some(key) = picked {
                logd!("UI: Picked suggestion {}", key);
                app.dispatch(Action::PickSuggestion(key));
            }
        });
}
