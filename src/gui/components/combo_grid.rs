// src/gui/components/combo_grid.rs
//
// Wrapped grid of combination cards. Images load through the egui_extras
// http loader; clicking one opens the combination page, and the link
// under it works even when the image doesn't.

use eframe::egui;

use crate::config::options::PairMode;
use crate::gui::app::App;
use crate::session::Snapshot;

struct Card<'a> {
    title: String,
    // (page url, image url)
    links: Vec<(&'a str, &'a str)>,
}

fn cards(snap: &Snapshot) -> Vec<Card<'_>> {
    match snap.options.pairs {
        PairMode::Undirected => snap
            .matches()
            .into_iter()
            .map(|m| Card {
                title: m.title(),
                links: m.entries.iter().map(|c| (c.url.as_str(), c.image_url.as_str())).collect(),
            })
            .collect(),
        PairMode::Directed => snap
            .visible_validated()
            .into_iter()
            .map(|v| Card {
                title: v.text.clone(),
                links: vec![(v.url.as_str(), v.image_url.as_str())],
            })
            .collect(),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = app.snapshot();

    if snap.selection.is_empty() {
        empty_state(ui, "No glazes selected");
        return;
    }
    if snap.is_loading() {
        return;
    }

    let cards = cards(&snap);
    if cards.is_empty() {
        empty_state(ui, "No combinations found");
        return;
    }

    let thumb_w = app.state.gui.thumb_w;
    egui::ScrollArea::vertical()
        .id_salt("combo_grid_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for card in &cards {
                    draw_card(ui, card, thumb_w);
                }
            });
        });
}

fn draw_card(ui: &mut egui::Ui, card: &Card<'_>, thumb_w: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.set_width(thumb_w);
            ui.strong(&card.title);
            for (url, image_url) in &card.links {
                let img = egui::Image::new(*image_url)
                    .max_width(thumb_w)
                    .maintain_aspect_ratio(true)
                    .show_loading_spinner(true)
                    .sense(egui::Sense::click());
                let resp = ui.add(img).on_hover_text(*url);
                if resp.clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(*url));
                }
                ui.hyperlink_to("Open on amaco.com", *url);
            }
        });
    });
}

fn empty_state(ui: &mut egui::Ui, msg: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.weak(msg);
    });
}
