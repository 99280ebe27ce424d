// src/gui/components/mod.rs
pub mod combo_grid;
pub mod glaze_list;
pub mod layer_bar;
pub mod mode_bar;
pub mod search_bar;
pub mod selected_panel;
