// src/gui/actions/mod.rs
//
// Background work started from the UI. Each action spawns a thread and
// reports back as a session `Action` through the app's inbox.

mod load;
mod validate;

pub use load::load;
pub use validate::validate;
