//! Usage: Tauri command handlers exposed to the popup UI.

mod app;
mod bezels;
mod settings;

pub(crate) use app::*;
pub(crate) use bezels::*;
pub(crate) use settings::*;
