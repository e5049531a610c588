//! Usage: Infrastructure adapters (filesystem paths, persisted settings).

pub(crate) mod app_paths;
pub(crate) mod settings;
