//! Usage: Bezel pack domain (system catalog, install state probing, install/uninstall ops).

mod catalog;
mod ops;
mod paths;
mod types;

pub use catalog::KnownSystem;
pub use ops::{apply_selection, install, list_systems, uninstall, update_all};
pub use paths::{resolve_retroarch_root, PackLayout};
pub use types::{
    BezelPaths, BezelSystem, PackAction, PackOutcome, PackStatus, RepoRef,
    DEFAULT_REPO_ORGANIZATION,
};
