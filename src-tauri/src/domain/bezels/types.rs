use super::catalog::KnownSystem;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_REPO_ORGANIZATION: &str = "thebezelproject";

/// Snapshot of one catalog entry, probed from disk. Never mutated; re-list to observe changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BezelSystem {
    #[serde(rename = "name")]
    pub system: KnownSystem,
    pub path: PathBuf,
    pub is_installed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub organization: String,
}

impl Default for RepoRef {
    fn default() -> Self {
        Self {
            organization: DEFAULT_REPO_ORGANIZATION.to_string(),
        }
    }
}

impl RepoRef {
    pub fn pack_url(&self, system: KnownSystem) -> String {
        format!(
            "https://github.com/{}/bezelproject-{}",
            self.organization.trim(),
            system.as_str()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackAction {
    Install,
    Uninstall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackStatus {
    Installed,
    AlreadyInstalled,
    Uninstalled,
    AlreadyAbsent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackOutcome {
    pub system: String,
    pub action: PackAction,
    pub ok: bool,
    pub status: Option<PackStatus>,
    pub error: Option<String>,
}

impl PackOutcome {
    pub(super) fn from_result(
        system: &str,
        action: PackAction,
        result: Result<PackStatus, String>,
    ) -> Self {
        match result {
            Ok(status) => Self {
                system: system.to_string(),
                action,
                ok: true,
                status: Some(status),
                error: None,
            },
            Err(err) => Self {
                system: system.to_string(),
                action,
                ok: false,
                status: None,
                error: Some(err),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BezelPaths {
    pub retroarch_dir: String,
    pub configs_dir: String,
    pub staging_dir: String,
    pub repo_organization: String,
}
