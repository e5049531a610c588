use super::catalog::KnownSystem;
use super::types::BezelPaths;
use std::path::{Path, PathBuf};

/// Directories a pack operation reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
    pub retroarch_root: PathBuf,
    pub staging_root: PathBuf,
}

impl PackLayout {
    pub fn new(retroarch_root: PathBuf, staging_root: PathBuf) -> Self {
        Self {
            retroarch_root,
            staging_root,
        }
    }

    pub fn configs_all_dir(&self) -> PathBuf {
        self.retroarch_root.join("configs").join("all")
    }

    pub fn system_path(&self, system: KnownSystem) -> PathBuf {
        self.retroarch_root.join(system.installed_rel_path())
    }

    /// Where an externally fetched pack is expected before install copies it.
    pub fn staging_dir(&self, system: KnownSystem) -> PathBuf {
        self.staging_root.join(system.as_str())
    }

    pub fn paths(&self, repo_organization: &str) -> BezelPaths {
        BezelPaths {
            retroarch_dir: self.retroarch_root.to_string_lossy().to_string(),
            configs_dir: self.configs_all_dir().to_string_lossy().to_string(),
            staging_dir: self.staging_root.to_string_lossy().to_string(),
            repo_organization: repo_organization.to_string(),
        }
    }
}

/// Resolves a user-entered RetroArch path, expanding a leading `~`.
pub fn resolve_retroarch_root(raw: &str, home: &Path) -> Result<PathBuf, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("SEC_INVALID_INPUT: retroarch_path is required".to_string());
    }
    if raw == "~" {
        return Ok(home.to_path_buf());
    }
    if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_retroarch_root_expands_home() {
        let home = Path::new("/home/player");
        assert_eq!(
            resolve_retroarch_root("~/test-bezels/", home).expect("resolve"),
            home.join("test-bezels/")
        );
        assert_eq!(resolve_retroarch_root("~", home).expect("resolve"), home);
        assert_eq!(
            resolve_retroarch_root("/opt/retroarch", home).expect("resolve"),
            PathBuf::from("/opt/retroarch")
        );
    }

    #[test]
    fn resolve_retroarch_root_rejects_blank() {
        let err = resolve_retroarch_root("   ", Path::new("/home/player")).unwrap_err();
        assert!(err.starts_with("SEC_INVALID_INPUT:"), "{err}");
    }

    #[test]
    fn layout_paths_follow_retroarch_tree() {
        let layout = PackLayout::new(PathBuf::from("/ra"), PathBuf::from("/data/tmp"));
        assert_eq!(
            layout.configs_all_dir(),
            PathBuf::from("/ra").join("configs").join("all")
        );
        assert_eq!(
            layout.system_path(KnownSystem::Mame),
            PathBuf::from("/ra").join("overlay").join("ArcadeBezels")
        );
        assert_eq!(
            layout.system_path(KnownSystem::Psx),
            PathBuf::from("/ra")
                .join("overlay")
                .join("GameBezels")
                .join("PSX")
        );
        assert_eq!(
            layout.staging_dir(KnownSystem::Gba),
            PathBuf::from("/data/tmp").join("GBA")
        );
    }
}
