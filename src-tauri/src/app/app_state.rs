//! Usage: Shared Tauri state built once at startup and threaded into `commands/*`.

use crate::app_paths;
use crate::bezels::{resolve_retroarch_root, PackLayout, RepoRef};
use crate::settings::AppSettings;
use crate::shared::mutex_ext::MutexExt;
use std::path::Path;
use std::sync::Mutex;

/// Everything a pack operation needs, captured by value so in-flight work never observes a
/// settings change halfway through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PackContext {
    pub(crate) layout: PackLayout,
    pub(crate) repo: RepoRef,
}

impl PackContext {
    pub(crate) fn from_settings(
        settings: &AppSettings,
        home: &Path,
        staging_root: &Path,
    ) -> Result<Self, String> {
        let retroarch_root = resolve_retroarch_root(&settings.retroarch_path, home)?;
        Ok(Self {
            layout: PackLayout::new(retroarch_root, staging_root.to_path_buf()),
            repo: RepoRef {
                organization: settings.repo_organization.trim().to_string(),
            },
        })
    }

    pub(crate) fn resolve(app: &tauri::AppHandle, settings: &AppSettings) -> Result<Self, String> {
        let home = app_paths::home_dir(app)?;
        let staging_root = app_paths::staging_root(app)?;
        Self::from_settings(settings, &home, &staging_root)
    }
}

pub(crate) struct AppContext(Mutex<PackContext>);

impl AppContext {
    pub(crate) fn new(ctx: PackContext) -> Self {
        Self(Mutex::new(ctx))
    }

    pub(crate) fn snapshot(&self) -> PackContext {
        self.0.lock_or_recover().clone()
    }

    pub(crate) fn replace(&self, ctx: PackContext) {
        *self.0.lock_or_recover() = ctx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn pack_context_resolves_settings() {
        let settings = AppSettings {
            retroarch_path: "~/retroarch".to_string(),
            repo_organization: " my-bezels ".to_string(),
            ..AppSettings::default()
        };
        let ctx = PackContext::from_settings(
            &settings,
            Path::new("/home/player"),
            Path::new("/home/player/.bezel-tray/tmp"),
        )
        .expect("resolve");

        assert_eq!(
            ctx.layout.retroarch_root,
            PathBuf::from("/home/player").join("retroarch")
        );
        assert_eq!(
            ctx.layout.staging_root,
            PathBuf::from("/home/player/.bezel-tray/tmp")
        );
        assert_eq!(ctx.repo.organization, "my-bezels");
    }

    #[test]
    fn app_context_replace_is_visible_to_later_snapshots() {
        let first = PackContext {
            layout: PackLayout::new(PathBuf::from("/a"), PathBuf::from("/tmp/a")),
            repo: RepoRef::default(),
        };
        let second = PackContext {
            layout: PackLayout::new(PathBuf::from("/b"), PathBuf::from("/tmp/b")),
            repo: RepoRef::default(),
        };

        let state = AppContext::new(first.clone());
        let taken = state.snapshot();
        state.replace(second.clone());

        assert_eq!(taken, first);
        assert_eq!(state.snapshot(), second);
    }
}
