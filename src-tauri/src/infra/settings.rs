//! Usage: Persisted application settings (schema + read/write helpers).

use crate::app_paths;
use crate::bezels::DEFAULT_REPO_ORGANIZATION;
use crate::shared::fs::write_file_atomic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_RETROARCH_PATH: &str = "~/test-bezels/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub schema_version: u32,
    // Root of the RetroArch install; `~` expands to the home dir.
    pub retroarch_path: String,
    pub repo_organization: String,
    // Closing the popup hides it to the tray when enabled, minimizes otherwise.
    pub tray_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            retroarch_path: DEFAULT_RETROARCH_PATH.to_string(),
            repo_organization: DEFAULT_REPO_ORGANIZATION.to_string(),
            tray_enabled: true,
        }
    }
}

fn settings_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_paths::app_data_dir(app)?.join("settings.json"))
}

fn validate(settings: &AppSettings) -> Result<(), String> {
    if settings.retroarch_path.trim().is_empty() {
        return Err("SEC_INVALID_INPUT: retroarch_path is required".to_string());
    }
    if settings.repo_organization.trim().is_empty() {
        return Err("SEC_INVALID_INPUT: repo_organization is required".to_string());
    }
    Ok(())
}

fn sanitize(settings: &mut AppSettings) -> bool {
    let mut changed = false;

    if settings.schema_version != SCHEMA_VERSION {
        settings.schema_version = SCHEMA_VERSION;
        changed = true;
    }
    if settings.retroarch_path.trim().is_empty() {
        settings.retroarch_path = DEFAULT_RETROARCH_PATH.to_string();
        changed = true;
    }
    if settings.repo_organization.trim().is_empty() {
        settings.repo_organization = DEFAULT_REPO_ORGANIZATION.to_string();
        changed = true;
    }

    changed
}

pub(crate) fn read_at(path: &Path) -> Result<AppSettings, String> {
    if !path.exists() {
        let settings = AppSettings::default();
        // Best-effort: create default settings.json on first read to make the config discoverable/editable.
        let _ = write_at(path, &settings);
        return Ok(settings);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("SETTINGS_READ: failed to read {}: {e}", path.display()))?;
    let mut settings: AppSettings = serde_json::from_str(&content)
        .map_err(|e| format!("SETTINGS_PARSE: failed to parse settings.json: {e}"))?;

    if sanitize(&mut settings) {
        // Best-effort: persist repaired values while keeping read semantics.
        let _ = write_at(path, &settings);
    }

    Ok(settings)
}

pub(crate) fn write_at(path: &Path, settings: &AppSettings) -> Result<AppSettings, String> {
    validate(settings)?;

    let mut settings = settings.clone();
    settings.schema_version = SCHEMA_VERSION;

    let content = serde_json::to_vec_pretty(&settings)
        .map_err(|e| format!("SETTINGS_WRITE: failed to serialize settings: {e}"))?;
    write_file_atomic(path, &content)?;

    Ok(settings)
}

pub fn read(app: &tauri::AppHandle) -> Result<AppSettings, String> {
    read_at(&settings_path(app)?)
}

pub fn write(app: &tauri::AppHandle, settings: &AppSettings) -> Result<AppSettings, String> {
    write_at(&settings_path(app)?, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fs::test_support::unique_tmp_dir;

    #[test]
    fn read_creates_default_file_on_first_use() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join("settings.json");

        let settings = read_at(&path).expect("read");
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_fills_missing_fields_and_repairs_blank_values() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{ "retroarch_path": "", "tray_enabled": false }"#)
            .expect("write");

        let settings = read_at(&path).expect("read");
        assert_eq!(settings.retroarch_path, DEFAULT_RETROARCH_PATH);
        assert_eq!(settings.repo_organization, DEFAULT_REPO_ORGANIZATION);
        assert!(!settings.tray_enabled);
        assert_eq!(settings.schema_version, SCHEMA_VERSION);

        let persisted = std::fs::read_to_string(&path).expect("read back");
        assert!(persisted.contains("\"schema_version\": 1"), "{persisted}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_rejects_malformed_json() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join("settings.json");
        std::fs::write(&path, "{ not json").expect("write");

        let err = read_at(&path).unwrap_err();
        assert!(err.starts_with("SETTINGS_PARSE:"), "{err}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_rejects_blank_retroarch_path() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join("settings.json");
        let settings = AppSettings {
            retroarch_path: "  ".to_string(),
            ..AppSettings::default()
        };

        let err = write_at(&path, &settings).unwrap_err();
        assert!(err.starts_with("SEC_INVALID_INPUT:"), "{err}");
        assert!(!path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_then_read_keeps_values() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join("settings.json");
        let settings = AppSettings {
            retroarch_path: "/opt/retroarch".to_string(),
            repo_organization: "my-bezels".to_string(),
            tray_enabled: false,
            ..AppSettings::default()
        };

        write_at(&path, &settings).expect("write");
        assert_eq!(read_at(&path).expect("read"), settings);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
