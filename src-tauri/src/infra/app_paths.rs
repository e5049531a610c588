//! Usage: Resolve per-user app data directory and related path helpers.

use std::path::PathBuf;
use tauri::Manager;

pub const APP_DOTDIR_NAME: &str = ".bezel-tray";
const APP_DOTDIR_NAME_ENV: &str = "BEZEL_TRAY_DOTDIR_NAME";

fn is_safe_dotdir_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if !name.starts_with('.') {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

pub fn home_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    app.path()
        .home_dir()
        .map_err(|e| format!("failed to resolve home dir: {e}"))
}

pub fn app_data_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let dotdir_name = std::env::var(APP_DOTDIR_NAME_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| is_safe_dotdir_name(v))
        .unwrap_or_else(|| APP_DOTDIR_NAME.to_string());

    let dir = home_dir(app)?.join(dotdir_name);
    std::fs::create_dir_all(&dir).map_err(|e| format!("failed to create app dir: {e}"))?;

    Ok(dir)
}

/// Packs are expected here (one subdirectory per system) before install copies them.
pub fn staging_root(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_data_dir(app)?.join("tmp"))
}

pub fn logs_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_data_dir(app)?.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::is_safe_dotdir_name;

    #[test]
    fn safe_dotdir_names() {
        assert!(is_safe_dotdir_name(".bezel-tray"));
        assert!(is_safe_dotdir_name(".bezel_tray.dev"));
        assert!(!is_safe_dotdir_name("bezel-tray"));
        assert!(!is_safe_dotdir_name(".."));
        assert!(!is_safe_dotdir_name(".a/b"));
        assert!(!is_safe_dotdir_name(".a b"));
    }
}
