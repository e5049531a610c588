//! Usage: Push the OS light/dark theme to the popup UI.

use tauri::Emitter;
use tauri::Manager;

pub const THEME_EVENT_NAME: &str = "theme-changed";

pub fn is_dark(theme: tauri::Theme) -> bool {
    matches!(theme, tauri::Theme::Dark)
}

pub fn emit(app: &tauri::AppHandle, theme: tauri::Theme) -> Result<(), String> {
    let dark = is_dark(theme);
    tracing::info!(dark, "updating theme");
    app.emit(THEME_EVENT_NAME, dark)
        .map_err(|e| format!("THEME_EMIT: {e}"))
}

pub fn current_is_dark(app: &tauri::AppHandle) -> bool {
    app.get_webview_window(super::resident::MAIN_WINDOW_LABEL)
        .and_then(|window| window.theme().ok())
        .is_some_and(is_dark)
}

pub fn emit_current(app: &tauri::AppHandle) -> Result<(), String> {
    let theme = if current_is_dark(app) {
        tauri::Theme::Dark
    } else {
        tauri::Theme::Light
    };
    emit(app, theme)
}

#[cfg(test)]
mod tests {
    use super::is_dark;

    #[test]
    fn only_dark_theme_is_dark() {
        assert!(is_dark(tauri::Theme::Dark));
        assert!(!is_dark(tauri::Theme::Light));
    }
}
