//! Usage: Settings related Tauri commands.

use crate::app_state::{AppContext, PackContext};
use crate::{blocking, resident, settings};

#[tauri::command]
pub(crate) async fn settings_get(app: tauri::AppHandle) -> Result<settings::AppSettings, String> {
    blocking::run("settings_get", move || settings::read(&app)).await
}

#[tauri::command]
pub(crate) async fn settings_set(
    app: tauri::AppHandle,
    ctx: tauri::State<'_, AppContext>,
    resident_state: tauri::State<'_, resident::ResidentState>,
    settings: settings::AppSettings,
) -> Result<settings::AppSettings, String> {
    let (saved, pack_ctx) = blocking::run("settings_set", {
        let app = app.clone();
        move || {
            let pack_ctx = PackContext::resolve(&app, &settings)?;
            let saved = settings::write(&app, &settings)?;
            Ok((saved, pack_ctx))
        }
    })
    .await?;

    ctx.replace(pack_ctx);
    resident_state.set_tray_enabled(saved.tray_enabled);
    tracing::info!(retroarch_path = %saved.retroarch_path, "settings updated");
    Ok(saved)
}
