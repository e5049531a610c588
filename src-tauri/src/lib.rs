mod app;
mod commands;
mod domain;
mod infra;
mod shared;

pub(crate) use app::{app_state, resident, theme};
pub(crate) use domain::{bezels, placement};
pub(crate) use infra::{app_paths, settings};
pub(crate) use shared::blocking;

use app_state::{AppContext, PackContext};
use commands::*;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default()
        .manage(resident::ResidentState::default())
        .plugin(tauri_plugin_opener::init());

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        resident::show_main_window(app);
    }));

    builder
        .on_window_event(resident::on_window_event)
        .setup(|app| {
            crate::app::logging::init(app.handle());

            let app_settings = match settings::read(app.handle()) {
                Ok(cfg) => cfg,
                Err(err) => {
                    tracing::warn!("settings read failed, using defaults: {}", err);
                    settings::AppSettings::default()
                }
            };

            let pack_ctx = PackContext::resolve(app.handle(), &app_settings)?;
            tracing::info!(
                retroarch_root = %pack_ctx.layout.retroarch_root.display(),
                staging_root = %pack_ctx.layout.staging_root.display(),
                repo = %pack_ctx.repo.organization,
                "bezel context ready"
            );
            app.manage(AppContext::new(pack_ctx));

            app.state::<resident::ResidentState>()
                .set_tray_enabled(app_settings.tray_enabled);

            #[cfg(desktop)]
            {
                if let Err(err) = resident::setup_tray(app.handle()) {
                    tracing::error!("tray setup failed: {}", err);
                }
            }

            if let Err(err) = theme::emit_current(app.handle()) {
                tracing::warn!("initial theme push failed: {}", err);
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            app_ping,
            app_about_get,
            app_theme_is_dark,
            app_exit,
            settings_get,
            settings_set,
            bezels_list,
            bezels_enable,
            bezels_update_all,
            bezels_paths_get,
            bezels_open_dir
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
