//! Usage: Bezel pack related Tauri commands (list, enable selection, bulk update).

use crate::app_state::AppContext;
use crate::{bezels, blocking};
use std::collections::BTreeMap;
use tauri::Emitter;
use tauri_plugin_opener::OpenerExt;

pub(crate) const BEZELS_CHANGED_EVENT_NAME: &str = "bezels:changed";

fn broadcast(app: &tauri::AppHandle, outcomes: &[bezels::PackOutcome]) {
    let failed = outcomes.iter().filter(|o| !o.ok).count();
    if failed > 0 {
        tracing::warn!(failed, total = outcomes.len(), "some bezel pack operations failed");
    }
    if let Err(err) = app.emit(BEZELS_CHANGED_EVENT_NAME, outcomes) {
        tracing::warn!("failed to emit {}: {}", BEZELS_CHANGED_EVENT_NAME, err);
    }
}

#[tauri::command]
pub(crate) async fn bezels_list(
    ctx: tauri::State<'_, AppContext>,
) -> Result<Vec<bezels::BezelSystem>, String> {
    let ctx = ctx.snapshot();
    blocking::run("bezels_list", move || Ok(bezels::list_systems(&ctx.layout))).await
}

#[tauri::command]
pub(crate) async fn bezels_enable(
    app: tauri::AppHandle,
    ctx: tauri::State<'_, AppContext>,
    selection: BTreeMap<String, bool>,
) -> Result<Vec<bezels::PackOutcome>, String> {
    let ctx = ctx.snapshot();
    tracing::info!(selected = selection.len(), "enable bezels requested");
    let outcomes = bezels::apply_selection(ctx.layout, ctx.repo, selection).await;
    broadcast(&app, &outcomes);
    Ok(outcomes)
}

#[tauri::command]
pub(crate) async fn bezels_update_all(
    app: tauri::AppHandle,
    ctx: tauri::State<'_, AppContext>,
    action: bezels::PackAction,
) -> Result<Vec<bezels::PackOutcome>, String> {
    let ctx = ctx.snapshot();
    tracing::info!(action = ?action, "bulk bezel update requested");
    let outcomes = bezels::update_all(ctx.layout, ctx.repo, action).await;
    broadcast(&app, &outcomes);
    Ok(outcomes)
}

#[tauri::command]
pub(crate) fn bezels_paths_get(ctx: tauri::State<'_, AppContext>) -> bezels::BezelPaths {
    let ctx = ctx.snapshot();
    ctx.layout.paths(&ctx.repo.organization)
}

#[tauri::command]
pub(crate) async fn bezels_open_dir(
    app: tauri::AppHandle,
    ctx: tauri::State<'_, AppContext>,
) -> Result<bool, String> {
    let root = ctx.snapshot().layout.retroarch_root;
    let dir = root.clone();
    blocking::run("bezels_open_dir_ensure", move || {
        crate::shared::fs::ensure_dir(&dir)
    })
    .await?;

    app.opener()
        .open_path(root.to_string_lossy().to_string(), None::<&str>)
        .map_err(|e| format!("OPEN_DIR: failed to open {}: {e}", root.display()))?;
    Ok(true)
}
