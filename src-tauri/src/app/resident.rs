//! Usage: Desktop resident mode (tray icon, popup placement, window lifecycle hooks).

use crate::placement::{self, Position, Rect};
use crate::shared::mutex_ext::MutexExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const POSITION_EVENT_NAME: &str = "tray:position";
const TRAY_ID: &str = "main-tray";
const TRAY_MENU_TOGGLE_ID: &str = "tray.toggle";
const TRAY_MENU_QUIT_ID: &str = "tray.quit";

pub struct ResidentState {
    tray_enabled: AtomicBool,
    // Physical-pixel bounds of the tray icon from the most recent click.
    last_tray_rect: Mutex<Option<Rect>>,
}

impl Default for ResidentState {
    fn default() -> Self {
        Self {
            tray_enabled: AtomicBool::new(true),
            last_tray_rect: Mutex::new(None),
        }
    }
}

impl ResidentState {
    pub fn set_tray_enabled(&self, enabled: bool) {
        self.tray_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn tray_enabled(&self) -> bool {
        self.tray_enabled.load(Ordering::Relaxed)
    }

    pub fn remember_tray_rect(&self, rect: Rect) {
        *self.last_tray_rect.lock_or_recover() = Some(rect);
    }

    pub fn last_tray_rect(&self) -> Option<Rect> {
        *self.last_tray_rect.lock_or_recover()
    }
}

#[cfg(not(desktop))]
pub fn setup_tray(_app: &tauri::AppHandle) -> Result<(), String> {
    Ok(())
}

#[cfg(not(desktop))]
pub fn show_main_window(_app: &tauri::AppHandle) {}

#[cfg(not(desktop))]
pub fn on_window_event(_window: &tauri::Window, _event: &tauri::WindowEvent) {}

#[cfg(desktop)]
use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
#[cfg(desktop)]
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
#[cfg(desktop)]
use tauri::{Emitter, Manager};

#[cfg(desktop)]
pub fn setup_tray(app: &tauri::AppHandle) -> Result<(), String> {
    let toggle_item = MenuItem::with_id(app, TRAY_MENU_TOGGLE_ID, "Show/Hide", true, None::<&str>)
        .map_err(|e| format!("failed to create tray toggle menu item: {e}"))?;
    let quit_item = MenuItem::with_id(app, TRAY_MENU_QUIT_ID, "Quit", true, None::<&str>)
        .map_err(|e| format!("failed to create tray quit menu item: {e}"))?;
    let separator = PredefinedMenuItem::separator(app)
        .map_err(|e| format!("failed to create tray menu separator: {e}"))?;

    let menu = Menu::with_items(app, &[&toggle_item, &separator, &quit_item])
        .map_err(|e| format!("failed to create tray menu: {e}"))?;

    let toggle_id = toggle_item.id().clone();
    let quit_id = quit_item.id().clone();

    #[cfg(target_os = "macos")]
    let icon_bytes = include_bytes!("../../icons/trayTemplate.png");
    #[cfg(not(target_os = "macos"))]
    let icon_bytes = include_bytes!("../../icons/32x32.png");

    let icon = tauri::image::Image::from_bytes(icon_bytes)
        .map_err(|e| format!("failed to load tray icon: {e}"))?;

    let tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip("Bezel Tray")
        .menu(&menu);

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .show_menu_on_left_click(false)
        .on_menu_event(move |app, event| {
            if event.id == quit_id {
                app.exit(0);
                return;
            }
            if event.id == toggle_id {
                toggle_main_window(app);
            }
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button,
                button_state,
                rect,
                ..
            } = event
            {
                if button == MouseButton::Left && button_state == MouseButtonState::Up {
                    let app = tray.app_handle();
                    remember_tray_rect(app, &rect);
                    toggle_main_window(app);
                }
            }
        })
        .build(app)
        .map_err(|e| format!("failed to build tray icon: {e}"))?;

    Ok(())
}

#[cfg(desktop)]
fn remember_tray_rect(app: &tauri::AppHandle, rect: &tauri::Rect) {
    let scale = app
        .get_webview_window(MAIN_WINDOW_LABEL)
        .and_then(|window| window.scale_factor().ok())
        .unwrap_or(1.0);
    let position = rect.position.to_physical::<f64>(scale);
    let size = rect.size.to_physical::<f64>(scale);
    app.state::<ResidentState>().remember_tray_rect(Rect::new(
        position.x,
        position.y,
        size.width,
        size.height,
    ));
}

#[cfg(desktop)]
fn screen_bounds(window: &tauri::WebviewWindow, tray: Rect) -> Result<Option<Rect>, String> {
    let monitor = match window.monitor_from_point(tray.x, tray.y) {
        Ok(Some(monitor)) => Some(monitor),
        _ => window
            .current_monitor()
            .map_err(|e| format!("failed to query current monitor: {e}"))?,
    };
    Ok(monitor.map(|monitor| {
        let position = monitor.position();
        let size = monitor.size();
        Rect::new(
            f64::from(position.x),
            f64::from(position.y),
            f64::from(size.width),
            f64::from(size.height),
        )
    }))
}

/// Moves the popup next to the tray icon and tells the UI where it landed. Returns `None` when
/// no tray click has been seen yet (e.g. the window was opened from a second launch).
#[cfg(desktop)]
pub fn position_main_window(app: &tauri::AppHandle) -> Result<Option<Position>, String> {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return Ok(None);
    };
    let Some(tray) = app.state::<ResidentState>().last_tray_rect() else {
        return Ok(None);
    };

    let size = window
        .outer_size()
        .map_err(|e| format!("failed to query window size: {e}"))?;
    let origin = window
        .outer_position()
        .map_err(|e| format!("failed to query window position: {e}"))?;
    let window_bounds = Rect::new(
        f64::from(origin.x),
        f64::from(origin.y),
        f64::from(size.width),
        f64::from(size.height),
    );

    let Some(screen) = screen_bounds(&window, tray)? else {
        tracing::warn!("no monitor found for tray icon; leaving popup where it is");
        return Ok(None);
    };

    let position = placement::compute_position(window_bounds, tray, screen);
    window
        .set_position(tauri::PhysicalPosition::new(position.x, position.y))
        .map_err(|e| format!("failed to move window: {e}"))?;
    app.emit(POSITION_EVENT_NAME, position)
        .map_err(|e| format!("POSITION_EMIT: {e}"))?;

    tracing::debug!(
        x = position.x,
        y = position.y,
        is_on_top = position.is_on_top,
        "popup positioned"
    );
    Ok(Some(position))
}

#[cfg(desktop)]
pub fn show_main_window(app: &tauri::AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    if let Err(err) = position_main_window(app) {
        tracing::warn!("popup placement failed: {}", err);
    }

    let _ = window.show();
    let _ = window.unminimize();
    let _ = window.set_focus();
}

#[cfg(desktop)]
fn toggle_main_window(app: &tauri::AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    let is_visible = window.is_visible().unwrap_or(false);
    let is_minimized = window.is_minimized().unwrap_or(false);

    if !is_visible || is_minimized {
        show_main_window(app);
        return;
    }

    let _ = window.hide();
}

#[cfg(desktop)]
pub fn on_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    match event {
        tauri::WindowEvent::CloseRequested { api, .. } => {
            api.prevent_close();

            let resident = window.state::<ResidentState>();
            if resident.tray_enabled() {
                let _ = window.hide();
            } else {
                let _ = window.minimize();
            }
        }
        tauri::WindowEvent::ThemeChanged(theme) => {
            if let Err(err) = super::theme::emit(window.app_handle(), *theme) {
                tracing::warn!("theme push failed: {}", err);
            }
        }
        _ => {}
    }

    if !repositions_on(event) || !window.is_visible().unwrap_or(false) {
        return;
    }
    if let Err(err) = position_main_window(window.app_handle()) {
        tracing::warn!("popup placement after display change failed: {}", err);
    }
}

/// Display-level changes that can move the tray icon or the monitor bounds under a visible
/// popup. `Moved`/`Resized` are left out: placing the popup fires them itself.
#[cfg_attr(not(desktop), allow(dead_code))]
fn repositions_on(event: &tauri::WindowEvent) -> bool {
    matches!(
        event,
        tauri::WindowEvent::ThemeChanged(_) | tauri::WindowEvent::ScaleFactorChanged { .. }
    )
}
