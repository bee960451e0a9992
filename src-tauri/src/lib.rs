//! Todo Bridge Host
//!
//! Layered architecture:
//! - domain: task list and its rules
//! - bridge: payload decoding and snapshot pushes
//! - commands: Tauri command handlers

use tauri::{Manager, RunEvent};

mod bridge;
mod commands;
mod domain;

#[cfg(test)]
mod tests;

use bridge::TodoHost;

/// Application state shared across commands
pub struct AppState {
    pub host: TodoHost,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            rolling_logger::init_logger(app.path().app_log_dir()?, "TodoBridge")?;
            log::info!("host starting");

            app.manage(AppState {
                host: TodoHost::new(),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![commands::bridge_invoke])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let RunEvent::Exit = event {
            if let Some(state) = app_handle.try_state::<AppState>() {
                let tasks = tauri::async_runtime::block_on(state.host.snapshot());
                log::info!("final state: {:?}", tasks);
            }
        }
    });
}
