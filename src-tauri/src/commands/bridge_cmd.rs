//! Tauri Command for the Bridge
//!
//! The only IPC entry point the view uses. Everything the view wants is
//! encoded in `payload`.

use tauri::{AppHandle, State};
use crate::AppState;

/// Receive one encoded command. Never returns data to the view.
#[tauri::command]
pub async fn bridge_invoke(
    app: AppHandle,
    state: State<'_, AppState>,
    payload: String,
) -> Result<(), String> {
    state.host.handle_payload(&payload, &app).await;
    Ok(())
}
